//! Naming conventions shared by the validator and the fixer.

/// Deprecated body field names and their canonical replacements.
pub const FIELD_MAPPINGS: &[(&str, &str)] = &[
    ("test_id", "testId"),
    ("group_id", "groupId"),
    ("tenant_id", "tenantId"),
    ("project_id", "projectId"),
    ("parent_id", "parentId"),
    ("http_config", "http"),
];

pub(crate) const LEGACY_API_PREFIX: &str = "/api/v2";
pub(crate) const CURRENT_API_PREFIX: &str = "/api";

pub(crate) const LEGACY_STATUS_SUFFIX: &str = ".status}}";
pub(crate) const CANONICAL_STATUS_PATH: &str = ".response.statusCode";

/// Exact, case-sensitive lookup of the canonical name for a deprecated field.
pub fn canonical_field_name(field: &str) -> Option<&'static str> {
    FIELD_MAPPINGS
        .iter()
        .find(|(deprecated, _)| *deprecated == field)
        .map(|(_, canonical)| *canonical)
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
