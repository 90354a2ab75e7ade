use crate::documents::{step_path, WorkflowDocument, STEP_TYPE_ASSERT, STEP_TYPE_HTTP};
use crate::rules::{canonical_field_name, CURRENT_API_PREFIX, LEGACY_API_PREFIX};
use flowlint_core::{AppliedFix, FieldPath};
use regex::{Captures, Regex};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// A rewrite over the `definition` object; returns one entry per change made.
pub type FixRule = fn(&mut Map<String, Value>) -> Vec<AppliedFix>;

/// Rewrites in application order.
pub const FIX_RULES: &[FixRule] = &[fix_base_url, fix_deprecated_body_fields, fix_status_paths];

const STATUS_PLACEHOLDER_PATTERN: &str = r"\{\{([^{}]+)\.status\}\}";

/// Applies every fix rule in place and returns what changed.
///
/// Documents without an object `definition` are left as they are.
pub fn fix_workflow_document(workflow: &mut WorkflowDocument) -> Vec<AppliedFix> {
    let Some(definition) = workflow.definition_mut() else {
        return Vec::new();
    };
    let mut fixes = Vec::new();
    for rule in FIX_RULES {
        fixes.extend(rule(&mut *definition));
    }
    fixes
}

fn fix_base_url(definition: &mut Map<String, Value>) -> Vec<AppliedFix> {
    let Some(Value::String(base_url)) = definition
        .get_mut("variables")
        .and_then(Value::as_object_mut)
        .and_then(|variables| variables.get_mut("baseUrl"))
    else {
        return Vec::new();
    };
    if !base_url.contains(LEGACY_API_PREFIX) {
        return Vec::new();
    }

    // Repeat until stable: "/api/v2/v2" collapses to "/api" rather than "/api/v2".
    while base_url.contains(LEGACY_API_PREFIX) {
        *base_url = base_url.replace(LEGACY_API_PREFIX, CURRENT_API_PREFIX);
    }
    vec![AppliedFix::new(
        "fix.variables.base_url",
        None,
        FieldPath::from_keys(["definition", "variables", "baseUrl"]),
        "Fixed baseUrl",
    )]
}

fn fix_deprecated_body_fields(definition: &mut Map<String, Value>) -> Vec<AppliedFix> {
    let mut fixes = Vec::new();
    for (step_id, step) in steps_of_type_mut(definition, STEP_TYPE_HTTP) {
        let Some(body) = step
            .get_mut("config")
            .and_then(Value::as_object_mut)
            .and_then(|config| config.get_mut("body"))
            .and_then(Value::as_object_mut)
        else {
            continue;
        };

        let body_path = step_path(step_id).with_key("config").with_key("body");
        let mut renamed = Map::with_capacity(body.len());
        let mut migrated = HashSet::<&'static str>::new();
        for (key, value) in std::mem::take(body) {
            match canonical_field_name(&key) {
                Some(canonical) => {
                    fixes.push(AppliedFix::new(
                        "fix.http.deprecated_field",
                        Some(step_id),
                        body_path.with_key(key.as_str()),
                        format!("{step_id}: {key} -> {canonical}"),
                    ));
                    // Overwrites an earlier canonical key in place, keeping its position.
                    renamed.insert(canonical.to_string(), value);
                    migrated.insert(canonical);
                }
                // The migrated value wins over a canonical key that comes later.
                None if migrated.contains(key.as_str()) => {}
                None => {
                    renamed.insert(key, value);
                }
            }
        }
        *body = renamed;
    }
    fixes
}

fn fix_status_paths(definition: &mut Map<String, Value>) -> Vec<AppliedFix> {
    let pattern = Regex::new(STATUS_PLACEHOLDER_PATTERN).expect("valid regex");
    let mut fixes = Vec::new();
    for (step_id, step) in steps_of_type_mut(definition, STEP_TYPE_ASSERT) {
        let Some(assertions) = step
            .get_mut("config")
            .and_then(Value::as_object_mut)
            .and_then(|config| config.get_mut("assertions"))
            .and_then(Value::as_array_mut)
        else {
            continue;
        };

        for (index, assertion) in assertions.iter_mut().enumerate() {
            let Some(Value::String(actual)) = assertion.get_mut("actual") else {
                continue;
            };
            let rewritten = rewrite_status_placeholders(&pattern, actual);
            if rewritten == *actual {
                continue;
            }
            *actual = rewritten;
            fixes.push(AppliedFix::new(
                "fix.assert.status_path",
                Some(step_id),
                step_path(step_id)
                    .with_key("config")
                    .with_key("assertions")
                    .with_index(index)
                    .with_key("actual"),
                format!("{step_id}: Fixed status path"),
            ));
        }
    }
    fixes
}

/// Rewrites `{{<path>.status}}` to `{{<path>.response.statusCode}}`.
///
/// Matches wrapped in extra braces (`{{{a.status}}}`) are kept verbatim.
fn rewrite_status_placeholders(pattern: &Regex, text: &str) -> String {
    pattern
        .replace_all(text, |captures: &Captures<'_>| {
            let Some(whole) = captures.get(0) else {
                return String::new();
            };
            let extra_open = text[..whole.start()].ends_with('{');
            let extra_close = text[whole.end()..].starts_with('}');
            if extra_open || extra_close {
                whole.as_str().to_string()
            } else {
                format!("{{{{{}.response.statusCode}}}}", &captures[1])
            }
        })
        .into_owned()
}

fn steps_of_type_mut<'a>(
    definition: &'a mut Map<String, Value>,
    step_type: &'a str,
) -> impl Iterator<Item = (&'a str, &'a mut Map<String, Value>)> + 'a {
    definition
        .get_mut("steps")
        .and_then(Value::as_object_mut)
        .into_iter()
        .flat_map(|steps| steps.iter_mut())
        .filter_map(move |(step_id, step)| {
            let step = step.as_object_mut()?;
            if step.get("type").and_then(Value::as_str) != Some(step_type) {
                return None;
            }
            Some((step_id.as_str(), step))
        })
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
