use crate::field_path::FieldPath;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A structural error or convention warning produced by a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_id: Option<String>,
    pub field_path: FieldPath,
    pub message: String,
}

impl Finding {
    pub fn error(rule: &str, field_path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            severity: Severity::Error,
            step_id: None,
            field_path,
            message: message.into(),
        }
    }

    pub fn warning(
        rule: &str,
        step_id: &str,
        field_path: FieldPath,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.to_string(),
            severity: Severity::Warning,
            step_id: Some(step_id.to_string()),
            field_path,
            message: message.into(),
        }
    }
}

/// A rewrite the fixer performed on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedFix {
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_id: Option<String>,
    pub field_path: FieldPath,
    pub message: String,
}

impl AppliedFix {
    pub fn new(
        rule: &str,
        step_id: Option<&str>,
        field_path: FieldPath,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.to_string(),
            step_id: step_id.map(str::to_string),
            field_path,
            message: message.into(),
        }
    }
}

/// Ordered errors, warnings and fixes accumulated over one document run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Findings {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub fixes: Vec<AppliedFix>,
}

impl Findings {
    /// Routes a finding into `errors` or `warnings` by severity.
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.push(finding);
        }
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|finding| finding.message.as_str()).collect()
    }

    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|finding| finding.message.as_str()).collect()
    }

    pub fn fix_messages(&self) -> Vec<&str> {
        self.fixes.iter().map(|fix| fix.message.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "findings_test.rs"]
mod tests;
