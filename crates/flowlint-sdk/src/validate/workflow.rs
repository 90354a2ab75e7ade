use crate::documents::{WorkflowDocument, WorkflowStep};
use crate::rules::{canonical_field_name, CANONICAL_STATUS_PATH, LEGACY_STATUS_SUFFIX};
use flowlint_core::{FieldPath, Finding};
use serde_json::Value;

/// A convention check applied to every step of a structurally valid document.
pub type StepRule = fn(&WorkflowStep<'_>, &mut Vec<Finding>);

/// Step checks in the order their findings are reported for each step.
pub const STEP_RULES: &[StepRule] = &[check_deprecated_body_fields, check_legacy_status_paths];

/// Collects structural errors and convention warnings without touching the document.
///
/// A missing or malformed `definition` is fatal: step checks are skipped.
pub fn validate_workflow_document(workflow: &WorkflowDocument) -> Vec<Finding> {
    let mut findings = Vec::new();

    if workflow.workflow_id().is_none() {
        findings.push(Finding::error(
            "workflow.structure.workflow_id_required",
            FieldPath::from_keys(["workflowId"]),
            "Missing: workflowId",
        ));
    }

    match workflow.definition() {
        None => {
            findings.push(Finding::error(
                "workflow.structure.definition_required",
                FieldPath::from_keys(["definition"]),
                "Missing: definition",
            ));
            return findings;
        }
        Some(Value::Object(_)) => {}
        Some(_) => {
            findings.push(Finding::error(
                "workflow.structure.definition_object",
                FieldPath::from_keys(["definition"]),
                "Invalid: definition must be an object",
            ));
            return findings;
        }
    }

    for step in workflow.steps() {
        for rule in STEP_RULES {
            rule(&step, &mut findings);
        }
    }

    findings
}

fn check_deprecated_body_fields(step: &WorkflowStep<'_>, findings: &mut Vec<Finding>) {
    let Some(body) = step.http_body() else {
        return;
    };
    let body_path = step.path().with_key("config").with_key("body");
    for key in body.keys() {
        let Some(canonical) = canonical_field_name(key) else {
            continue;
        };
        findings.push(Finding::warning(
            "workflow.http.deprecated_field",
            step.id,
            body_path.with_key(key.as_str()),
            format!("{}: Use '{canonical}' not '{key}'", step.id),
        ));
    }
}

// Substring heuristic: any `.response.statusCode` in the value counts as canonical,
// even outside the placeholder.
fn check_legacy_status_paths(step: &WorkflowStep<'_>, findings: &mut Vec<Finding>) {
    let assertions_path = step.path().with_key("config").with_key("assertions");
    for (index, actual) in step.assertion_actuals() {
        if actual.contains(LEGACY_STATUS_SUFFIX) && !actual.contains(CANONICAL_STATUS_PATH) {
            findings.push(Finding::warning(
                "workflow.assert.legacy_status_path",
                step.id,
                assertions_path.with_index(index).with_key("actual"),
                format!("{}: Use .response.statusCode not .status", step.id),
            ));
        }
    }
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
