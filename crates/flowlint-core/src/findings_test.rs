use super::{AppliedFix, Finding, Findings, Severity};
use crate::FieldPath;

#[test]
fn push_routes_by_severity_and_keeps_order() {
    let mut findings = Findings::default();
    findings.push(Finding::warning(
        "workflow.http.deprecated_field",
        "create",
        FieldPath::root(),
        "create: Use 'testId' not 'test_id'",
    ));
    findings.push(Finding::error(
        "workflow.structure.workflow_id_required",
        FieldPath::from_keys(["workflowId"]),
        "Missing: workflowId",
    ));
    findings.push(Finding::warning(
        "workflow.http.deprecated_field",
        "create",
        FieldPath::root(),
        "create: Use 'groupId' not 'group_id'",
    ));

    assert_eq!(findings.error_messages(), vec!["Missing: workflowId"]);
    assert_eq!(
        findings.warning_messages(),
        vec![
            "create: Use 'testId' not 'test_id'",
            "create: Use 'groupId' not 'group_id'"
        ]
    );
    assert!(!findings.passed());
}

#[test]
fn warnings_do_not_fail_but_are_not_clean() {
    let mut findings = Findings::default();
    findings.push(Finding::warning("w", "s1", FieldPath::root(), "advisory"));
    assert!(findings.passed());
    assert!(!findings.is_clean());
}

#[test]
fn finding_serializes_lowercase_severity_and_skips_missing_step() {
    let finding = Finding::error(
        "workflow.structure.definition_required",
        FieldPath::from_keys(["definition"]),
        "Missing: definition",
    );
    let value = serde_json::to_value(&finding).expect("must encode");
    assert_eq!(value["severity"], "error");
    assert_eq!(value["field_path"], "$.definition");
    assert!(value.get("step_id").is_none());

    let fix = AppliedFix::new("fix.base_url", None, FieldPath::root(), "Fixed baseUrl");
    assert_eq!(Severity::Error, finding.severity);
    assert_eq!(fix.step_id, None);
}
