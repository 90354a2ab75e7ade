use super::{fix_workflow_document, rewrite_status_placeholders, STATUS_PLACEHOLDER_PATTERN};
use crate::documents::WorkflowDocument;
use crate::parse::parse_workflow_value;
use flowlint_core::AppliedFix;
use regex::Regex;
use serde_json::{json, Value};

#[test]
fn base_url_is_normalized_with_single_fix_entry() {
    let mut workflow = workflow_doc(json!({
        "workflowId": "wf-1",
        "definition": {"variables": {"baseUrl": "https://x/api/v2/users/api/v2"}}
    }));

    let fixes = fix_workflow_document(&mut workflow);

    assert_eq!(messages(&fixes), vec!["Fixed baseUrl"]);
    assert_eq!(
        workflow.to_value()["definition"]["variables"]["baseUrl"],
        "https://x/api/users/api"
    );
    assert_eq!(
        fixes[0].field_path.to_string(),
        "$.definition.variables.baseUrl"
    );
}

#[test]
fn base_url_without_legacy_prefix_is_untouched() {
    let mut workflow = workflow_doc(json!({
        "definition": {"variables": {"baseUrl": "https://x/api/users"}}
    }));
    let before = workflow.clone();

    assert!(fix_workflow_document(&mut workflow).is_empty());
    assert_eq!(workflow, before);
}

#[test]
fn base_url_collapses_repeated_versions() {
    let mut workflow = workflow_doc(json!({
        "definition": {"variables": {"baseUrl": "https://x/api/v2/v2"}}
    }));

    fix_workflow_document(&mut workflow);

    assert_eq!(
        workflow.to_value()["definition"]["variables"]["baseUrl"],
        "https://x/api"
    );
}

#[test]
fn non_string_base_url_is_skipped() {
    let mut workflow = workflow_doc(json!({
        "definition": {"variables": {"baseUrl": 8080}}
    }));
    assert!(fix_workflow_document(&mut workflow).is_empty());
}

#[test]
fn deprecated_body_fields_are_renamed_in_place_order() {
    let mut workflow = workflow_doc(json!({
        "workflowId": "wf-1",
        "definition": {
            "steps": {
                "create": {
                    "type": "http",
                    "config": {"method": "POST", "body": {"test_id": 1, "name": "n", "group_id": 2}}
                }
            }
        }
    }));

    let fixes = fix_workflow_document(&mut workflow);

    assert_eq!(
        messages(&fixes),
        vec!["create: test_id -> testId", "create: group_id -> groupId"]
    );
    let body = workflow.to_value()["definition"]["steps"]["create"]["config"]["body"].clone();
    assert_eq!(body, json!({"testId": 1, "name": "n", "groupId": 2}));
    let keys = body
        .as_object()
        .expect("body must stay an object")
        .keys()
        .cloned()
        .collect::<Vec<_>>();
    assert_eq!(keys, vec!["testId", "name", "groupId"]);
}

#[test]
fn canonical_body_produces_no_fixes() {
    let mut workflow = workflow_doc(json!({
        "definition": {
            "steps": {
                "create": {"type": "http", "config": {"body": {"testId": 1, "groupId": 2}}}
            }
        }
    }));
    let before = workflow.clone();

    assert!(fix_workflow_document(&mut workflow).is_empty());
    assert_eq!(workflow, before);
}

#[test]
fn deprecated_value_wins_over_canonical_in_either_order() {
    let mut workflow = workflow_doc(json!({
        "definition": {
            "steps": {
                "canonical_first": {
                    "type": "http",
                    "config": {"body": {"tenantId": "old", "x": 0, "tenant_id": "new"}}
                },
                "deprecated_first": {
                    "type": "http",
                    "config": {"body": {"tenant_id": "new", "x": 0, "tenantId": "old"}}
                }
            }
        }
    }));

    let fixes = fix_workflow_document(&mut workflow);
    assert_eq!(fixes.len(), 2);

    let value = workflow.to_value();
    let first = &value["definition"]["steps"]["canonical_first"]["config"]["body"];
    let second = &value["definition"]["steps"]["deprecated_first"]["config"]["body"];
    assert_eq!(first, &json!({"tenantId": "new", "x": 0}));
    assert_eq!(second, &json!({"tenantId": "new", "x": 0}));
    assert_eq!(keys_of(first), vec!["tenantId", "x"]);
    assert_eq!(keys_of(second), vec!["tenantId", "x"]);
}

#[test]
fn non_http_steps_keep_deprecated_fields() {
    let mut workflow = workflow_doc(json!({
        "definition": {
            "steps": {
                "script": {"type": "script", "config": {"body": {"test_id": 1}}}
            }
        }
    }));
    assert!(fix_workflow_document(&mut workflow).is_empty());
}

#[test]
fn status_paths_are_rewritten_per_assertion() {
    let mut workflow = workflow_doc(json!({
        "definition": {
            "steps": {
                "check": {
                    "type": "assert",
                    "config": {
                        "assertions": [
                            {"actual": "{{steps.login.status}}", "expected": 200},
                            {"actual": "{{steps.login.response.statusCode}}"},
                            {"actual": "no placeholder here"},
                            {"actual": "{{a.status}} and {{b.status}}"}
                        ]
                    }
                }
            }
        }
    }));

    let fixes = fix_workflow_document(&mut workflow);

    assert_eq!(
        messages(&fixes),
        vec!["check: Fixed status path", "check: Fixed status path"]
    );
    assert_eq!(
        fixes[1].field_path.to_string(),
        "$.definition.steps.check.config.assertions[3].actual"
    );
    let assertions = workflow.to_value()["definition"]["steps"]["check"]["config"]["assertions"].clone();
    assert_eq!(assertions[0]["actual"], "{{steps.login.response.statusCode}}");
    assert_eq!(assertions[0]["expected"], 200);
    assert_eq!(assertions[1]["actual"], "{{steps.login.response.statusCode}}");
    assert_eq!(assertions[2]["actual"], "no placeholder here");
    assert_eq!(
        assertions[3]["actual"],
        "{{a.response.statusCode}} and {{b.response.statusCode}}"
    );
}

#[test]
fn malformed_placeholders_are_left_untouched() {
    let pattern = Regex::new(STATUS_PLACEHOLDER_PATTERN).expect("valid regex");
    for text in [
        "{{{a.status}}}",
        "{{{a.status}}",
        "{{a.status}}}",
        "{{a{b}.status}}",
        "{{.status}}",
        "{a.status}}",
        "{{a.status}",
    ] {
        assert_eq!(rewrite_status_placeholders(&pattern, text), text, "{text}");
    }
    assert_eq!(
        rewrite_status_placeholders(&pattern, "x {{a.b.status}} y"),
        "x {{a.b.response.statusCode}} y"
    );
}

#[test]
fn fixing_twice_changes_nothing_the_second_time() {
    let mut workflow = workflow_doc(json!({
        "workflowId": "wf-1",
        "definition": {
            "variables": {"baseUrl": "https://x/api/v2/v2/users"},
            "steps": {
                "create": {"type": "http", "config": {"body": {"http_config": {}, "parent_id": 3, "parentId": 1}}},
                "check": {"type": "assert", "config": {"assertions": [{"actual": "{{steps.create.status}}"}]}}
            }
        }
    }));

    let first = fix_workflow_document(&mut workflow);
    assert!(!first.is_empty());
    let once = workflow.clone();

    let second = fix_workflow_document(&mut workflow);
    assert!(second.is_empty());
    assert_eq!(workflow, once);
}

#[test]
fn fix_rules_apply_in_operation_order() {
    let mut workflow = workflow_doc(json!({
        "definition": {
            "steps": {
                "check": {"type": "assert", "config": {"assertions": [{"actual": "{{s.status}}"}]}},
                "create": {"type": "http", "config": {"body": {"test_id": 1}}}
            },
            "variables": {"baseUrl": "/api/v2"}
        }
    }));

    let fixes = fix_workflow_document(&mut workflow);

    assert_eq!(
        messages(&fixes),
        vec![
            "Fixed baseUrl",
            "create: test_id -> testId",
            "check: Fixed status path"
        ]
    );
}

#[test]
fn missing_definition_is_a_no_op() {
    let mut workflow = workflow_doc(json!({"workflowId": "wf-1"}));
    assert!(fix_workflow_document(&mut workflow).is_empty());
}

fn workflow_doc(value: Value) -> WorkflowDocument {
    parse_workflow_value(value).expect("fixture must be an object")
}

fn messages(fixes: &[AppliedFix]) -> Vec<&str> {
    fixes.iter().map(|fix| fix.message.as_str()).collect()
}

fn keys_of(value: &Value) -> Vec<String> {
    value
        .as_object()
        .expect("must be an object")
        .keys()
        .cloned()
        .collect()
}
