mod json;

use crate::documents::WorkflowDocument;
use serde_json::Value;

pub use json::render_workflow_json;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("json parse failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

pub fn parse_workflow_json(input: &str) -> Result<WorkflowDocument, ParseError> {
    parse_workflow_value(json::parse_json(input)?)
}

pub fn parse_workflow_value(value: Value) -> Result<WorkflowDocument, ParseError> {
    match value {
        Value::Object(root) => Ok(WorkflowDocument::from_map(root)),
        other => Err(ParseError::NotAnObject {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
