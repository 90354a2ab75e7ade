use crate::documents::WorkflowDocument;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

pub(crate) fn parse_json(input: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<Value>(input)
}

/// Pretty-prints a document with `indent` spaces per level and a trailing newline.
pub fn render_workflow_json(
    document: &WorkflowDocument,
    indent: usize,
) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    document.as_map().serialize(&mut serializer)?;
    out.push(b'\n');
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
