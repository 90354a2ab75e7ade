use flowlint_sdk::{render_workflow_json, WorkflowDocument};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("render document failed: {0}")]
    Render(#[from] serde_json::Error),
    #[error("write file failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Overwrites `path` with the pretty-printed document.
pub fn save_workflow_document(
    path: impl AsRef<Path>,
    document: &WorkflowDocument,
    indent: usize,
) -> Result<(), SaveError> {
    let rendered = render_workflow_json(document, indent)?;
    fs::write(path.as_ref(), rendered)?;
    tracing::info!(path = %path.as_ref().display(), "saved fixed workflow");
    Ok(())
}
