use flowlint_sdk::{parse_workflow_json, ParseError, WorkflowDocument};
use std::fs;
use std::path::{Path, PathBuf};

/// A document that could not be turned into a `WorkflowDocument`.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read file failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Read { path, .. } | LoadError::Parse { path, .. } => path.as_path(),
        }
    }
}

pub fn load_workflow_document(path: impl AsRef<Path>) -> Result<WorkflowDocument, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_workflow_json(text.as_str()).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded workflow document");
    Ok(document)
}

/// Regular files directly inside `dir` whose extension is in `extensions`, sorted by path.
pub fn discover_workflow_files(
    dir: impl AsRef<Path>,
    extensions: &[String],
) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if !is_workflow_candidate(path.as_path(), extensions) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

fn is_workflow_candidate(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|candidate| candidate == ext))
}

#[cfg(test)]
#[path = "read_document_test.rs"]
mod tests;
