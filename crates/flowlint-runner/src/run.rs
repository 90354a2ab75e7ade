use crate::cli::{Cli, OutputFormat};
use crate::config::{load_config, ConfigError, FlowlintConfig};
use crate::io::{discover_workflow_files, load_workflow_document, save_workflow_document};
use crate::report::{render_run_report, DocumentReport, RunReport};
use flowlint_sdk::WorkflowSession;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("read batch directory failed `{path}`: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub rendered: String,
    /// True iff no processed document had an error.
    pub passed: bool,
    pub report: RunReport,
}

struct ProcessOptions {
    fix: bool,
    indent: usize,
}

/// A file to process and where its fixed form is written.
struct Target {
    input: PathBuf,
    save_to: PathBuf,
}

impl Target {
    fn in_place(input: PathBuf) -> Self {
        Self {
            save_to: input.clone(),
            input,
        }
    }
}

pub fn execute(cli: &Cli) -> Result<RunOutcome, RunnerError> {
    let config = match &cli.config {
        Some(path) => load_config(path.as_path())?,
        None => FlowlintConfig::default(),
    };
    let format = cli
        .format
        .or(config.output.format)
        .unwrap_or(OutputFormat::Text);
    let options = ProcessOptions {
        fix: cli.fix,
        indent: config.output.indent,
    };

    let targets: Vec<Target> = match (&cli.batch, &cli.file) {
        (Some(dir), _) => discover_workflow_files(dir, &config.batch.extensions)
            .map_err(|source| RunnerError::ReadDir {
                path: dir.display().to_string(),
                source,
            })?
            .into_iter()
            .map(Target::in_place)
            .collect(),
        (None, Some(file)) => vec![Target {
            input: file.clone(),
            save_to: cli.output.clone().unwrap_or_else(|| file.clone()),
        }],
        (None, None) => Vec::new(),
    };
    tracing::debug!(count = targets.len(), fix = cli.fix, "processing workflow files");

    let report = RunReport::new(process_targets(&targets, &options));
    let rendered = render_run_report(&report, format, cli.batch.is_some())?;
    Ok(RunOutcome {
        rendered,
        passed: report.passed,
        report,
    })
}

// Failures stay on the failing document's report; later targets still run.
fn process_targets(targets: &[Target], options: &ProcessOptions) -> Vec<DocumentReport> {
    targets
        .iter()
        .map(|target| process_document(target, options))
        .collect()
}

fn process_document(target: &Target, options: &ProcessOptions) -> DocumentReport {
    let path = target.input.as_path();
    let document = match load_workflow_document(path) {
        Ok(document) => document,
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "skipping unloadable workflow");
            return DocumentReport::load_failed(&error);
        }
    };

    let mut session = WorkflowSession::new(path.display().to_string(), document);
    session.validate();
    let modified = options.fix && session.fix();
    if !modified {
        return DocumentReport::from_session(session, false, None);
    }

    let save_to = target.save_to.as_path();
    match save_workflow_document(save_to, session.document(), options.indent) {
        Ok(()) => DocumentReport::from_session(session, true, Some(save_to)),
        Err(error) => {
            tracing::warn!(path = %save_to.display(), %error, "could not save fixed workflow");
            DocumentReport::save_failed(session, save_to, &error)
        }
    }
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
