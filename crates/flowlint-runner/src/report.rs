use crate::cli::OutputFormat;
use crate::io::{LoadError, SaveError};
use flowlint_core::{FieldPath, Finding, Findings};
use flowlint_sdk::WorkflowSession;
use serde::Serialize;
use std::path::Path;

pub const REPORT_SCHEMA: &str = "flowlint-report/0.0.1";

const RULE_WIDTH: usize = 50;

/// Outcome of processing one workflow file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    pub file: String,
    pub passed: bool,
    pub modified: bool,
    /// Where the fixed document was written; `null` when nothing was saved.
    pub saved_to: Option<String>,
    #[serde(flatten)]
    pub findings: Findings,
}

impl DocumentReport {
    pub fn from_session(session: WorkflowSession, modified: bool, saved_to: Option<&Path>) -> Self {
        let (file, _, findings) = session.into_parts();
        Self {
            file,
            passed: findings.passed(),
            modified,
            saved_to: saved_to.map(|path| path.display().to_string()),
            findings,
        }
    }

    pub fn load_failed(error: &LoadError) -> Self {
        let mut findings = Findings::default();
        findings.push(Finding::error(
            "load.failed",
            FieldPath::root(),
            format!("Cannot load: {error}"),
        ));
        Self {
            file: error.path().display().to_string(),
            passed: false,
            modified: false,
            saved_to: None,
            findings,
        }
    }

    /// Fixes were applied in memory but could not be written to `target`.
    pub fn save_failed(session: WorkflowSession, target: &Path, error: &SaveError) -> Self {
        let mut report = Self::from_session(session, true, None);
        report.findings.push(Finding::error(
            "save.failed",
            FieldPath::root(),
            format!("Cannot save {}: {error}", target.display()),
        ));
        report.passed = false;
        report
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub schema: &'static str,
    pub passed: bool,
    pub documents: Vec<DocumentReport>,
}

impl RunReport {
    pub fn new(documents: Vec<DocumentReport>) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            passed: documents.iter().all(|document| document.passed),
            documents,
        }
    }
}

pub fn render_run_report(
    report: &RunReport,
    format: OutputFormat,
    batch: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => {
            let mut sections = report
                .documents
                .iter()
                .map(render_document_text)
                .collect::<Vec<_>>();
            if batch {
                sections.push(render_batch_summary(report));
            }
            Ok(sections.join("\n"))
        }
    }
}

/// Console block for one document: header, then non-empty finding sections.
pub fn render_document_text(report: &DocumentReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![String::new(), rule.clone(), report.file.clone(), rule];

    let findings = &report.findings;
    push_section(&mut lines, "Errors", &findings.error_messages());
    push_section(&mut lines, "Warnings", &findings.warning_messages());
    push_section(&mut lines, "Fixes", &findings.fix_messages());
    if findings.is_clean() {
        lines.push(String::new());
        lines.push("✅ Valid!".to_string());
    }
    if let Some(saved_to) = &report.saved_to {
        lines.push(String::new());
        lines.push(format!("Saved: {saved_to}"));
    }
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, messages: &[&str]) {
    if messages.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(format!("{title}: {}", messages.len()));
    lines.extend(messages.iter().map(|message| format!("  - {message}")));
}

fn render_batch_summary(report: &RunReport) -> String {
    let total = report.documents.len();
    let passed = report.documents.iter().filter(|document| document.passed).count();
    let modified = report
        .documents
        .iter()
        .filter(|document| document.modified)
        .count();
    format!(
        "\nSummary: {total} files, {passed} passed, {} failed, {modified} modified",
        total - passed
    )
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
