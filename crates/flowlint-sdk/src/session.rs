use crate::documents::WorkflowDocument;
use crate::fix::fix_workflow_document;
use crate::validate::validate_workflow_document;
use flowlint_core::Findings;

/// Processing context for one document: owns it and the findings of the run.
#[derive(Debug, Clone)]
pub struct WorkflowSession {
    label: String,
    document: WorkflowDocument,
    findings: Findings,
}

impl WorkflowSession {
    pub fn new(label: impl Into<String>, document: WorkflowDocument) -> Self {
        Self {
            label: label.into(),
            document,
            findings: Findings::default(),
        }
    }

    /// Replaces errors and warnings with a fresh validation pass.
    ///
    /// Returns true iff no structural errors were found.
    pub fn validate(&mut self) -> bool {
        self.findings.errors.clear();
        self.findings.warnings.clear();
        self.findings
            .extend(validate_workflow_document(&self.document));
        tracing::debug!(
            label = %self.label,
            errors = self.findings.errors.len(),
            warnings = self.findings.warnings.len(),
            "validated workflow"
        );
        self.findings.passed()
    }

    /// Rewrites deprecated constructs in place and appends the fixes applied.
    ///
    /// Returns true iff this call changed the document.
    pub fn fix(&mut self) -> bool {
        let fixes = fix_workflow_document(&mut self.document);
        tracing::debug!(label = %self.label, fixes = fixes.len(), "fixed workflow");
        let modified = !fixes.is_empty();
        self.findings.fixes.extend(fixes);
        modified
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn document(&self) -> &WorkflowDocument {
        &self.document
    }

    pub fn findings(&self) -> &Findings {
        &self.findings
    }

    pub fn into_parts(self) -> (String, WorkflowDocument, Findings) {
        (self.label, self.document, self.findings)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
