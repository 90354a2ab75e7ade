mod workflow;

pub use workflow::{fix_workflow_document, FixRule, FIX_RULES};
