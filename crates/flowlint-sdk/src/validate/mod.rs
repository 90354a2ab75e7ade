mod workflow;

pub use workflow::{validate_workflow_document, StepRule, STEP_RULES};
