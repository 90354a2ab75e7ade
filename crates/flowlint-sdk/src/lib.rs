pub mod documents;
pub mod fix;
pub mod parse;
pub mod rules;
pub mod session;
pub mod validate;

pub use documents::{WorkflowDocument, WorkflowStep, STEP_TYPE_ASSERT, STEP_TYPE_HTTP};
pub use fix::{fix_workflow_document, FixRule, FIX_RULES};
pub use parse::{parse_workflow_json, parse_workflow_value, render_workflow_json, ParseError};
pub use rules::{canonical_field_name, FIELD_MAPPINGS};
pub use session::WorkflowSession;
pub use validate::{validate_workflow_document, StepRule, STEP_RULES};
