mod workflow;

pub(crate) use workflow::step_path;
pub use workflow::{WorkflowDocument, WorkflowStep, STEP_TYPE_ASSERT, STEP_TYPE_HTTP};
