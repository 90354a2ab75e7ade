mod read_document;
mod write_document;

pub use read_document::{discover_workflow_files, load_workflow_document, LoadError};
pub use write_document::{save_workflow_document, SaveError};
