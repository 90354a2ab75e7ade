pub mod field_path;
pub mod findings;

pub use field_path::{FieldPath, FieldPathSegment};
pub use findings::{AppliedFix, Finding, Findings, Severity};
