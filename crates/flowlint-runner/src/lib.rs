mod cli;
mod config;
mod io;
mod logging;
mod report;
mod run;

pub use cli::{Cli, OutputFormat};
pub use config::{
    load_config, validate_config, BatchConfig, ConfigError, FlowlintConfig, OutputConfig,
    CONFIG_SCHEMA,
};
pub use io::{
    discover_workflow_files, load_workflow_document, save_workflow_document, LoadError, SaveError,
};
pub use logging::init_tracing;
pub use report::{render_document_text, render_run_report, DocumentReport, RunReport, REPORT_SCHEMA};
pub use run::{execute, RunOutcome, RunnerError};
