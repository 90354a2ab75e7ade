use clap::{ArgGroup, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "flowlint")]
#[command(about = "Validate workflow definition files and fix deprecated conventions")]
#[command(group(ArgGroup::new("target").required(true).args(["file", "batch"])))]
pub struct Cli {
    /// Workflow file to check
    pub file: Option<PathBuf>,
    /// Check every workflow file directly inside DIR
    #[arg(long, value_name = "DIR")]
    pub batch: Option<PathBuf>,
    /// Rewrite deprecated fields, base URLs and assertion paths in place
    #[arg(long, default_value_t = false)]
    pub fix: bool,
    /// Write the fixed document here instead of over the input file
    #[arg(long, value_name = "PATH", requires = "file")]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
