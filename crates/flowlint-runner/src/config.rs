use crate::cli::OutputFormat;
use flowlint_core::{FieldPath, Finding};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_SCHEMA: &str = "flowlint-config/0.0.1";

const MAX_INDENT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowlintConfig {
    #[serde(default = "default_config_schema")]
    pub schema: String,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// File extensions, without the leading dot, picked up in batch mode.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for FlowlintConfig {
    fn default() -> Self {
        Self {
            schema: default_config_schema(),
            batch: BatchConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            indent: default_indent(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse failed: {0}")]
    Parse(String),
    #[error("malformed env placeholder in config: {0}")]
    Placeholder(&'static str),
    #[error("env var `{0}` referenced by config is not set")]
    MissingEnvVar(String),
    #[error("config validation failed: {}", join_messages(.0))]
    Validation(Vec<Finding>),
}

pub fn load_config(path: &Path) -> Result<FlowlintConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let expanded = expand_env_placeholders(raw.as_str())?;
    let config: FlowlintConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(expanded.as_str())
            .map_err(|error| ConfigError::Parse(format!("json decode error: {error}")))?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(expanded.as_str())
            .map_err(|error| ConfigError::Parse(format!("yaml decode error: {error}")))?,
        _ => serde_yaml::from_str(expanded.as_str())
            .or_else(|_| serde_json::from_str(expanded.as_str()))
            .map_err(|error| ConfigError::Parse(error.to_string()))?,
    };

    let issues = validate_config(&config);
    if !issues.is_empty() {
        return Err(ConfigError::Validation(issues));
    }
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn validate_config(config: &FlowlintConfig) -> Vec<Finding> {
    let mut issues = Vec::new();
    if config.schema != CONFIG_SCHEMA {
        issues.push(Finding::error(
            "config.schema",
            FieldPath::from_keys(["schema"]),
            format!(
                "unsupported config schema `{}` (expected `{CONFIG_SCHEMA}`)",
                config.schema
            ),
        ));
    }

    let extensions_path = FieldPath::from_keys(["batch", "extensions"]);
    if config.batch.extensions.is_empty() {
        issues.push(Finding::error(
            "config.batch.extensions.non_empty",
            extensions_path.clone(),
            "batch.extensions must list at least one extension",
        ));
    }
    for (index, extension) in config.batch.extensions.iter().enumerate() {
        let trimmed = extension.trim();
        if trimmed.is_empty() || trimmed.starts_with('.') || trimmed != extension {
            issues.push(Finding::error(
                "config.batch.extensions.format",
                extensions_path.with_index(index),
                format!("extension `{extension}` must be non-empty, without a leading dot"),
            ));
        }
    }

    if config.output.indent > MAX_INDENT {
        issues.push(Finding::error(
            "config.output.indent",
            FieldPath::from_keys(["output", "indent"]),
            format!(
                "output.indent must be at most {MAX_INDENT} (got {})",
                config.output.indent
            ),
        ));
    }
    issues
}

fn default_config_schema() -> String {
    CONFIG_SCHEMA.to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["json".to_string()]
}

fn default_indent() -> usize {
    2
}

fn join_messages(issues: &[Finding]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field_path, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Substitutes every `${NAME}` with the value of env var `NAME`.
fn expand_env_placeholders(input: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(input.len());
    let mut rest = input;
    while let Some((literal, after_open)) = rest.split_once("${") {
        expanded.push_str(literal);
        let (name, tail) = after_open
            .split_once('}')
            .ok_or(ConfigError::Placeholder("unterminated `${`"))?;
        if name.is_empty() {
            return Err(ConfigError::Placeholder("empty `${}`"));
        }
        let value =
            std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))?;
        expanded.push_str(value.as_str());
        rest = tail;
    }
    expanded.push_str(rest);
    Ok(expanded)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
