//! Output formatting module
//!
//! A check prints exactly one line on stdout, either as plain text in the
//! usual monitoring plugin shape or as a JSON object.

pub mod json;
pub mod plain;

use crate::models::CheckResult;
use clap::ValueEnum;

pub use json::to_json_line;
pub use plain::{to_plain_line, PLUGIN_NAME};

/// Output format of the result line
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `CheckCertExpiry STATE: message`
    #[default]
    Text,
    /// Single-line JSON object
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render `result` as a single line in `format`
pub fn render(result: &CheckResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => to_plain_line(result),
        OutputFormat::Json => to_json_line(result),
    }
}
