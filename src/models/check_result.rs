//! Check result types

use crate::checks::{Classification, ExpiryStatus};
use crate::utils::ToolkitError;
use serde::Serialize;
use std::fmt;

/// Monitoring service state of a finished check
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    /// Conventional monitoring plugin exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        }
    }
}

impl From<Classification> for ServiceState {
    fn from(classification: Classification) -> Self {
        match classification {
            Classification::Expired | Classification::Critical => ServiceState::Critical,
            Classification::Warning => ServiceState::Warning,
            Classification::Ok => ServiceState::Ok,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one check invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub state: ServiceState,
    pub message: String,
    /// Present whenever an expiry was obtained and classified
    #[serde(flatten)]
    pub expiry: Option<ExpiryStatus>,
}

impl CheckResult {
    /// Result for a classified expiry
    pub fn from_status(status: ExpiryStatus) -> Self {
        Self {
            state: status.classification.into(),
            message: status.message(),
            expiry: Some(status),
        }
    }

    /// UNKNOWN result carrying the error description
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            state: ServiceState::Unknown,
            message: message.into(),
            expiry: None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }
}

impl From<ToolkitError> for CheckResult {
    fn from(err: ToolkitError) -> Self {
        Self::unknown(err.to_string())
    }
}
