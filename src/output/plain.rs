//! Plain text output

use crate::models::CheckResult;

/// Name printed in front of every result line
pub const PLUGIN_NAME: &str = "CheckCertExpiry";

/// Format `result` as `CheckCertExpiry STATE: message`
pub fn to_plain_line(result: &CheckResult) -> String {
    // Keep it to one line whatever the error text contains
    let message = result.message.replace(['\r', '\n'], " ");
    format!("{} {}: {}", PLUGIN_NAME, result.state, message)
}
