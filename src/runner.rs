//! Check orchestration
//!
//! Ties the pieces together: validate options, acquire the expiry from the
//! selected source, classify it. Every failure becomes an UNKNOWN result so
//! the caller only ever has a [`CheckResult`] to report.

use crate::certificate::CertificateExpiry;
use crate::config::{CheckConfig, CheckOptions, Settings};
use crate::models::CheckResult;
use crate::utils::Result;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Acquire the certificate expiry for a validated check
pub fn fetch_expiry(config: &CheckConfig, settings: &Settings) -> Result<CertificateExpiry> {
    config.source.fetch_expiry(settings.ssl.timeouts())
}

/// Run a validated check as of `now`
pub fn run_check_at(config: &CheckConfig, settings: &Settings, now: DateTime<Utc>) -> CheckResult {
    match fetch_expiry(config, settings) {
        Ok(expiry) => {
            let status = config.evaluator().evaluate(&expiry, now);
            debug!(
                "{} {} remaining, classified as {:?}",
                status.remaining, status.unit, status.classification
            );
            CheckResult::from_status(status)
        }
        Err(e) => {
            debug!("Check failed: {:?}", e);
            CheckResult::from(e)
        }
    }
}

/// Run a validated check against the current time
pub fn run_check(config: &CheckConfig, settings: &Settings) -> CheckResult {
    run_check_at(config, settings, Utc::now())
}

/// Validate `options` and run the check they describe
pub fn run(options: &CheckOptions, settings: &Settings) -> CheckResult {
    match CheckConfig::from_options(options) {
        Ok(config) => run_check(&config, settings),
        Err(e) => CheckResult::unknown(e.to_string()),
    }
}
