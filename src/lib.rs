//! ssl-expiry library
//!
//! A monitoring check that reports how long an X.509 certificate has left:
//! - Certificate acquisition from a PEM file, a PKCS#12 archive or a live
//!   TLS server
//! - Expiry classification against warning and critical thresholds, in days
//!   or hours
//! - One-line text or JSON results with monitoring plugin exit codes
//!
//! # Usage
//!
//! ```rust,ignore
//! use ssl_expiry::config::{CheckOptions, Settings};
//! use ssl_expiry::runner;
//!
//! let options = CheckOptions {
//!     critical: 7,
//!     warning: 30,
//!     host: Some("example.com".to_string()),
//!     port: Some(443),
//!     ..Default::default()
//! };
//! let result = runner::run(&options, &Settings::default());
//! println!("{}: {}", result.state, result.message);
//! ```

pub mod certificate;
pub mod checks;
pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use certificate::{CertificateExpiry, CertificateSource};
pub use checks::{Classification, ExpiryEvaluator, ExpiryStatus, Thresholds, Unit};
pub use cli::Cli;
pub use config::{CheckConfig, CheckOptions, Settings};
pub use models::{CheckResult, ServiceState};
pub use utils::{ErrorKind, Result, ToolkitError};
