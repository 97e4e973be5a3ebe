//! Utility modules for ssl-expiry
//!
//! This module contains the error types shared by every other module.

pub mod error;

pub use error::{CertificateError, ConfigError, ErrorKind, Result, SslError, ToolkitError};
