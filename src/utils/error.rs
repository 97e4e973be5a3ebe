//! Custom error types for ssl-expiry
//!
//! This module defines domain-specific error types using `thiserror` for
//! every way acquiring and evaluating a certificate expiry can fail.

use std::time::Duration;
use thiserror::Error;

/// Top-level error type for the ssl-expiry check
#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Certificate(#[from] CertificateError),

    #[error("{0}")]
    Ssl(#[from] SslError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse failure category, one per way a check can end up UNKNOWN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid, missing or conflicting options
    Config,
    /// A referenced certificate file does not exist, or exists but could
    /// not be opened (permissions, a directory). Either way no certificate
    /// content was obtained.
    NotFound,
    /// Content is not a certificate in the expected encoding, or could not be decrypted
    Parse,
    /// The live host could not be reached or the handshake failed
    Connection,
}

impl ToolkitError {
    /// Classify this error into one of the four failure categories
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolkitError::Config(_) => ErrorKind::Config,
            ToolkitError::Certificate(CertificateError::NotFound { .. }) => ErrorKind::NotFound,
            // Unreadable is reported with missing: both mean the bytes never arrived
            ToolkitError::Certificate(CertificateError::ReadError { .. }) => ErrorKind::NotFound,
            ToolkitError::Certificate(_) => ErrorKind::Parse,
            ToolkitError::Ssl(SslError::ConfigurationError { .. }) => ErrorKind::Config,
            ToolkitError::Ssl(_) => ErrorKind::Connection,
            ToolkitError::Io(_) => ErrorKind::Connection,
        }
    }
}

/// Configuration and option validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} required")]
    MissingRequired { key: String },

    #[error("no passphrase specified")]
    NoPassphrase,

    #[error("no such cert: {path}")]
    NoSuchCert { path: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Certificate file reading and parsing errors
#[derive(Error, Debug)]
pub enum CertificateError {
    #[error("no such cert: {path}")]
    NotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse certificate: {message}")]
    ParseError { message: String },

    #[error("Failed to open PKCS#12 archive: {message}")]
    Pkcs12Error { message: String },
}

/// SSL/TLS connection errors
#[derive(Error, Debug)]
pub enum SslError {
    #[error("Connection to {addr} failed: {message}")]
    ConnectionError { addr: String, message: String },

    #[error("Connection to {addr} timed out after {timeout:?}")]
    Timeout { addr: String, timeout: Duration },

    #[error("SSL handshake with {addr} failed: {message}")]
    HandshakeFailed { addr: String, message: String },

    #[error("TLS configuration error: {message}")]
    ConfigurationError { message: String },
}

/// Result type alias using ToolkitError
pub type Result<T> = std::result::Result<T, ToolkitError>;
