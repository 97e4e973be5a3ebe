//! Certificate acquisition module
//!
//! This module provides functionality for:
//! - Reading the expiry of a PEM certificate file
//! - Reading the leaf certificate expiry from a PKCS#12 archive
//! - Retrieving the leaf certificate from a live TLS server

pub mod expiry;
pub mod live;
pub mod pem;
pub mod pkcs12;
pub mod source;

pub use expiry::CertificateExpiry;
pub use live::{fetch_live_expiry, ConnectTimeouts};
pub use pem::{pem_expiry_from_bytes, read_pem_expiry};
pub use pkcs12::{pkcs12_expiry_from_bytes, read_pkcs12_expiry};
pub use source::CertificateSource;
