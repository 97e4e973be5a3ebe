//! Where a certificate comes from
//!
//! Exactly one source is active per check. Construction happens in
//! [`crate::config::CheckConfig::from_options`], which validates the
//! option set before any I/O is attempted.

use super::live::{fetch_live_expiry, ConnectTimeouts};
use super::pem::read_pem_expiry;
use super::pkcs12::read_pkcs12_expiry;
use super::CertificateExpiry;
use crate::utils::Result;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// A certificate source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CertificateSource {
    /// A PEM encoded certificate on disk
    PemFile { path: PathBuf },

    /// A passphrase protected PKCS#12 archive on disk
    Pkcs12File {
        path: PathBuf,
        #[serde(skip)]
        passphrase: String,
    },

    /// The certificate a TLS server presents during the handshake
    LiveConnection {
        host: String,
        port: u16,
        servername: String,
    },
}

impl CertificateSource {
    /// Live source whose SNI value is the host itself
    pub fn live(host: impl Into<String>, port: u16) -> Self {
        let host = host.into();
        Self::LiveConnection {
            servername: host.clone(),
            host,
            port,
        }
    }

    /// Acquire the certificate and return its expiry
    pub fn fetch_expiry(&self, timeouts: ConnectTimeouts) -> Result<CertificateExpiry> {
        debug!("Fetching certificate expiry from {}", self);

        let expiry = match self {
            CertificateSource::PemFile { path } => read_pem_expiry(path)?,
            CertificateSource::Pkcs12File { path, passphrase } => {
                read_pkcs12_expiry(path, Some(passphrase))?
            }
            CertificateSource::LiveConnection {
                host,
                port,
                servername,
            } => fetch_live_expiry(host, *port, servername, timeouts)?,
        };

        debug!("Certificate expires {}", expiry);
        Ok(expiry)
    }
}

impl fmt::Display for CertificateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertificateSource::PemFile { path } => write!(f, "PEM file {}", path.display()),
            CertificateSource::Pkcs12File { path, .. } => {
                write!(f, "PKCS#12 archive {}", path.display())
            }
            CertificateSource::LiveConnection {
                host,
                port,
                servername,
            } if host == servername => write!(f, "{}:{}", host, port),
            CertificateSource::LiveConnection {
                host,
                port,
                servername,
            } => write!(f, "{}:{} (SNI {})", host, port, servername),
        }
    }
}
