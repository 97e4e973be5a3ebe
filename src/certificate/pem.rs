//! PEM certificate files

use super::CertificateExpiry;
use crate::utils::CertificateError;
use std::path::Path;
use tracing::debug;

/// Read the expiry of the first certificate in a PEM file
pub fn read_pem_expiry(path: &Path) -> Result<CertificateExpiry, CertificateError> {
    if !path.exists() {
        return Err(CertificateError::NotFound {
            path: path.display().to_string(),
        });
    }

    let data = std::fs::read(path).map_err(|e| CertificateError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!("Read {} bytes from {}", data.len(), path.display());
    pem_expiry_from_bytes(&data)
}

/// Parse PEM data and return the `notAfter` of its first CERTIFICATE block
pub fn pem_expiry_from_bytes(data: &[u8]) -> Result<CertificateExpiry, CertificateError> {
    let pems = ::pem::parse_many(data).map_err(|e| CertificateError::ParseError {
        message: format!("Failed to parse PEM: {}", e),
    })?;

    let cert = pems
        .into_iter()
        .find(|p| p.tag() == "CERTIFICATE")
        .ok_or_else(|| CertificateError::ParseError {
            message: "No CERTIFICATE block found in PEM data".to_string(),
        })?;

    CertificateExpiry::from_der(cert.contents())
}
