//! PKCS#12 archives
//!
//! The integrity MAC is never verified. It is stripped from the PFX before
//! `p12-keystore` opens the archive, so bundles without a MAC or with a MAC
//! algorithm the reader does not implement are still readable. A wrong
//! passphrase still fails when the bags are decrypted.

use super::CertificateExpiry;
use crate::utils::{CertificateError, ConfigError, ToolkitError};
use ::pkcs12::pfx::Pfx;
use der::{Decode, Encode};
use p12_keystore::{KeyStore, KeyStoreEntry};
use std::path::Path;
use tracing::debug;

/// Read the leaf certificate expiry from a PKCS#12 archive
pub fn read_pkcs12_expiry(
    path: &Path,
    passphrase: Option<&str>,
) -> Result<CertificateExpiry, ToolkitError> {
    let passphrase = match passphrase {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ConfigError::NoPassphrase.into()),
    };

    if !path.exists() {
        return Err(CertificateError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let data = std::fs::read(path).map_err(|e| CertificateError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(pkcs12_expiry_from_bytes(&data, passphrase)?)
}

/// Decrypt PKCS#12 data and return the leaf certificate's `notAfter`
pub fn pkcs12_expiry_from_bytes(
    data: &[u8],
    passphrase: &str,
) -> Result<CertificateExpiry, CertificateError> {
    let unsigned = strip_mac(data)?;
    let keystore =
        KeyStore::from_pkcs12(&unsigned, passphrase).map_err(|e| CertificateError::Pkcs12Error {
            message: e.to_string(),
        })?;

    let leaf = leaf_certificate_der(&keystore).ok_or_else(|| CertificateError::Pkcs12Error {
        message: "No certificates found in PKCS#12 archive".to_string(),
    })?;

    CertificateExpiry::from_der(leaf)
}

/// Re-encode the PFX without its `macData`
fn strip_mac(data: &[u8]) -> Result<Vec<u8>, CertificateError> {
    let mut pfx = Pfx::from_der(data).map_err(|e| CertificateError::Pkcs12Error {
        message: e.to_string(),
    })?;

    if pfx.mac_data.take().is_some() {
        debug!("Ignoring PKCS#12 integrity MAC");
    }

    pfx.to_der().map_err(|e| CertificateError::Pkcs12Error {
        message: e.to_string(),
    })
}

/// The first certificate of a private key chain is the leaf; bare
/// certificate entries are only used when no key chain exists.
fn leaf_certificate_der(keystore: &KeyStore) -> Option<&[u8]> {
    let mut bare = None;

    for (alias, entry) in keystore.entries() {
        match entry {
            KeyStoreEntry::PrivateKeyChain(chain) => {
                if let Some(cert) = chain.chain().first() {
                    debug!("Using leaf certificate of key chain '{}'", alias);
                    return Some(cert.as_der());
                }
            }
            KeyStoreEntry::Certificate(cert) => {
                if bare.is_none() {
                    bare = Some(cert.as_der());
                }
            }
        }
    }

    bare
}
