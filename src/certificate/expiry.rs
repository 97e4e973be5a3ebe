//! Certificate expiry timestamp
//!
//! The only certificate attribute this tool cares about is `notAfter`.

use crate::utils::CertificateError;
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use x509_parser::prelude::*;

/// Format OpenSSL uses when printing `notAfter`, e.g. `Mar  5 12:00:00 2031 GMT`
const OPENSSL_TIME_FORMAT: &str = "%b %e %H:%M:%S %Y GMT";

/// The `notAfter` instant of a single certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CertificateExpiry(DateTime<Utc>);

impl CertificateExpiry {
    pub fn new(not_after: DateTime<Utc>) -> Self {
        Self(not_after)
    }

    /// Extract `notAfter` from a DER-encoded X.509 certificate
    pub fn from_der(der: &[u8]) -> Result<Self, CertificateError> {
        let (_, cert) =
            X509Certificate::from_der(der).map_err(|e| CertificateError::ParseError {
                message: format!("{:?}", e),
            })?;

        asn1_time_to_datetime(cert.validity().not_after).map(Self)
    }

    pub fn not_after(&self) -> DateTime<Utc> {
        self.0
    }

    /// Signed time left between `now` and expiry, negative once expired
    pub fn remaining_from(&self, now: DateTime<Utc>) -> Duration {
        self.0 - now
    }
}

impl From<DateTime<Utc>> for CertificateExpiry {
    fn from(not_after: DateTime<Utc>) -> Self {
        Self(not_after)
    }
}

/// Parses the textual form printed by `openssl x509 -enddate`, with or
/// without the leading `notAfter=`.
impl FromStr for CertificateExpiry {
    type Err = CertificateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let value = value.strip_prefix("notAfter=").unwrap_or(value).trim();

        NaiveDateTime::parse_from_str(value, OPENSSL_TIME_FORMAT)
            .map(|naive| Self(naive.and_utc()))
            .map_err(|e| CertificateError::ParseError {
                message: format!("invalid notAfter '{}': {}", value, e),
            })
    }
}

impl fmt::Display for CertificateExpiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, CertificateError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or_else(|| CertificateError::ParseError {
            message: "Invalid timestamp in certificate".to_string(),
        })
}
