//! Check options and their validation
//!
//! [`CheckOptions`] is the raw option set as supplied by the caller;
//! [`CheckConfig`] is what remains once exactly one certificate source has
//! been selected. Precedence when several sources are given is
//! pem > pkcs12 > live.

use crate::certificate::CertificateSource;
use crate::checks::{ExpiryEvaluator, Thresholds, Unit};
use crate::utils::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Options recognised by the check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub critical: i64,
    pub warning: i64,
    pub pem: Option<PathBuf>,
    pub pkcs12: Option<PathBuf>,
    pub pkcs12_pass: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub servername: Option<String>,
    pub hours: bool,
}

/// A validated check: one source, thresholds and a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub source: CertificateSource,
    pub thresholds: Thresholds,
    pub unit: Unit,
}

impl CheckConfig {
    /// Validate `options` and select the certificate source
    pub fn from_options(options: &CheckOptions) -> Result<Self, ConfigError> {
        let source = select_source(options)?;

        if options.critical > options.warning {
            warn!(
                "critical threshold {} is above warning threshold {}; WARNING can never be reported",
                options.critical, options.warning
            );
        }

        Ok(Self {
            source,
            thresholds: Thresholds::new(options.critical, options.warning),
            unit: Unit::from_hours_flag(options.hours),
        })
    }

    pub fn evaluator(&self) -> ExpiryEvaluator {
        ExpiryEvaluator::new(self.thresholds, self.unit)
    }
}

impl TryFrom<&CheckOptions> for CheckConfig {
    type Error = ConfigError;

    fn try_from(options: &CheckOptions) -> Result<Self, Self::Error> {
        Self::from_options(options)
    }
}

fn select_source(options: &CheckOptions) -> Result<CertificateSource, ConfigError> {
    if let Some(path) = &options.pem {
        if options.pkcs12.is_some() || options.host.is_some() {
            debug!("--pem given, ignoring other certificate sources");
        }
        ensure_exists(path)?;
        return Ok(CertificateSource::PemFile { path: path.clone() });
    }

    if let Some(path) = &options.pkcs12 {
        if options.host.is_some() {
            debug!("--cert given, ignoring --host");
        }
        let passphrase = match options.pkcs12_pass.as_deref() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => return Err(ConfigError::NoPassphrase),
        };
        ensure_exists(path)?;
        return Ok(CertificateSource::Pkcs12File {
            path: path.clone(),
            passphrase,
        });
    }

    match (&options.host, options.port) {
        (Some(host), Some(port)) => {
            let servername = options.servername.clone().unwrap_or_else(|| host.clone());
            Ok(CertificateSource::LiveConnection {
                host: host.clone(),
                port,
                servername,
            })
        }
        _ => Err(ConfigError::MissingRequired {
            key: "host and port".to_string(),
        }),
    }
}

fn ensure_exists(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ConfigError::NoSuchCert {
            path: path.display().to_string(),
        })
    }
}
