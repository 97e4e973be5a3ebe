//! Live TLS connections
//!
//! Performs a blocking TLS handshake and reads the leaf certificate the
//! server presents. Trust is never evaluated: the verifier accepts any
//! certificate because only its expiry matters here.

use super::CertificateExpiry;
use crate::utils::{CertificateError, SslError, ToolkitError};
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::{verify_tls12_signature, verify_tls13_signature, CryptoProvider};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{
    ClientConfig, ClientConnection, DigitallySignedStruct, Error as RustlsError, SignatureScheme,
};
use std::io::ErrorKind as IoErrorKind;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Skips chain and hostname validation but still checks handshake
/// signatures with the active crypto provider.
#[derive(Debug)]
struct AcceptAnyCertVerifier {
    provider: Arc<CryptoProvider>,
}

impl AcceptAnyCertVerifier {
    fn new(provider: Arc<CryptoProvider>) -> Self {
        Self { provider }
    }
}

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        verify_tls12_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        verify_tls13_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}

/// Timeouts applied to a live certificate fetch
#[derive(Debug, Clone, Copy)]
pub struct ConnectTimeouts {
    /// Bound on the TCP connect
    pub connect: Duration,
    /// Bound on each read and write during the handshake
    pub handshake: Duration,
}

impl Default for ConnectTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(10),
            handshake: Duration::from_secs(10),
        }
    }
}

/// Connect to `host:port`, present `servername` as SNI, and return the
/// expiry of the leaf certificate the server sends.
pub fn fetch_live_expiry(
    host: &str,
    port: u16,
    servername: &str,
    timeouts: ConnectTimeouts,
) -> Result<CertificateExpiry, ToolkitError> {
    // Needed when the binary has not installed a provider yet (e.g. library use)
    let _ = rustls::crypto::ring::default_provider().install_default();
    let provider = CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::ring::default_provider()));

    let config = ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier::new(provider)))
        .with_no_client_auth();

    let server_name = ServerName::try_from(servername.to_string()).map_err(|_| {
        SslError::ConfigurationError {
            message: format!("Invalid server name: {}", servername),
        }
    })?;

    let connect_addr = format!("{}:{}", host, port);
    let addrs = resolve(&connect_addr)?;

    debug!("Connecting to {} with SNI {}", connect_addr, servername);

    let mut sock = connect_any(&connect_addr, &addrs, timeouts.connect)?;
    sock.set_read_timeout(Some(timeouts.handshake))?;
    sock.set_write_timeout(Some(timeouts.handshake))?;

    let mut conn = ClientConnection::new(Arc::new(config), server_name).map_err(|e| {
        SslError::ConfigurationError {
            message: format!("Failed to create TLS connection: {}", e),
        }
    })?;

    while conn.is_handshaking() {
        conn.complete_io(&mut sock)
            .map_err(|e| handshake_error(&connect_addr, e, timeouts.handshake))?;
    }

    debug!(
        "Handshake with {} complete ({:?})",
        connect_addr,
        conn.protocol_version()
    );

    let expiry = match conn.peer_certificates().and_then(|certs| certs.first()) {
        Some(leaf) => CertificateExpiry::from_der(leaf.as_ref()),
        None => Err(CertificateError::ParseError {
            message: format!("No certificate received from {}", connect_addr),
        }),
    };

    conn.send_close_notify();
    let _ = conn.complete_io(&mut sock);

    Ok(expiry?)
}

fn resolve(connect_addr: &str) -> Result<Vec<SocketAddr>, SslError> {
    let addrs: Vec<SocketAddr> = connect_addr
        .to_socket_addrs()
        .map_err(|e| SslError::ConnectionError {
            addr: connect_addr.to_string(),
            message: format!("Failed to resolve: {}", e),
        })?
        .collect();

    if addrs.is_empty() {
        return Err(SslError::ConnectionError {
            addr: connect_addr.to_string(),
            message: "No addresses found".to_string(),
        });
    }
    Ok(addrs)
}

/// Try each resolved address in turn; the last failure is reported
fn connect_any(
    connect_addr: &str,
    addrs: &[SocketAddr],
    timeout: Duration,
) -> Result<TcpStream, SslError> {
    let mut last_err = None;

    for addr in addrs {
        match TcpStream::connect_timeout(addr, timeout) {
            Ok(sock) => {
                debug!("Connected to {} via {}", connect_addr, addr);
                return Ok(sock);
            }
            Err(e) => {
                debug!("Connect to {} failed: {}", addr, e);
                last_err = Some(connect_error(connect_addr, e, timeout));
            }
        }
    }

    Err(last_err.unwrap_or_else(|| SslError::ConnectionError {
        addr: connect_addr.to_string(),
        message: "No addresses found".to_string(),
    }))
}

fn is_timeout(e: &std::io::Error) -> bool {
    matches!(e.kind(), IoErrorKind::TimedOut | IoErrorKind::WouldBlock)
}

fn connect_error(addr: &str, e: std::io::Error, timeout: Duration) -> SslError {
    if is_timeout(&e) {
        SslError::Timeout {
            addr: addr.to_string(),
            timeout,
        }
    } else {
        SslError::ConnectionError {
            addr: addr.to_string(),
            message: e.to_string(),
        }
    }
}

fn handshake_error(addr: &str, e: std::io::Error, timeout: Duration) -> SslError {
    if is_timeout(&e) {
        SslError::Timeout {
            addr: addr.to_string(),
            timeout,
        }
    } else {
        SslError::HandshakeFailed {
            addr: addr.to_string(),
            message: e.to_string(),
        }
    }
}
