//! Shared fixtures: certificates generated on the fly with a chosen notAfter

#![allow(dead_code)]

use der::asn1::OctetString;
use der::oid::ObjectIdentifier;
use der::{Decode, Encode};
use pkcs12::mac_data::MacData;
use pkcs12::pfx::Pfx;
use rcgen::{CertificateParams, KeyPair};
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};
use std::io::Write;
use std::net::{SocketAddr, TcpListener};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use time::{Duration, OffsetDateTime};

/// A self-signed certificate and its PKCS#8 key
pub struct TestCert {
    pub cert_pem: String,
    pub cert_der: CertificateDer<'static>,
    pub key_der: Vec<u8>,
    pub key_pem: String,
    pub not_after: OffsetDateTime,
}

/// Self-signed certificate for `localhost` that expires `valid_for` from now
pub fn cert_expiring_in(valid_for: Duration) -> TestCert {
    let now = OffsetDateTime::now_utc();
    let mut params = CertificateParams::new(vec!["localhost".to_string()]).unwrap();
    params.not_before = now - Duration::days(90);
    let not_after = now + valid_for;
    params.not_after = not_after;

    let key_pair = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key_pair).unwrap();

    TestCert {
        cert_pem: cert.pem(),
        cert_der: cert.der().clone(),
        key_der: key_pair.serialize_der(),
        key_pem: key_pair.serialize_pem(),
        not_after,
    }
}

pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    path
}

/// Bundle `cert` and its key into a PKCS#12 archive protected by `password`
pub fn pkcs12_bundle(cert: &TestCert, password: &str) -> Vec<u8> {
    let mut keystore = p12_keystore::KeyStore::new();

    let certificate = p12_keystore::Certificate::from_der(cert.cert_der.as_ref()).unwrap();
    let local_key_id = vec![0x01; 20];
    let chain =
        p12_keystore::PrivateKeyChain::new(cert.key_der.clone(), &local_key_id, vec![certificate]);

    keystore.add_entry("cert", p12_keystore::KeyStoreEntry::PrivateKeyChain(chain));
    keystore.writer(password).write().unwrap()
}

/// Re-encode a PKCS#12 archive after letting `edit` change its MAC
pub fn rewrite_mac(bundle: &[u8], edit: impl FnOnce(&mut Option<MacData>)) -> Vec<u8> {
    let mut pfx = Pfx::from_der(bundle).unwrap();
    edit(&mut pfx.mac_data);
    pfx.to_der().unwrap()
}

/// The same archive with no `macData` at all
pub fn without_mac(bundle: &[u8]) -> Vec<u8> {
    rewrite_mac(bundle, |mac| *mac = None)
}

/// The same archive claiming an HMAC-SHA512 MAC, which `p12-keystore`
/// cannot verify
pub fn with_sha512_mac(bundle: &[u8]) -> Vec<u8> {
    const SHA512: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.3");
    rewrite_mac(bundle, |mac| {
        let mac = mac.as_mut().unwrap();
        mac.mac.algorithm.oid = SHA512;
        mac.mac.digest = OctetString::new(vec![0x5a; 64]).unwrap();
    })
}

/// Serve `cert` over TLS on 127.0.0.1 for a single connection.
///
/// The receiver yields the SNI value the client presented, if any.
pub fn spawn_tls_server(cert: &TestCert) -> (SocketAddr, mpsc::Receiver<Option<String>>) {
    let _ = rustls::crypto::ring::default_provider().install_default();

    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(cert.key_der.clone()));
    let config = rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(vec![cert.cert_der.clone()], key)
        .unwrap();
    let config = Arc::new(config);

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok((mut sock, _)) = listener.accept() {
            let mut conn = rustls::ServerConnection::new(config).unwrap();
            while conn.is_handshaking() {
                if conn.complete_io(&mut sock).is_err() {
                    break;
                }
            }
            let _ = tx.send(conn.server_name().map(str::to_string));
            let _ = conn.complete_io(&mut sock);
        }
    });

    (addr, rx)
}

/// A port on 127.0.0.1 that nothing listens on
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}
