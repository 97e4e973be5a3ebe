//! End-to-end tests running the ssl-expiry binary

mod common;

use common::{cert_expiring_in, write_file};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use time::Duration;

fn ssl_expiry_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ssl-expiry"))
}

fn run_with_pem(path: &Path, extra: &[&str]) -> Output {
    Command::new(ssl_expiry_bin())
        .args(["--critical", "5", "--warning", "15", "--pem"])
        .arg(path)
        .args(extra)
        .output()
        .expect("Failed to execute")
}

fn pem_expiring_in(dir: &Path, valid_for: Duration) -> PathBuf {
    let cert = cert_expiring_in(valid_for);
    write_file(dir, "cert.pem", cert.cert_pem.as_bytes())
}

#[test]
fn test_ok() {
    let tmp = tempfile::tempdir().unwrap();
    let path = pem_expiring_in(tmp.path(), Duration::days(90) + Duration::hours(1));

    let output = run_with_pem(&path, &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout);
    assert_eq!(stdout.trim(), "CheckCertExpiry OK: 90 days left");
}

#[test]
fn test_warning() {
    let tmp = tempfile::tempdir().unwrap();
    let path = pem_expiring_in(tmp.path(), Duration::days(10) + Duration::hours(1));

    let output = run_with_pem(&path, &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1), "stdout: {}", stdout);
    assert_eq!(stdout.trim(), "CheckCertExpiry WARNING: 10 days left");
}

#[test]
fn test_critical() {
    let tmp = tempfile::tempdir().unwrap();
    let path = pem_expiring_in(tmp.path(), Duration::days(2) + Duration::hours(1));

    let output = run_with_pem(&path, &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(2), "stdout: {}", stdout);
    assert_eq!(stdout.trim(), "CheckCertExpiry CRITICAL: 2 days left");
}

#[test]
fn test_expired() {
    let tmp = tempfile::tempdir().unwrap();
    let path = pem_expiring_in(tmp.path(), Duration::hours(-71));

    let output = run_with_pem(&path, &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(2), "stdout: {}", stdout);
    assert_eq!(stdout.trim(), "CheckCertExpiry CRITICAL: Expired -3 days ago");
}

#[test]
fn test_missing_file_is_unknown() {
    let output = run_with_pem(Path::new("/nonexistent/ssl-expiry/cert.pem"), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(3));
    assert!(stdout.starts_with("CheckCertExpiry UNKNOWN:"), "stdout: {}", stdout);
    assert!(stdout.contains("no such cert"));
}

#[test]
fn test_no_source_is_unknown() {
    let output = Command::new(ssl_expiry_bin())
        .args(["--critical", "5", "--warning", "15"])
        .output()
        .expect("Failed to execute");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout.trim(), "CheckCertExpiry UNKNOWN: host and port required");
}

#[test]
fn test_usage_error_is_unknown() {
    let output = Command::new(ssl_expiry_bin())
        .args(["--pem", "cert.pem"])
        .output()
        .expect("Failed to execute");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_json_output() {
    let tmp = tempfile::tempdir().unwrap();
    let path = pem_expiring_in(tmp.path(), Duration::days(10) + Duration::hours(1));

    let output = run_with_pem(&path, &["--format", "json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1));

    let parsed: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("Output should be valid JSON");
    assert_eq!(parsed["state"], "WARNING");
    assert_eq!(parsed["message"], "10 days left");
    assert_eq!(parsed["remaining"], 10);
    assert_eq!(parsed["unit"], "days");
}

#[test]
fn test_bad_settings_file_is_unknown() {
    let tmp = tempfile::tempdir().unwrap();
    let path = pem_expiring_in(tmp.path(), Duration::days(90));
    let config = write_file(tmp.path(), "settings.toml", b"[ssl\n");

    let output = run_with_pem(&path, &["--config", config.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(3), "stdout: {}", stdout);
}
