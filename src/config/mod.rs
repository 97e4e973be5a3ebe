//! Configuration module for ssl-expiry
//!
//! Handles the per-check options and the TOML runtime settings.

pub mod check;
pub mod settings;

pub use check::{CheckConfig, CheckOptions};
pub use settings::{Settings, SslSettings};
