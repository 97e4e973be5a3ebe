//! Data models for ssl-expiry
//!
//! This module contains the result types handed to the output layer.

pub mod check_result;

pub use check_result::{CheckResult, ServiceState};
