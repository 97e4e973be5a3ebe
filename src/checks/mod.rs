//! Check modules for ssl-expiry
//!
//! This module contains the expiry classification logic.

pub mod expiry;

pub use expiry::{Classification, ExpiryEvaluator, ExpiryStatus, Thresholds, Unit};
