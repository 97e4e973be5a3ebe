//! Expiry evaluation
//!
//! Turns a `notAfter` timestamp into a whole number of days or hours left
//! and classifies it against the warning and critical thresholds.

use crate::certificate::CertificateExpiry;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Unit the remaining time and the thresholds are expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Days,
    Hours,
}

impl Unit {
    pub fn from_hours_flag(hours: bool) -> Self {
        if hours {
            Unit::Hours
        } else {
            Unit::Days
        }
    }

    pub fn seconds(&self) -> i64 {
        match self {
            Unit::Days => 86_400,
            Unit::Hours => 3_600,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Days => "days",
            Unit::Hours => "hours",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Warning and critical thresholds, in the same unit as the remaining time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub critical: i64,
    pub warning: i64,
}

impl Thresholds {
    pub fn new(critical: i64, warning: i64) -> Self {
        Self { critical, warning }
    }
}

/// Outcome of comparing the remaining time with the thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Expired,
    Critical,
    Warning,
    Ok,
}

/// A classified remaining time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpiryStatus {
    pub classification: Classification,
    /// Whole units left, floored; negative once expired
    pub remaining: i64,
    pub unit: Unit,
}

impl ExpiryStatus {
    /// One-line human readable description
    pub fn message(&self) -> String {
        match self.classification {
            Classification::Expired => format!("Expired {} {} ago", self.remaining, self.unit),
            _ => format!("{} {} left", self.remaining, self.unit),
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Classifies certificate expiry against thresholds
#[derive(Debug, Clone, Copy)]
pub struct ExpiryEvaluator {
    thresholds: Thresholds,
    unit: Unit,
}

impl ExpiryEvaluator {
    pub fn new(thresholds: Thresholds, unit: Unit) -> Self {
        Self { thresholds, unit }
    }

    /// Whole units between `now` and `expiry`, rounded toward negative
    /// infinity so any instant past expiry is already -1. Sub-second
    /// precision of `now` takes part in the floor.
    pub fn remaining_units(&self, expiry: &CertificateExpiry, now: DateTime<Utc>) -> i64 {
        let delta = expiry.remaining_from(now);
        let nanos = i128::from(delta.num_seconds()) * 1_000_000_000
            + i128::from(delta.subsec_nanos());
        let unit = i128::from(self.unit.seconds()) * 1_000_000_000;
        // |delta| is bounded by chrono's range, so the quotient fits in i64
        nanos.div_euclid(unit) as i64
    }

    /// Classify `expiry` as seen at `now`
    pub fn evaluate(&self, expiry: &CertificateExpiry, now: DateTime<Utc>) -> ExpiryStatus {
        let remaining = self.remaining_units(expiry, now);

        let classification = if remaining < 0 {
            Classification::Expired
        } else if remaining < self.thresholds.critical {
            Classification::Critical
        } else if remaining < self.thresholds.warning {
            Classification::Warning
        } else {
            Classification::Ok
        };

        ExpiryStatus {
            classification,
            remaining,
            unit: self.unit,
        }
    }

    pub fn evaluate_now(&self, expiry: &CertificateExpiry) -> ExpiryStatus {
        self.evaluate(expiry, Utc::now())
    }
}
