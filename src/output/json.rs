//! JSON output formatter

use crate::models::CheckResult;

/// Serialize `result` as a compact, single-line JSON object
pub fn to_json_line(result: &CheckResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| {
        serde_json::json!({
            "state": result.state,
            "message": format!("failed to serialize result: {}", e),
        })
        .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{Classification, ExpiryStatus, Unit};

    #[test]
    fn test_classified_result() {
        let result = CheckResult::from_status(ExpiryStatus {
            classification: Classification::Critical,
            remaining: 30,
            unit: Unit::Hours,
        });
        let value: serde_json::Value = serde_json::from_str(&to_json_line(&result)).unwrap();

        assert_eq!(value["state"], "CRITICAL");
        assert_eq!(value["message"], "30 hours left");
        assert_eq!(value["classification"], "critical");
        assert_eq!(value["remaining"], 30);
        assert_eq!(value["unit"], "hours");
    }

    #[test]
    fn test_unknown_result_has_no_expiry_fields() {
        let result = CheckResult::unknown("no passphrase specified");
        let line = to_json_line(&result);
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["state"], "UNKNOWN");
        assert!(value.get("remaining").is_none());
    }
}
