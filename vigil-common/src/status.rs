use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Format of every `timestamp` on the wire, in local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const INITIAL_MESSAGE: &str = "initializing";

/// Severity carried in `status_code`. Serialized as its integer value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Severity {
    Ok = 0,
    Warning = 1,
    Critical = 2,
    #[default]
    Unknown = 3,
}

impl Severity {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::Ok),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Critical),
            3 => Some(Severity::Unknown),
            _ => None,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Ok => write!(f, "OK"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Severity::from_u8(value).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid status code {value}, expected 0-3"))
        })
    }
}

/// The health record served to probes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StatusRecord {
    #[serde(rename = "status_code")]
    pub code: Severity,
    #[serde(rename = "status_msg")]
    pub message: String,
    pub timestamp: String,
}

impl StatusRecord {
    pub fn new(code: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            timestamp: current_timestamp(),
        }
    }

    pub fn initial() -> Self {
        Self::new(Severity::Unknown, INITIAL_MESSAGE)
    }

    /// Copy of this record stamped with the current time.
    pub fn refreshed(&self) -> Self {
        Self {
            code: self.code,
            message: self.message.clone(),
            timestamp: current_timestamp(),
        }
    }
}

impl Default for StatusRecord {
    fn default() -> Self {
        Self::initial()
    }
}

pub fn current_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn timestamp_pattern() -> regex::Regex {
        regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").unwrap()
    }

    #[test]
    fn initial_record_is_unknown() {
        let record = StatusRecord::initial();
        assert_eq!(record.code, Severity::Unknown);
        assert_eq!(record.message, "initializing");
        assert!(timestamp_pattern().is_match(&record.timestamp));
    }

    #[test]
    fn wire_field_names_and_codes() {
        let record = StatusRecord {
            code: Severity::Warning,
            message: "disk low".into(),
            timestamp: "2024-01-02 03:04:05".into(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"status_code": 1, "status_msg": "disk low", "timestamp": "2024-01-02 03:04:05"})
        );

        for (code, value) in [
            (Severity::Ok, 0),
            (Severity::Warning, 1),
            (Severity::Critical, 2),
            (Severity::Unknown, 3),
        ] {
            assert_eq!(serde_json::to_value(code).unwrap(), json!(value));
        }
    }

    #[test]
    fn rejects_out_of_range_code() {
        let body = r#"{"status_code":4,"status_msg":"x","timestamp":"2024-01-02 03:04:05"}"#;
        let err = serde_json::from_str::<StatusRecord>(body).unwrap_err();
        assert!(err.to_string().contains("invalid status code 4"));
    }

    #[test]
    fn refreshed_keeps_code_and_message() {
        let record = StatusRecord {
            code: Severity::Critical,
            message: "db down".into(),
            timestamp: "2000-01-01 00:00:00".into(),
        };
        let fresh = record.refreshed();
        assert_eq!(fresh.code, Severity::Critical);
        assert_eq!(fresh.message, "db down");
        assert!(fresh.timestamp > record.timestamp);
        assert_eq!(record.timestamp, "2000-01-01 00:00:00");
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Ok.to_string(), "OK");
        assert_eq!(Severity::Unknown.to_string(), "UNKNOWN");
        assert_eq!(Severity::default(), Severity::Unknown);
    }
}
