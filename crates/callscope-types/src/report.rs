//! Report envelope pieces shared by every command.
//!
//! The CLI contract is one JSON object per invocation: a `success` flag,
//! a local-time `timestamp`, and either a command payload or an error
//! triple (`error`, `error_code`, optional `hint`).

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Coarse failure classification carried in every failure envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    FileNotFound,
    PathNotFound,
    ReadError,
    WriteError,
    UnknownCommand,
    InternalError,
}

/// Envelope printed when any command fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureReport {
    pub success: bool,
    pub error: String,
    pub error_code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl FailureReport {
    pub fn new(error: impl Into<String>, error_code: ErrorCode, hint: Option<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            error_code,
            hint,
        }
    }
}

/// Serializes a report and stamps it with the local emission time.
///
/// Reports are plain field structs, so serialization cannot realistically
/// fail; if it ever does, the caller still gets a printable failure
/// envelope rather than a panic.
pub fn stamped<T: Serialize>(report: &T) -> Value {
    let mut value = serde_json::to_value(report).unwrap_or_else(|err| {
        json!({
            "success": false,
            "error": format!("report serialization failed: {err}"),
            "error_code": ErrorCode::InternalError,
        })
    });
    if let Value::Object(map) = &mut value {
        map.insert("timestamp".to_string(), Value::String(local_timestamp()));
    }
    value
}

/// Local wall-clock time, ISO-8601 with microseconds.
fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
