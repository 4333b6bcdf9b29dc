use serde::{Deserialize, Serialize};

/// Host and Asterisk installation details gathered by the `info` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Version of this collector.
    pub collector_version: String,
    /// Output of `asterisk -rx "core show version"`, or `"unknown"`.
    pub asterisk_version: String,
    /// Detected CDR file, if any of the conventional paths exist.
    pub cdr_path: Option<String>,
    /// Detected recordings directory.
    pub recording_path: Option<String>,
    /// Detected configuration directory.
    pub config_path: Option<String>,
    /// Whether cdr.conf enables CDR logging. `None` when cdr.conf is
    /// missing or unreadable.
    pub cdr_enabled: Option<bool>,
}

/// Successful `info` command payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoReport {
    pub success: bool,
    pub data: SystemInfo,
}
