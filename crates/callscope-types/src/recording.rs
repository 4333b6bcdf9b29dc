use serde::{Deserialize, Serialize};

/// One recording file found under the monitor/recording spool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingFile {
    /// Absolute path of the file.
    pub path: String,
    /// File name without the directory part.
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    /// Modification time, ISO-8601 local time.
    pub modified: String,
}

/// Successful `recordings` command payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingsReport {
    pub success: bool,
    pub count: usize,
    pub recordings: Vec<RecordingFile>,
}
