use std::io;

use callscope_types::{ErrorCode, FailureReport};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CollectorError>;

/// Every way a collector can fail, one variant per reportable class.
#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("CDR file not found")]
    CdrFileNotFound,
    #[error("Recording path not found")]
    RecordingPathNotFound,
    #[error("manager.conf not found")]
    ManagerConfNotFound,
    #[error("read error: {0}")]
    Read(io::Error),
    #[error("write error: {0}")]
    Write(io::Error),
}

impl CollectorError {
    /// The coarse code carried in the JSON failure envelope.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CdrFileNotFound | Self::ManagerConfNotFound => ErrorCode::FileNotFound,
            Self::RecordingPathNotFound => ErrorCode::PathNotFound,
            Self::Read(_) => ErrorCode::ReadError,
            Self::Write(_) => ErrorCode::WriteError,
        }
    }

    /// Operator-facing remediation hint, where one exists.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CdrFileNotFound => Some("Check Asterisk installation and CDR configuration"),
            _ => None,
        }
    }

    /// Builds the failure envelope the runner prints for this error.
    pub fn report(&self) -> FailureReport {
        FailureReport::new(self.to_string(), self.code(), self.hint().map(str::to_string))
    }
}
