//! Conventional Asterisk path detection.
//!
//! Distributions (vanilla Asterisk, Issabel, Elastix, FreePBX) place the
//! CDR file, the recordings spool, and the configuration directory at a
//! handful of well-known locations. First existing candidate wins.

use std::path::{Path, PathBuf};

pub const CDR_CANDIDATES: &[&str] = &[
    "/var/log/asterisk/cdr-csv/Master.csv",
    "/var/log/asterisk/cdr/Master.csv",
    "/var/log/asterisk/cdr.csv",
];

pub const RECORDING_CANDIDATES: &[&str] = &[
    "/var/spool/asterisk/monitor/",
    "/var/spool/asterisk/recording/",
    "/var/spool/asterisk/voicemail/",
];

pub const CONFIG_CANDIDATES: &[&str] = &["/etc/asterisk/", "/usr/local/etc/asterisk/"];

/// Fallback configuration directory when detection fails.
pub const DEFAULT_CONFIG_DIR: &str = "/etc/asterisk/";

fn first_existing(candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .map(Path::to_path_buf)
}

/// The CDR CSV file, if any conventional location exists.
pub fn find_cdr_file() -> Option<PathBuf> {
    first_existing(CDR_CANDIDATES)
}

/// The recordings directory, if any conventional location exists.
pub fn find_recording_dir() -> Option<PathBuf> {
    first_existing(RECORDING_CANDIDATES)
}

/// The Asterisk configuration directory, if any conventional location exists.
pub fn find_config_dir() -> Option<PathBuf> {
    first_existing(CONFIG_CANDIDATES)
}
