//! Recording file discovery under the Asterisk spool.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use callscope_types::{RecordingFile, RecordingsReport};
use chrono::{DateTime, Duration, Local};
use tracing::debug;

use crate::error::{CollectorError, Result};
use crate::paths;

/// Extensions Asterisk writes call recordings with.
pub const AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "gsm"];

/// Lists audio recordings modified within a day window.
pub struct RecordingCollector {
    recording_dir: Option<PathBuf>,
}

impl RecordingCollector {
    /// Collector over the first spool directory found at the conventional paths.
    pub fn discover() -> Self {
        Self {
            recording_dir: paths::find_recording_dir(),
        }
    }

    /// Collector over an explicit directory.
    pub fn with_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            recording_dir: Some(path.into()),
        }
    }

    /// Walks the spool recursively and keeps audio files whose modification
    /// time falls within the last `days` days.
    pub fn collect(&self, days: u32) -> Result<RecordingsReport> {
        let dir = self
            .recording_dir
            .as_deref()
            .filter(|path| path.exists())
            .ok_or(CollectorError::RecordingPathNotFound)?;

        // A window larger than the calendar overflows chrono; `None` means
        // no cutoff, every recording qualifies.
        let cutoff = Local::now().checked_sub_signed(Duration::days(i64::from(days)));
        let mut recordings = Vec::new();
        walk(dir, cutoff, &mut recordings).map_err(CollectorError::Read)?;

        Ok(RecordingsReport {
            success: true,
            count: recordings.len(),
            recordings,
        })
    }
}

/// Only the root directory must be readable; unreadable subdirectories
/// and entries are skipped like unreadable file metadata.
fn walk(
    dir: &Path,
    cutoff: Option<DateTime<Local>>,
    out: &mut Vec<RecordingFile>,
) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else {
            continue;
        };
        let path = entry.path();

        if path.is_dir() {
            if let Err(err) = walk(&path, cutoff, out) {
                debug!(path = %path.display(), "skipping unreadable directory: {err}");
            }
            continue;
        }
        if !is_audio(&path) {
            continue;
        }

        // Files that vanish or lose permissions mid-scan are skipped.
        let Ok(metadata) = entry.metadata() else {
            debug!(path = %path.display(), "skipping unreadable recording");
            continue;
        };
        let Ok(mtime) = metadata.modified() else {
            continue;
        };

        let modified: DateTime<Local> = mtime.into();
        if cutoff.is_some_and(|cutoff| modified < cutoff) {
            continue;
        }

        out.push(RecordingFile {
            filename: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.display().to_string(),
            size: metadata.len(),
            modified: modified.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        });
    }
    Ok(())
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|audio| ext.eq_ignore_ascii_case(audio))
        })
}
