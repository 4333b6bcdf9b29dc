//! System and Asterisk installation details.

use std::fs;
use std::path::Path;
use std::process::Command;

use callscope_types::{InfoReport, SystemInfo};
use tracing::debug;

use crate::paths;

/// Gathers host details for the `info` command. Every probe is best-effort:
/// a missing binary or file degrades to `"unknown"` / `null`, never an error.
pub struct SystemInfoCollector;

impl SystemInfoCollector {
    pub fn collect() -> InfoReport {
        let config_dir = paths::find_config_dir();
        let cdr_enabled = cdr_enabled(
            config_dir
                .as_deref()
                .unwrap_or_else(|| Path::new(paths::DEFAULT_CONFIG_DIR)),
        );

        InfoReport {
            success: true,
            data: SystemInfo {
                collector_version: env!("CARGO_PKG_VERSION").to_string(),
                asterisk_version: asterisk_version(),
                cdr_path: paths::find_cdr_file().map(display),
                recording_path: paths::find_recording_dir().map(display),
                config_path: config_dir.map(display),
                cdr_enabled,
            },
        }
    }
}

fn display(path: std::path::PathBuf) -> String {
    path.display().to_string()
}

/// Asks the running daemon for its version. `"unknown"` when the binary is
/// missing, errors out, or prints nothing.
fn asterisk_version() -> String {
    match Command::new("asterisk")
        .args(["-rx", "core show version"])
        .output()
    {
        Ok(output) if !output.stdout.is_empty() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        Ok(_) => "unknown".to_string(),
        Err(err) => {
            debug!("asterisk binary not invocable: {err}");
            "unknown".to_string()
        }
    }
}

/// Whether cdr.conf in `config_dir` enables CDR logging.
///
/// `None` when the file is missing or unreadable. Matching is a lowercase
/// substring check so both `enabled = yes` and the legacy `enable = yes`
/// spelling count.
pub fn cdr_enabled(config_dir: &Path) -> Option<bool> {
    let cdr_conf = config_dir.join("cdr.conf");
    if !cdr_conf.exists() {
        return None;
    }
    let content = fs::read_to_string(&cdr_conf).ok()?.to_lowercase();
    Some(content.contains("enabled = yes") || content.contains("enable = yes"))
}
