//! Management interface (AMI) configuration: inspection and provisioning.
//!
//! Both operations work on `manager.conf` as plain text. The file format
//! is too lax for a structural parser (distributions ship wildly different
//! layouts), so detection is regex/substring based and edits are targeted
//! rewrites that leave unrelated content untouched.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

use callscope_types::{AmiCredentials, AmiSetupReport, AmiStatus, AmiStatusReport};
use rand::distributions::Alphanumeric;
use rand::Rng;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{CollectorError, Result};
use crate::paths;

/// Credential section name the collector provisions for itself.
pub const DEFAULT_AMI_USER: &str = "callscope";

/// AMI listens here on a stock install.
pub const AMI_PORT: u16 = 5038;

const PASSWORD_LENGTH: usize = 16;

/// Permission classes granted to the collector user, read and write alike.
const PERMISSION_CLASSES: &str =
    "system,call,log,verbose,command,agent,user,config,dtmf,reporting,cdr,dialplan,originate";

/// Inspects and provisions manager.conf.
pub struct AmiManager {
    manager_conf: PathBuf,
}

impl AmiManager {
    /// Manager over `manager.conf` in the detected configuration directory.
    pub fn discover() -> Self {
        let config_dir = paths::find_config_dir()
            .unwrap_or_else(|| PathBuf::from(paths::DEFAULT_CONFIG_DIR));
        Self {
            manager_conf: config_dir.join("manager.conf"),
        }
    }

    /// Manager over an explicit manager.conf path.
    pub fn with_config(path: impl Into<PathBuf>) -> Self {
        Self {
            manager_conf: path.into(),
        }
    }

    /// Reports whether the interface is enabled and whether a credential
    /// section for `username` exists. Read-only.
    pub fn check(&self, username: &str) -> Result<AmiStatusReport> {
        let content = self.read_config()?;

        Ok(AmiStatusReport {
            success: true,
            data: AmiStatus {
                enabled: is_enabled(&content),
                user_exists: has_user(&content, username),
                config_path: self.manager_conf.display().to_string(),
            },
        })
    }

    /// Enables the interface and installs a credential section for
    /// `username`, generating a password when none is supplied.
    ///
    /// The original file content is copied to `<file>.backup` on every
    /// run. Running setup against an already-provisioned file refreshes
    /// the backup and leaves the configuration itself unchanged.
    pub fn setup(&self, username: &str, password: Option<String>) -> Result<AmiSetupReport> {
        let original = self.read_config()?;
        let password = password.unwrap_or_else(|| generate_password(PASSWORD_LENGTH));

        let mut content = original.clone();
        if !is_enabled(&content) {
            content = enable_in_general(&content);
            if !content.to_lowercase().contains("[general]") {
                content = format!("[general]\nenabled = yes\n\n{content}");
            }
        }
        if !has_user(&content, username) {
            content.push_str(&credential_block(username, &password));
        }

        // The backup is refreshed on every run, even when the configuration
        // is already in the desired state.
        let mut backup = self.manager_conf.clone().into_os_string();
        backup.push(".backup");
        fs::write(&backup, &original).map_err(CollectorError::Write)?;

        if content != original {
            fs::write(&self.manager_conf, &content).map_err(CollectorError::Write)?;
            info!(path = %self.manager_conf.display(), "manager.conf rewritten");
            reload_manager();
        } else {
            debug!("manager.conf already provisioned, nothing to rewrite");
        }

        Ok(AmiSetupReport {
            success: true,
            data: AmiCredentials {
                username: username.to_string(),
                password,
                host: "localhost".to_string(),
                port: AMI_PORT,
            },
        })
    }

    fn read_config(&self) -> Result<String> {
        if !self.manager_conf.exists() {
            return Err(CollectorError::ManagerConfNotFound);
        }
        fs::read_to_string(&self.manager_conf).map_err(CollectorError::Read)
    }
}

/// `enabled = yes` at the start of any line, any casing.
fn is_enabled(content: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?mi)^\s*enabled\s*=\s*yes").expect("static pattern"))
        .is_match(content)
}

fn has_user(content: &str, username: &str) -> bool {
    content.contains(&format!("[{username}]"))
}

/// Flips the first `enabled = no` that follows the `[general]` header to
/// `enabled = yes`. No-op when the pattern is absent.
fn enable_in_general(content: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)(\[general\].*?)enabled\s*=\s*no").expect("static pattern")
    })
    .replace(content, "${1}enabled = yes")
    .into_owned()
}

fn credential_block(username: &str, password: &str) -> String {
    format!(
        "\n[{username}]\n\
         secret = {password}\n\
         deny = 0.0.0.0/0.0.0.0\n\
         permit = 0.0.0.0/0.0.0.0\n\
         read = {PERMISSION_CLASSES}\n\
         write = {PERMISSION_CLASSES}\n"
    )
}

/// 16 characters is long enough for AMI and short enough to paste.
pub fn generate_password(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Asks the daemon to pick up the new configuration. Best-effort: a
/// missing binary (containers, test hosts) is not a failure.
fn reload_manager() {
    match Command::new("asterisk")
        .args(["-rx", "manager reload"])
        .output()
    {
        Ok(_) => debug!("requested manager reload"),
        Err(err) => debug!("manager reload skipped: {err}"),
    }
}
