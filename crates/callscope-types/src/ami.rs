use serde::{Deserialize, Serialize};

/// Result of inspecting manager.conf without modifying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmiStatus {
    /// True when the `[general]` section carries `enabled = yes`.
    pub enabled: bool,
    /// True when a credential section for the collector user exists.
    pub user_exists: bool,
    /// Path of the inspected manager.conf.
    pub config_path: String,
}

/// Credentials installed (or confirmed) by `setup-ami`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmiCredentials {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

/// Successful `check-ami` command payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmiStatusReport {
    pub success: bool,
    pub data: AmiStatus,
}

/// Successful `setup-ami` command payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmiSetupReport {
    pub success: bool,
    pub data: AmiCredentials,
}
