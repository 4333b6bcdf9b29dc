//! CDR date column parsing.
//!
//! Date columns show up in several formats depending on distribution and
//! locale settings. Formats are tried in order; empty or unrecognized
//! input yields `None` rather than an error, matching how consuming
//! clients treat unparseable dates.

use chrono::NaiveDateTime;

/// Formats observed across Asterisk, Issabel, Elastix and FreePBX installs.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Parses one CDR date column against the known formats.
pub fn parse_call_date(raw: &str) -> Option<NaiveDateTime> {
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
