//! CDR collection out of the Asterisk cdr-csv Master file.
//!
//! The file is read whole, then walked from the end so the newest calls
//! come back first. Rows are split by a hand-rolled splitter because
//! Asterisk's cdr-csv quoting is simpler than RFC 4180: a double quote
//! toggles quoting and is dropped, commas inside quotes are literal, and
//! there is no escape sequence.

use std::fs;
use std::path::PathBuf;

use callscope_types::{CdrDebugInfo, CdrRecord, CdrReport};
use tracing::debug;

use crate::error::{CollectorError, Result};
use crate::paths;

/// Rows with fewer fields than this are not CDRs and are skipped.
const MIN_FIELDS: usize = 14;

const EMPTY_FILE_HINT: &str = "No CDR records found in file. Possible reasons: \
    1) CDR file is empty, 2) No calls have been made, 3) CDR not configured in Asterisk";

const FILTERING_NOTE: &str =
    "Date filtering disabled - client handles timezone-aware filtering";

/// Reads call detail records from a Master.csv file.
pub struct CdrCollector {
    cdr_file: Option<PathBuf>,
}

impl CdrCollector {
    /// Collector over the first CDR file found at the conventional paths.
    pub fn discover() -> Self {
        Self {
            cdr_file: paths::find_cdr_file(),
        }
    }

    /// Collector over an explicit CDR file.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            cdr_file: Some(path.into()),
        }
    }

    /// Returns up to `limit` records, newest first.
    ///
    /// `_days` is accepted for CLI symmetry but deliberately not applied:
    /// the consuming client filters by date with proper timezone handling,
    /// which this host cannot do reliably.
    pub fn collect(&self, _days: u32, limit: usize) -> Result<CdrReport> {
        let cdr_file = self
            .cdr_file
            .as_deref()
            .filter(|path| path.exists())
            .ok_or(CollectorError::CdrFileNotFound)?;

        let raw = fs::read_to_string(cdr_file).map_err(CollectorError::Read)?;
        let content = raw.strip_prefix('\u{feff}').unwrap_or(&raw).trim();

        let lines: Vec<&str> = content.split('\n').collect();
        let total_lines = lines.len();

        let mut records = Vec::new();
        for line in lines.iter().rev() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_quoted(line);
            if fields.len() < MIN_FIELDS {
                debug!(fields = fields.len(), "skipping short CDR row");
                continue;
            }

            let Some(record) = build_record(&fields) else {
                debug!("skipping CDR row with non-numeric duration");
                continue;
            };
            records.push(record);

            if records.len() >= limit {
                break;
            }
        }

        let count = records.len();
        let hint = (count == 0).then(|| EMPTY_FILE_HINT.to_string());

        Ok(CdrReport {
            success: true,
            count,
            records,
            debug_info: CdrDebugInfo {
                cdr_file: cdr_file.display().to_string(),
                total_lines,
                records_returned: count,
                limit,
                note: FILTERING_NOTE.to_string(),
            },
            hint,
        })
    }
}

/// Splits one cdr-csv line. `"` toggles quoting, commas inside quotes
/// are part of the field.
fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Maps split fields onto the cdr-csv column order. Returns `None` when
/// an integer column holds a non-numeric value.
fn build_record(fields: &[String]) -> Option<CdrRecord> {
    Some(CdrRecord {
        accountcode: field(fields, 0),
        src: field(fields, 1),
        dst: field(fields, 2),
        dcontext: field(fields, 3),
        clid: field(fields, 4),
        channel: field(fields, 5),
        dstchannel: field(fields, 6),
        lastapp: field(fields, 7),
        lastdata: field(fields, 8),
        calldate: field(fields, 9),
        answerdate: field(fields, 10),
        enddate: field(fields, 11),
        duration: int_field(fields, 12)?,
        billsec: int_field(fields, 13)?,
        disposition: field(fields, 14),
        amaflags: field(fields, 15),
        uniqueid: field(fields, 16),
        userfield: field(fields, 17),
    })
}

fn field(fields: &[String], idx: usize) -> String {
    fields.get(idx).cloned().unwrap_or_default()
}

/// Absent or empty means zero; anything else must parse.
fn int_field(fields: &[String], idx: usize) -> Option<i64> {
    match fields.get(idx).map(String::as_str) {
        None | Some("") => Some(0),
        Some(raw) => raw.trim().parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_quoted_keeps_commas_inside_quotes() {
        let fields = split_quoted(r#""a","b,c",d"#);
        assert_eq!(fields, vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_split_quoted_handles_unquoted_fields() {
        let fields = split_quoted("1,2,,4");
        assert_eq!(fields, vec!["1", "2", "", "4"]);
    }

    #[test]
    fn test_int_field_defaults_empty_to_zero() {
        let fields = vec![String::new()];
        assert_eq!(int_field(&fields, 0), Some(0));
        assert_eq!(int_field(&fields, 5), Some(0));
    }

    #[test]
    fn test_int_field_rejects_garbage() {
        let fields = vec!["abc".to_string()];
        assert_eq!(int_field(&fields, 0), None);
    }
}
