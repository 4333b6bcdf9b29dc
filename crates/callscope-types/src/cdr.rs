use serde::{Deserialize, Serialize};

/// One call detail record, straight off a `Master.csv` row.
///
/// Fields mirror the Asterisk cdr-csv column order. Trailing columns that
/// a row does not carry default to the empty string (or 0 for the integer
/// columns).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdrRecord {
    pub accountcode: String,
    pub src: String,
    pub dst: String,
    pub dcontext: String,
    pub clid: String,
    pub channel: String,
    pub dstchannel: String,
    pub lastapp: String,
    pub lastdata: String,
    pub calldate: String,
    pub answerdate: String,
    pub enddate: String,
    pub duration: i64,
    pub billsec: i64,
    pub disposition: String,
    pub amaflags: String,
    pub uniqueid: String,
    pub userfield: String,
}

/// Diagnostic block attached to every successful CDR report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdrDebugInfo {
    pub cdr_file: String,
    pub total_lines: usize,
    pub records_returned: usize,
    pub limit: usize,
    pub note: String,
}

/// Successful `cdr` command payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdrReport {
    pub success: bool,
    pub count: usize,
    pub records: Vec<CdrRecord>,
    pub debug_info: CdrDebugInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
