//! CDR collection against real files in a tempdir.

use std::fs;

use callscope_lib::cdr::CdrCollector;
use callscope_lib::CollectorError;
use callscope_types::ErrorCode;
use tempfile::tempdir;

/// One realistic cdr-csv row (quoted fields, comma inside lastdata).
const SAMPLE_LINE: &str = concat!(
    r#""","100","200","from-internal","Alice <100>","SIP/100-00000001","#,
    r#""SIP/200-00000002","Dial","SIP/200,30,Ttr","2024-01-15 10:00:00","#,
    r#""2024-01-15 10:00:05","2024-01-15 10:02:05","125","120","ANSWERED","#,
    r#""DOCUMENTATION","1705312800.123","""#
);

fn write_cdr_file(lines: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("Master.csv");
    fs::write(&path, lines.join("\n")).expect("write csv");
    (dir, path)
}

#[test]
fn test_known_line_yields_expected_field_mapping() {
    let (_dir, path) = write_cdr_file(&[SAMPLE_LINE]);
    let report = CdrCollector::with_file(&path).collect(7, 1000).unwrap();

    assert_eq!(report.count, 1);
    let record = &report.records[0];
    assert_eq!(record.accountcode, "");
    assert_eq!(record.src, "100");
    assert_eq!(record.dst, "200");
    assert_eq!(record.dcontext, "from-internal");
    assert_eq!(record.clid, "Alice <100>");
    assert_eq!(record.channel, "SIP/100-00000001");
    assert_eq!(record.dstchannel, "SIP/200-00000002");
    assert_eq!(record.lastapp, "Dial");
    assert_eq!(record.lastdata, "SIP/200,30,Ttr");
    assert_eq!(record.calldate, "2024-01-15 10:00:00");
    assert_eq!(record.answerdate, "2024-01-15 10:00:05");
    assert_eq!(record.enddate, "2024-01-15 10:02:05");
    assert_eq!(record.duration, 125);
    assert_eq!(record.billsec, 120);
    assert_eq!(record.disposition, "ANSWERED");
    assert_eq!(record.amaflags, "DOCUMENTATION");
    assert_eq!(record.uniqueid, "1705312800.123");
    assert_eq!(record.userfield, "");
}

#[test]
fn test_short_and_blank_lines_are_skipped() {
    let (_dir, path) = write_cdr_file(&["too,short,row", "", "   ", SAMPLE_LINE]);
    let report = CdrCollector::with_file(&path).collect(7, 1000).unwrap();

    assert_eq!(report.count, 1);
    assert_eq!(report.debug_info.total_lines, 4);
}

#[test]
fn test_non_numeric_duration_skips_the_row() {
    let bad = SAMPLE_LINE.replace(r#""125""#, r#""2m5s""#);
    let (_dir, path) = write_cdr_file(&[&bad, SAMPLE_LINE]);
    let report = CdrCollector::with_file(&path).collect(7, 1000).unwrap();

    assert_eq!(report.count, 1);
    assert_eq!(report.records[0].duration, 125);
}

#[test]
fn test_limit_is_respected_newest_first() {
    let oldest = SAMPLE_LINE.replace("1705312800.123", "1705312800.001");
    let middle = SAMPLE_LINE.replace("1705312800.123", "1705312800.002");
    let newest = SAMPLE_LINE.replace("1705312800.123", "1705312800.003");
    let (_dir, path) = write_cdr_file(&[&oldest, &middle, &newest]);

    let report = CdrCollector::with_file(&path).collect(7, 2).unwrap();

    assert_eq!(report.count, 2);
    // File order is chronological, so the report starts from the last line.
    assert_eq!(report.records[0].uniqueid, "1705312800.003");
    assert_eq!(report.records[1].uniqueid, "1705312800.002");
    assert_eq!(report.debug_info.limit, 2);
    assert_eq!(report.debug_info.records_returned, 2);
}

#[test]
fn test_leading_bom_is_stripped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Master.csv");
    fs::write(&path, format!("\u{feff}{SAMPLE_LINE}")).unwrap();

    let report = CdrCollector::with_file(&path).collect(7, 1000).unwrap();
    assert_eq!(report.count, 1);
    assert_eq!(report.records[0].accountcode, "");
}

#[test]
fn test_empty_file_reports_zero_records_with_hint() {
    let (_dir, path) = write_cdr_file(&[""]);
    let report = CdrCollector::with_file(&path).collect(7, 1000).unwrap();

    assert_eq!(report.count, 0);
    assert!(report.records.is_empty());
    assert!(report.hint.is_some());
}

#[test]
fn test_missing_file_is_file_not_found() {
    let dir = tempdir().unwrap();
    let err = CdrCollector::with_file(dir.path().join("nope.csv"))
        .collect(7, 1000)
        .unwrap_err();

    assert!(matches!(err, CollectorError::CdrFileNotFound));
    assert_eq!(err.code(), ErrorCode::FileNotFound);
    assert!(err.hint().is_some());
}
