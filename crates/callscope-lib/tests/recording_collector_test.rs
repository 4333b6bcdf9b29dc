//! Recording discovery against a synthetic spool tree.

use std::fs;

use callscope_lib::recordings::RecordingCollector;
use callscope_lib::CollectorError;
use callscope_types::ErrorCode;
use tempfile::tempdir;

#[test]
fn test_audio_files_are_found_recursively() {
    let spool = tempdir().unwrap();
    fs::create_dir_all(spool.path().join("2024/01/15")).unwrap();
    fs::write(spool.path().join("out-100-200.wav"), b"RIFFdata").unwrap();
    fs::write(spool.path().join("2024/01/15/q-600.mp3"), b"ID3").unwrap();
    fs::write(spool.path().join("2024/01/15/agent.gsm"), b"\x00").unwrap();
    fs::write(spool.path().join("notes.txt"), b"not audio").unwrap();

    let report = RecordingCollector::with_dir(spool.path()).collect(7).unwrap();

    assert_eq!(report.count, 3);
    let mut names: Vec<&str> = report
        .recordings
        .iter()
        .map(|r| r.filename.as_str())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["agent.gsm", "out-100-200.wav", "q-600.mp3"]);
}

#[test]
fn test_sizes_and_paths_are_reported() {
    let spool = tempdir().unwrap();
    let file = spool.path().join("call.wav");
    fs::write(&file, b"12345678").unwrap();

    let report = RecordingCollector::with_dir(spool.path()).collect(7).unwrap();

    assert_eq!(report.count, 1);
    let recording = &report.recordings[0];
    assert_eq!(recording.size, 8);
    assert_eq!(recording.filename, "call.wav");
    assert_eq!(recording.path, file.display().to_string());
    assert!(recording.modified.contains('T'));
}

#[test]
fn test_files_older_than_the_cutoff_are_excluded() {
    let spool = tempdir().unwrap();
    fs::write(spool.path().join("old.wav"), b"RIFF").unwrap();

    // A zero-day window puts the cutoff at "now", after the file's mtime.
    let report = RecordingCollector::with_dir(spool.path()).collect(0).unwrap();
    assert_eq!(report.count, 0);
}

#[test]
fn test_huge_day_window_means_no_cutoff() {
    let spool = tempdir().unwrap();
    fs::write(spool.path().join("ancient.wav"), b"RIFF").unwrap();

    // A window wider than the calendar must not abort the scan.
    let report = RecordingCollector::with_dir(spool.path())
        .collect(u32::MAX)
        .unwrap();
    assert_eq!(report.count, 1);
    assert_eq!(report.recordings[0].filename, "ancient.wav");
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_does_not_fail_the_scan() {
    use std::os::unix::fs::PermissionsExt;

    let spool = tempdir().unwrap();
    let locked = spool.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("hidden.wav"), b"RIFF").unwrap();
    fs::write(spool.path().join("open.wav"), b"RIFF").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let result = RecordingCollector::with_dir(spool.path()).collect(7);

    // restore before asserting so the tempdir can be cleaned up
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let report = result.unwrap();
    assert!(report
        .recordings
        .iter()
        .any(|recording| recording.filename == "open.wav"));
}

#[test]
fn test_missing_spool_is_path_not_found() {
    let dir = tempdir().unwrap();
    let err = RecordingCollector::with_dir(dir.path().join("missing"))
        .collect(7)
        .unwrap_err();

    assert!(matches!(err, CollectorError::RecordingPathNotFound));
    assert_eq!(err.code(), ErrorCode::PathNotFound);
}
