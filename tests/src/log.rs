use std::fs;
use std::path::{Path, PathBuf};

use lansweep_core::log::{ScanRecord, SweepLog};

/// Unique log path under the OS temp dir, removed again on drop so a
/// failing assertion doesn't leave files behind.
struct TempLog(PathBuf);

impl TempLog {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "lansweep-{tag}-{}.csv",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }

    fn lines(&self) -> Vec<String> {
        fs::read_to_string(&self.0)
            .expect("log file should exist")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Drop for TempLog {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

const HEADER: &str = "timestamp,ip,mac,hostname";

#[test]
fn no_file_exists_before_the_first_append() {
    let tmp = TempLog::new("deferred");
    let log = SweepLog::new(tmp.path());

    assert_eq!(log.path(), tmp.path());
    assert!(!tmp.path().exists());
}

#[test]
fn header_is_written_exactly_once_within_a_run() {
    let tmp = TempLog::new("header-once");
    let log = SweepLog::new(tmp.path());

    log.append(&ScanRecord::now("192.168.1.1", None, None)).unwrap();
    log.append(&ScanRecord::now("192.168.1.2", None, None)).unwrap();

    let lines = tmp.lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines.iter().filter(|line| *line == HEADER).count(), 1);
}

#[test]
fn rerun_appends_rows_without_a_second_header() {
    let tmp = TempLog::new("rerun");

    // First run.
    SweepLog::new(tmp.path())
        .append(&ScanRecord::now("10.0.0.7", None, None))
        .unwrap();

    // Second run against the same file: same host shows up again as a
    // duplicate row, header untouched.
    SweepLog::new(tmp.path())
        .append(&ScanRecord::now("10.0.0.7", None, None))
        .unwrap();

    let lines = tmp.lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines.iter().filter(|line| *line == HEADER).count(), 1);
    assert!(lines[1].contains("10.0.0.7"));
    assert!(lines[2].contains("10.0.0.7"));
}

#[test]
fn row_with_mac_and_no_hostname_has_trailing_empty_field() {
    let tmp = TempLog::new("partial-row");
    let log = SweepLog::new(tmp.path());

    let record = ScanRecord::now("192.168.1.1", Some("aa:bb:cc:dd:ee:ff".into()), None);
    let timestamp = record.timestamp.clone();
    log.append(&record).unwrap();

    let lines = tmp.lines();
    assert_eq!(
        lines[1],
        format!("{timestamp},192.168.1.1,aa:bb:cc:dd:ee:ff,")
    );
}

#[test]
fn append_to_unwritable_path_is_an_error() {
    let log = SweepLog::new("/definitely/not/a/writable/path/scan_log.csv");

    let result = log.append(&ScanRecord::now("192.168.1.1", None, None));

    assert!(result.is_err());
}
