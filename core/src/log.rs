//! Append-only CSV sweep log.
//!
//! The file is opened and closed on every append; a crash mid-sweep loses at
//! most the in-flight row. The header goes in exactly once, when the file
//! does not yet exist. Single-threaded, so the exists-then-open sequence
//! needs no locking.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use lansweep_common::error::SweepError;

pub const LOG_HEADER: [&str; 4] = ["timestamp", "ip", "mac", "hostname"];

/// One discovered-host row. Unresolved MAC or hostname serialize as empty
/// fields, not as placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRecord {
    /// Extended ISO-8601 UTC with microseconds and a literal trailing `Z`.
    pub timestamp: String,
    pub ip: String,
    pub mac: String,
    pub hostname: String,
}

impl ScanRecord {
    pub fn now(ip: &str, mac: Option<String>, hostname: Option<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            ip: ip.to_string(),
            mac: mac.unwrap_or_default(),
            hostname: hostname.unwrap_or_default(),
        }
    }
}

/// Handle on the log path. Creation of the file is deferred to the first
/// append, so an aborted run that never found a host leaves nothing behind.
pub struct SweepLog {
    path: PathBuf,
}

impl SweepLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends exactly one CSV record, writing the header first if the file
    /// did not exist. I/O failure here is fatal to the sweep.
    pub fn append(&self, record: &ScanRecord) -> Result<(), SweepError> {
        let write_header = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.fail(source))?;

        let mut writer = csv::Writer::from_writer(file);
        if write_header {
            writer
                .write_record(LOG_HEADER)
                .map_err(|err| self.fail(io::Error::other(err)))?;
        }
        writer
            .write_record([&record.timestamp, &record.ip, &record.mac, &record.hostname])
            .map_err(|err| self.fail(io::Error::other(err)))?;
        writer
            .flush()
            .map_err(|source| self.fail(source))?;

        Ok(())
    }

    fn fail(&self, source: io::Error) -> SweepError {
        SweepError::LogAppend {
            path: self.path.clone(),
            source,
        }
    }
}
