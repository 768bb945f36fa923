use std::path::PathBuf;

use thiserror::Error;

/// The only failures that abort a sweep. Everything else (subprocess spawn
/// failures, unparsable neighbor output, DNS misses) degrades to an empty
/// value at the point of occurrence.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error(
        "could not determine a local IPv4 address; set Config::force_prefix or check the network"
    )]
    NoLocalAddress,

    #[error("failed to append to log file {path}")]
    LogAppend {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
