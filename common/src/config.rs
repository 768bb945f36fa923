use std::path::PathBuf;
use std::time::Duration;

/// Sweep tunables, built once at startup and passed by reference into the
/// driver. There is no command-line surface; changing a tunable means
/// editing the defaults here and rerunning.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of echo requests per liveness probe.
    pub ping_count: u32,
    /// Per-packet ping timeout. Keep this short; it bounds how long a dead
    /// address stalls the sweep.
    pub ping_timeout: Duration,
    /// Fixed pause between consecutive host probes.
    pub probe_delay: Duration,
    /// When set, skips local-address detection and scans this /24 prefix
    /// (e.g. "192.168.1.").
    pub force_prefix: Option<String>,
    /// CSV log destination, relative to the working directory.
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ping_count: 1,
            ping_timeout: Duration::from_secs(1),
            probe_delay: Duration::from_millis(50),
            force_prefix: None,
            log_path: PathBuf::from("scan_log.csv"),
        }
    }
}
