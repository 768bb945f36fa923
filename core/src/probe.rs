//! Per-host probes that never fail: liveness via the system ping binary and
//! reverse DNS via the system resolver. A missing binary, a refused spawn or
//! an NXDOMAIN all degrade to `false`/`None` so the sweep keeps moving.

use std::net::IpAddr;
use std::process::{Command, Stdio};

use lansweep_common::config::Config;
use tracing::debug;

/// One ICMP echo round-trip through the platform ping utility.
/// Liveness is the child's exit status; output is discarded.
pub fn is_alive(ip: &str, cfg: &Config) -> bool {
    match ping_command(ip, cfg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) => status.success(),
        Err(err) => {
            debug!("failed to spawn ping for {ip}: {err}");
            false
        }
    }
}

#[cfg(windows)]
fn ping_command(ip: &str, cfg: &Config) -> Command {
    let mut cmd = Command::new("ping");
    cmd.arg("-n")
        .arg(cfg.ping_count.to_string())
        .arg("-w")
        .arg(cfg.ping_timeout.as_millis().to_string())
        .arg(ip);
    cmd
}

#[cfg(not(windows))]
fn ping_command(ip: &str, cfg: &Config) -> Command {
    // -W takes whole seconds on Linux ping; round up so a sub-second
    // configured timeout still waits at all.
    let timeout_secs = cfg.ping_timeout.as_secs().max(1);
    let mut cmd = Command::new("ping");
    cmd.arg("-c")
        .arg(cfg.ping_count.to_string())
        .arg("-W")
        .arg(timeout_secs.to_string())
        .arg(ip);
    cmd
}

/// PTR-style hostname lookup. Resolvers that merely echo the address back
/// count as unresolved.
pub fn reverse_dns(ip: &str) -> Option<String> {
    let addr: IpAddr = ip.parse().ok()?;
    let name = dns_lookup::lookup_addr(&addr).ok()?;
    if name == ip {
        return None;
    }
    Some(name)
}
