//! Link-layer address resolution out of the OS neighbor/ARP caches.
//!
//! The capability is a single trait with one platform variant picked at
//! startup; the text parsing is kept in pure functions so the token rules
//! are testable without spawning anything. All failures resolve to `None`.

use std::process::Command;

use tracing::debug;

/// Minimum token length for the legacy-ARP "looks like a MAC" heuristic
/// (aa:bb:cc:dd:ee:ff is 17 chars). Deliberately approximate.
const MAC_MIN_LEN: usize = 17;

/// Resolves a link-layer address for a network address, or `None` when the
/// neighbor caches have nothing (or the lookup tooling is absent).
pub trait LinkLayerResolver {
    fn resolve(&self, ip: &str) -> Option<String>;
}

/// Picks the variant for the running platform. Called once at startup.
pub fn platform_resolver() -> Box<dyn LinkLayerResolver> {
    if cfg!(windows) {
        Box::new(ArpCacheResolver)
    } else {
        Box::new(NeighborTableResolver)
    }
}

/// Unix-family resolver: kernel neighbor table first (`ip neigh`), legacy
/// ARP table (`arp -n`) as fallback.
pub struct NeighborTableResolver;

impl LinkLayerResolver for NeighborTableResolver {
    fn resolve(&self, ip: &str) -> Option<String> {
        if let Some(mac) = capture_stdout("ip", &["neigh", "show", ip]).and_then(|out| lladdr_token(&out)) {
            return Some(mac);
        }
        capture_stdout("arp", &["-n", ip]).and_then(|out| mac_shaped_token(&out))
    }
}

/// Windows-family resolver: ARP cache in listing mode (`arp -a`).
pub struct ArpCacheResolver;

impl LinkLayerResolver for ArpCacheResolver {
    fn resolve(&self, ip: &str) -> Option<String> {
        capture_stdout("arp", &["-a", ip]).and_then(|out| second_token_on_line_with(&out, ip))
    }
}

fn capture_stdout(program: &str, args: &[&str]) -> Option<String> {
    match Command::new(program).args(args).output() {
        Ok(output) => Some(String::from_utf8_lossy(&output.stdout).into_owned()),
        Err(err) => {
            debug!("failed to run {program}: {err}");
            None
        }
    }
}

/// `ip neigh` prints e.g. `192.168.1.5 dev wlan0 lladdr aa:bb:cc:dd:ee:ff
/// REACHABLE`; the MAC is the token after the `lladdr` marker.
fn lladdr_token(output: &str) -> Option<String> {
    let tokens: Vec<&str> = output.split_whitespace().collect();
    let marker = tokens.iter().position(|token| *token == "lladdr")?;
    tokens.get(marker + 1).map(|token| token.to_string())
}

/// Legacy ARP fallback: first whitespace token shaped like a MAC. The shape
/// test (contains ':', at least 17 chars) is a heuristic, kept as-is.
fn mac_shaped_token(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .find(|token| token.contains(':') && token.len() >= MAC_MIN_LEN)
        .map(|token| token.to_string())
}

/// `arp -a` listing: on the first line containing the target address with at
/// least two columns, the physical address is the second column.
fn second_token_on_line_with(output: &str, ip: &str) -> Option<String> {
    for line in output.lines() {
        if !line.contains(ip) {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() >= 2 {
            return Some(parts[1].to_string());
        }
    }
    None
}
