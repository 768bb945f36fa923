//! # Subnet Prefix Model
//!
//! A `/24` scan prefix in its dotted "a.b.c." string form, either derived
//! from a local address or forced through configuration. Host enumeration
//! lives here too so the driver never fabricates address strings itself.

use std::fmt;
use std::net::Ipv4Addr;

/// Lowest host octet probed in the /24.
pub const FIRST_HOST_OCTET: u8 = 1;
/// Highest host octet probed in the /24 (broadcast .255 excluded).
pub const LAST_HOST_OCTET: u8 = 254;

/// The first three octets of a /24 subnet, with a trailing dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetPrefix(String);

impl SubnetPrefix {
    /// Derives the prefix from a dotted-quad address string: the first three
    /// dot-separated components joined with '.', plus a trailing '.'.
    ///
    /// Inputs with fewer than three components truncate to whatever exists;
    /// callers validate addresses upstream.
    pub fn derive(addr: &str) -> Self {
        let head: Vec<&str> = addr.split('.').take(3).collect();
        Self(format!("{}.", head.join(".")))
    }

    /// Wraps a manually configured prefix verbatim, e.g. "10.0.0.".
    pub fn forced(prefix: &str) -> Self {
        Self(prefix.to_string())
    }

    /// The dotted-quad string for one host octet within this subnet.
    pub fn host(&self, octet: u8) -> String {
        format!("{}{}", self.0, octet)
    }

    /// All scan targets in order, .1 through .254.
    pub fn hosts(&self) -> impl Iterator<Item = String> + '_ {
        (FIRST_HOST_OCTET..=LAST_HOST_OCTET).map(|octet| self.host(octet))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Ipv4Addr> for SubnetPrefix {
    fn from(addr: Ipv4Addr) -> Self {
        let [a, b, c, _] = addr.octets();
        Self(format!("{a}.{b}.{c}."))
    }
}

impl fmt::Display for SubnetPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
