//! The sweep driver: one pass over a /24, host octets 1 through 254 in
//! order, one blocking probe per address, one log row per live host. Per
//! spec there is no parallelism and no cancellation; the fixed inter-probe
//! sleep is the only pacing.

use std::thread;

use lansweep_common::config::Config;
use lansweep_common::error::SweepError;
use lansweep_common::net::prefix::SubnetPrefix;

use crate::log::{ScanRecord, SweepLog};
use crate::neighbor::{self, LinkLayerResolver};
use crate::probe;

/// Everything learned about one candidate address. MAC and hostname are
/// only ever populated for live hosts; "unresolvable" is `None`, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub target: String,
    pub alive: bool,
    pub mac: Option<String>,
    pub hostname: Option<String>,
}

/// Runs the full sweep for `prefix`, invoking `on_outcome` once per address
/// (alive or down) and appending one log row per live host. Returns the
/// number of live hosts. The only error path is a failed log append.
pub fn run(
    prefix: &SubnetPrefix,
    cfg: &Config,
    mut on_outcome: impl FnMut(&ProbeOutcome),
) -> Result<usize, SweepError> {
    let resolver = neighbor::platform_resolver();
    let log = SweepLog::new(&cfg.log_path);
    let mut alive_count = 0;

    for target in prefix.hosts() {
        let outcome = probe_host(&target, cfg, resolver.as_ref());
        on_outcome(&outcome);

        if outcome.alive {
            alive_count += 1;
            let record = ScanRecord::now(&outcome.target, outcome.mac, outcome.hostname);
            log.append(&record)?;
        }

        thread::sleep(cfg.probe_delay);
    }

    Ok(alive_count)
}

fn probe_host(target: &str, cfg: &Config, resolver: &dyn LinkLayerResolver) -> ProbeOutcome {
    if !probe::is_alive(target, cfg) {
        return ProbeOutcome {
            target: target.to_string(),
            alive: false,
            mac: None,
            hostname: None,
        };
    }

    ProbeOutcome {
        target: target.to_string(),
        alive: true,
        mac: resolver.resolve(target),
        hostname: probe::reverse_dns(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lansweep_common::config::Config;

    struct FixedResolver(Option<String>);

    impl LinkLayerResolver for FixedResolver {
        fn resolve(&self, _ip: &str) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn down_host_carries_no_lookups() {
        // No ping target parses "256..."; the probe reports down and the
        // resolver must never populate fields for a down host.
        let cfg = Config::default();
        let resolver = FixedResolver(Some("aa:bb:cc:dd:ee:ff".into()));

        let outcome = probe_host("256.256.256.256", &cfg, &resolver);

        assert!(!outcome.alive);
        assert_eq!(outcome.mac, None);
        assert_eq!(outcome.hostname, None);
    }
}
