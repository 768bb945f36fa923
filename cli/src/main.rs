mod terminal;

use lansweep_common::config::Config;
use lansweep_common::error::SweepError;
use lansweep_common::net::local;
use lansweep_common::net::prefix::SubnetPrefix;
use lansweep_common::{info, success};
use lansweep_core::sweep;
use terminal::print;

fn main() -> anyhow::Result<()> {
    terminal::logging::init();
    print::banner();

    let cfg = Config::default();
    let prefix = resolve_prefix(&cfg)?;

    print::scan_notes(&cfg.log_path);
    print::header("sweeping");

    let alive_count = sweep::run(&prefix, &cfg, print::outcome_line)?;

    print::completion(alive_count, &cfg.log_path);
    Ok(())
}

/// INIT → PREFIX-RESOLVED: a forced prefix wins outright; otherwise the
/// prefix derives from the detected outbound address. Neither available is
/// the one fatal pre-scan condition.
fn resolve_prefix(cfg: &Config) -> Result<SubnetPrefix, SweepError> {
    if let Some(forced) = &cfg.force_prefix {
        let prefix = SubnetPrefix::forced(forced);
        info!("Using manually configured prefix: {prefix}");
        return Ok(prefix);
    }

    let local_addr = local::local_ipv4().ok_or(SweepError::NoLocalAddress)?;
    let prefix = SubnetPrefix::from(local_addr);
    success!("Local address {local_addr} -> scan prefix {prefix}0/24");
    Ok(prefix)
}
