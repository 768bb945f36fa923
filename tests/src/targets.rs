use lansweep_common::config::Config;
use lansweep_common::net::prefix::SubnetPrefix;

#[test]
fn detected_address_scenario_enumerates_the_full_slash24() {
    // Local address 192.168.1.42 -> prefix 192.168.1. -> targets .1 to .254.
    let prefix = SubnetPrefix::derive("192.168.1.42");
    let targets: Vec<String> = prefix.hosts().collect();

    assert_eq!(prefix.as_str(), "192.168.1.");
    assert_eq!(targets.len(), 254);
    assert_eq!(targets[0], "192.168.1.1");
    assert_eq!(targets[253], "192.168.1.254");
}

#[test]
fn forced_prefix_scenario_skips_detection_entirely() {
    let cfg = Config {
        force_prefix: Some("10.0.0.".to_string()),
        ..Config::default()
    };

    let prefix = SubnetPrefix::forced(cfg.force_prefix.as_deref().unwrap());
    let targets: Vec<String> = prefix.hosts().collect();

    assert_eq!(targets.first().map(String::as_str), Some("10.0.0.1"));
    assert_eq!(targets.last().map(String::as_str), Some("10.0.0.254"));
}

#[test]
fn default_config_matches_the_documented_tunables() {
    let cfg = Config::default();

    assert_eq!(cfg.ping_count, 1);
    assert_eq!(cfg.ping_timeout.as_secs(), 1);
    assert_eq!(cfg.probe_delay.as_millis(), 50);
    assert_eq!(cfg.force_prefix, None);
    assert_eq!(cfg.log_path.to_str(), Some("scan_log.csv"));
}
