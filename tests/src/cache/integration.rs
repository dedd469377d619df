#![cfg(test)]
use hopper_common::CacheConfig;
use hopper_core::cache::{PingProber, Prober, select_cache_host};

/// Probes loopback with the real `ping` binary. Skips when the environment
/// blocks ICMP or has no `ping` on PATH, the way sandboxed CI runners do.
#[test]
fn ping_prober_selects_loopback() {
    let prober = PingProber;
    if !prober.is_reachable("127.0.0.1") {
        eprintln!("Skipping: ping unavailable or ICMP blocked in this environment.");
        return;
    }

    let config = CacheConfig::new(vec!["127.0.0.1".to_string()]);
    let selected = select_cache_host(&config).unwrap();
    assert_eq!(selected, "127.0.0.1");
}

/// `.invalid` is reserved and never resolves, so every probe fails no matter
/// how the environment treats ICMP.
#[test]
fn unresolvable_hosts_exhaust_the_list() {
    let config = CacheConfig::new(vec![
        "cache01.invalid".to_string(),
        "cache02.invalid".to_string(),
    ]);

    let err = select_cache_host(&config).unwrap_err();
    assert!(err.to_string().contains("no reachable cache host"));

    // The configured list survives the failed selection.
    assert_eq!(config.hosts.len(), 2);
    assert!(select_cache_host(&config).is_err());
}
