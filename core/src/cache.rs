//! # Cache Host Selection
//!
//! A poor man's load balancer for the online cache: pick a candidate at
//! random, keep it if a single ping comes back, otherwise drop it and try
//! another. There is no health-check subsystem behind this; the probe is one
//! echo request with ping's own default timeout.

use hopper_common::config::CacheConfig;
use hopper_common::error::{Error, Result};
use tracing::{debug, warn};

use crate::command;

/// Reachability check for a single host.
///
/// Abstracted so the selection logic can be exercised without network access;
/// production code uses [`PingProber`].
pub trait Prober {
    fn is_reachable(&self, hostname: &str) -> bool;
}

/// Probes with one ICMP echo request via the system `ping` binary.
pub struct PingProber;

impl Prober for PingProber {
    fn is_reachable(&self, hostname: &str) -> bool {
        command::run("ping", &["-q", "-c", "1", hostname]).is_ok()
    }
}

/// Selects one reachable host from `hosts`, probing uniformly at random to
/// spread load across the candidates.
///
/// Unreachable candidates are dropped from a local working copy only; `hosts`
/// itself is never reduced, so subsequent calls always start from the full
/// configured list. Fails with [`Error::NoAvailableHost`] once the working
/// copy is exhausted.
pub fn select_host(hosts: &[String], prober: &dyn Prober) -> Result<String> {
    let mut working: Vec<String> = hosts.to_vec();

    while !working.is_empty() {
        let pick = working[rand::random_range(0..working.len())].clone();
        if prober.is_reachable(&pick) {
            debug!("cache host [{pick}] is reachable");
            return Ok(pick);
        }
        warn!("cache host [{pick}] failed its reachability probe");
        working.retain(|candidate| *candidate != pick);
    }

    Err(Error::NoAvailableHost {
        candidates: hosts.len(),
    })
}

/// Production entry point: ping-probe the configured cache hosts.
pub fn select_cache_host(config: &CacheConfig) -> Result<String> {
    select_host(&config.hosts, &PingProber)
}
