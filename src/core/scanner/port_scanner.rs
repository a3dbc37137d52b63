// src/core/scanner/port_scanner.rs

use crate::core::knowledge_base::PORTS;
use crate::core::models::Port;
use crate::core::scanner::seed::Seed;

/// HTTP and HTTPS, always listed first.
const ALWAYS_OPEN: usize = 2;

/// Lists the "open" ports of the target: HTTP, HTTPS, then up to three extras.
///
/// Extras are drawn from the non-web part of the catalog and may repeat.
pub fn open_ports(seed: Seed) -> Vec<Port> {
    let extra_pool = (PORTS.len() - ALWAYS_OPEN) as u64;
    let extras = (ALWAYS_OPEN..seed.port_count())
        .map(|i| &PORTS[ALWAYS_OPEN + seed.scaled(i as u64 + 1, extra_pool)]);

    PORTS[..ALWAYS_OPEN].iter().chain(extras).map(Port::from).collect()
}
