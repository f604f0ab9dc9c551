//! # Recon Result
//!
//! The terminal aggregate of a run. Built once by the orchestrator after both
//! phases have settled and read-only from then on; its serialized form is the
//! exported JSON document:
//!
//! ```json
//! {
//!   "domain": "example.com",
//!   "subdomains": ["www.example.com"],
//!   "endpoints": ["https://www.example.com/robots.txt"],
//!   "total_subs": 1,
//!   "timestamp": 1760745600.123
//! }
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::network::endpoint::EndpointSet;
use crate::network::host::LiveHostSet;
use crate::network::target::Domain;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconResult {
    domain: Domain,
    subdomains: LiveHostSet,
    endpoints: EndpointSet,
    total_subs: usize,
    /// Unix epoch seconds at assembly time.
    timestamp: f64,
}

impl ReconResult {
    pub fn new(
        domain: Domain,
        subdomains: LiveHostSet,
        endpoints: EndpointSet,
        captured_at: SystemTime,
    ) -> Self {
        let total_subs = subdomains.len();
        let timestamp = captured_at
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64())
            .unwrap_or_default();

        Self {
            domain,
            subdomains,
            endpoints,
            total_subs,
            timestamp,
        }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn subdomains(&self) -> &LiveHostSet {
        &self.subdomains
    }

    pub fn endpoints(&self) -> &EndpointSet {
        &self.endpoints
    }

    pub fn total_subs(&self) -> usize {
        self.total_subs
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
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
