//! # Run Configuration
//!
//! [`Config`] carries the terminal knobs, [`ReconOptions`] everything the
//! probing engine needs for one run.

use std::time::Duration;

use thiserror::Error;

use crate::network::probe::{ENDPOINT_PROBE_TIMEOUT, HOST_PROBE_TIMEOUT};
use crate::network::target::is_valid_subdomain_prefix;
use crate::wordlist;

pub const DEFAULT_THREADS: usize = 10;
pub const DEFAULT_ENDPOINT_HOST_CAP: usize = 5;
/// Upper bound on in-flight probes, one socket each.
pub const MAX_THREADS: usize = 1024;

pub struct Config {
    /// Skips the banner at start-up.
    pub no_banner: bool,
    /// `0` prints everything, `1` drops banner and headers, `2` also drops the summary.
    pub quiet: u8,
    /// Enables debug events (probe tallies per phase).
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("thread count must be at least 1")]
    ZeroConcurrency,
    #[error("thread count {0} exceeds the maximum of 1024")]
    TooManyThreads(usize),
    #[error("endpoint host cap must be at least 1")]
    ZeroHostCap,
    #[error("probe timeouts must be greater than zero")]
    ZeroTimeout,
    #[error("wordlist contains no labels")]
    NoLabels,
    #[error("'{0}' is not a valid subdomain label")]
    InvalidLabel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconOptions {
    /// Maximum number of probes in flight at once, in both phases.
    pub concurrency: usize,
    /// Runs the endpoint phase once live hosts were found.
    pub check_endpoints: bool,
    pub host_timeout: Duration,
    pub endpoint_timeout: Duration,
    /// Only the first `endpoint_host_cap` hosts (discovery order) get endpoint probes.
    pub endpoint_host_cap: usize,
    pub labels: Vec<String>,
    pub paths: Vec<String>,
}

impl Default for ReconOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_THREADS,
            check_endpoints: false,
            host_timeout: HOST_PROBE_TIMEOUT,
            endpoint_timeout: ENDPOINT_PROBE_TIMEOUT,
            endpoint_host_cap: DEFAULT_ENDPOINT_HOST_CAP,
            labels: wordlist::default_labels(),
            paths: wordlist::default_paths(),
        }
    }
}

impl ReconOptions {
    /// Rejects settings that would make the run meaningless before any probe is sent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if self.concurrency > MAX_THREADS {
            return Err(ConfigError::TooManyThreads(self.concurrency));
        }
        if self.endpoint_host_cap == 0 {
            return Err(ConfigError::ZeroHostCap);
        }
        if self.host_timeout.is_zero() || self.endpoint_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.labels.is_empty() {
            return Err(ConfigError::NoLabels);
        }
        if let Some(label) = self.labels.iter().find(|l| !is_valid_subdomain_prefix(l)) {
            return Err(ConfigError::InvalidLabel(label.clone()));
        }
        Ok(())
    }

    /// Upper bound on the probes a run can send: two per label, plus
    /// `cap × paths` when endpoint checks are on.
    pub fn max_probe_count(&self) -> usize {
        let host_probes = self.labels.len().saturating_mul(2);
        if self.check_endpoints {
            let endpoint_probes = self.endpoint_host_cap.saturating_mul(self.paths.len());
            host_probes.saturating_add(endpoint_probes)
        } else {
            host_probes
        }
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
