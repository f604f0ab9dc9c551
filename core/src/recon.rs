//! # Recon Service
//!
//! Implements the core "recon a domain" use case.
//!
//! The service sequences the two probing phases and assembles their output
//! into a [`ReconResult`]:
//! 1. **Enumeration**: probe every wordlist label over http and https.
//! 2. **Endpoint checks** (optional): probe common paths on the first live hosts.

use std::future::Future;
use std::sync::Arc;
use std::time::SystemTime;

use subprobe_common::config::ReconOptions;
use subprobe_common::network::endpoint::EndpointSet;
use subprobe_common::network::host::LiveHostSet;
use subprobe_common::network::probe::Prober;
use subprobe_common::network::target::Domain;
use subprobe_common::report::ReconResult;
use subprobe_common::{info, success};
use tracing::debug;

use crate::scanner::endpoints::probe_endpoints;
use crate::scanner::subdomains::enumerate;
use crate::scanner::{ProbeDispatcher, ProgressCallback};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconState {
    Idle,
    Enumerating,
    EndpointChecking,
    Done,
    Cancelled,
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed(ReconResult),
    /// Shutdown won the race. In-flight probes were aborted and no result exists.
    Cancelled,
}

/// Application service for a recon run.
///
/// Owns the [`ProbeDispatcher`] both phases share, so the prober (and its
/// connection pool) lives for the whole run.
pub struct ReconService {
    dispatcher: ProbeDispatcher,
    state: ReconState,
}

impl ReconService {
    pub fn new(prober: Arc<dyn Prober>) -> Self {
        Self {
            dispatcher: ProbeDispatcher::new(prober),
            state: ReconState::Idle,
        }
    }

    pub fn with_progress(self, on_progress: ProgressCallback) -> Self {
        Self {
            dispatcher: self.dispatcher.with_progress(on_progress),
            ..self
        }
    }

    pub fn state(&self) -> ReconState {
        self.state
    }

    /// Runs both phases against `target`.
    ///
    /// Invalid options fail before any probe is sent. Probe failures never
    /// fail the run, they only make hosts and endpoints count as not live.
    pub async fn run(
        &mut self,
        target: Domain,
        options: &ReconOptions,
    ) -> anyhow::Result<ReconResult> {
        options.validate()?;

        self.state = ReconState::Enumerating;
        info!("Enumerating subdomains for {target}...");
        info!("Using {} threads", options.concurrency);
        debug!("at most {} probes this run", options.max_probe_count());

        let subdomains: LiveHostSet = enumerate(
            &self.dispatcher,
            &target,
            &options.labels,
            options.concurrency,
            options.host_timeout,
        )
        .await;
        success!("Found {} subdomains", subdomains.len());

        let mut endpoints = EndpointSet::new();
        if options.check_endpoints && !subdomains.is_empty() {
            self.state = ReconState::EndpointChecking;
            info!("Checking common endpoints...");
            endpoints = probe_endpoints(
                &self.dispatcher,
                &subdomains,
                &options.paths,
                options.endpoint_host_cap,
                options.concurrency,
                options.endpoint_timeout,
            )
            .await;
        } else if options.check_endpoints {
            debug!("no live hosts, skipping endpoint checks");
        }

        self.state = ReconState::Done;
        Ok(ReconResult::new(target, subdomains, endpoints, SystemTime::now()))
    }

    /// Same as [`run`](Self::run), but gives up as soon as `shutdown` resolves.
    ///
    /// Dropping the run future drops the dispatcher's task set, which aborts
    /// every probe still in flight.
    pub async fn run_until<S>(
        &mut self,
        target: Domain,
        options: &ReconOptions,
        shutdown: S,
    ) -> anyhow::Result<RunOutcome>
    where
        S: Future<Output = ()>,
    {
        let finished: Option<anyhow::Result<ReconResult>> = tokio::select! {
            biased;
            _ = shutdown => None,
            result = self.run(target, options) => Some(result),
        };

        match finished {
            Some(result) => result.map(RunOutcome::Completed),
            None => {
                self.state = ReconState::Cancelled;
                Ok(RunOutcome::Cancelled)
            }
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
