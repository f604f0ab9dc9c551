//! The central **abstraction** for fanning probes out against a target.
//!
//! Both phases ([`subdomains`] and [`endpoints`]) turn their inputs into a list
//! of [`ProbeRequest`]s and hand it to a [`ProbeDispatcher`]. The dispatcher
//! spawns one task per probe, but only after a semaphore permit was acquired,
//! so no more than `concurrency` probes are ever in flight.
//!
//! **Aggregation:** settled results are handed back one by one on the task that
//! called [`ProbeDispatcher::dispatch`]. The phase's result set lives there and
//! is never shared with the probe tasks.
//!
//! **Cancellation:** the probe tasks are owned by a `JoinSet` inside the
//! dispatch future. Dropping that future aborts every probe still in flight.

use std::fmt;
use std::sync::Arc;

use subprobe_common::network::probe::{ProbeRequest, ProbeResult, Prober};
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::debug;

pub mod endpoints;
pub mod subdomains;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Subdomains,
    Endpoints,
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanPhase::Subdomains => f.write_str("subdomain"),
            ScanPhase::Endpoints => f.write_str("endpoint"),
        }
    }
}

/// Snapshot sent to the progress callback after every settled probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub phase: ScanPhase,
    pub settled: usize,
    pub total: usize,
    pub live: usize,
}

pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Tally of one dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub dispatched: usize,
    /// Probes that got any HTTP status back.
    pub responded: usize,
    pub live: usize,
    /// Probes that got no response (timeout, refused, DNS, TLS...).
    pub failed: usize,
    /// Probe tasks that panicked.
    pub lost: usize,
}

impl DispatchSummary {
    pub fn settled(&self) -> usize {
        self.responded + self.failed + self.lost
    }
}

pub struct ProbeDispatcher {
    prober: Arc<dyn Prober>,
    on_progress: Option<ProgressCallback>,
}

impl ProbeDispatcher {
    pub fn new(prober: Arc<dyn Prober>) -> Self {
        Self {
            prober,
            on_progress: None,
        }
    }

    pub fn with_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Runs every request through the prober with at most `concurrency` probes
    /// in flight and feeds each settled result to `on_result`.
    ///
    /// Returns only once every dispatched probe has settled. A failing or even
    /// panicking probe never stops the others.
    pub async fn dispatch<F>(
        &self,
        phase: ScanPhase,
        requests: Vec<ProbeRequest>,
        concurrency: usize,
        mut on_result: F,
    ) -> DispatchSummary
    where
        F: FnMut(ProbeResult),
    {
        let total: usize = requests.len();
        let permits: usize = concurrency.clamp(1, Semaphore::MAX_PERMITS);
        let semaphore = Arc::new(Semaphore::new(permits));
        let mut tasks: JoinSet<ProbeResult> = JoinSet::new();
        let mut summary = DispatchSummary::default();

        for request in requests {
            // The semaphore is never closed, acquiring only waits for a free slot.
            let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
                break;
            };
            let prober = Arc::clone(&self.prober);

            tasks.spawn(async move {
                let _permit = permit;
                prober.probe(request).await
            });
            summary.dispatched += 1;

            while let Some(joined) = tasks.try_join_next() {
                self.settle(phase, total, joined, &mut summary, &mut on_result);
            }
        }

        while let Some(joined) = tasks.join_next().await {
            self.settle(phase, total, joined, &mut summary, &mut on_result);
        }

        debug!(
            "{phase} phase: {} probes, {} responded, {} live, {} without response",
            summary.dispatched, summary.responded, summary.live, summary.failed
        );

        summary
    }

    fn settle<F>(
        &self,
        phase: ScanPhase,
        total: usize,
        joined: Result<ProbeResult, JoinError>,
        summary: &mut DispatchSummary,
        on_result: &mut F,
    ) where
        F: FnMut(ProbeResult),
    {
        match joined {
            Ok(result) => {
                match result.status() {
                    Some(_) => summary.responded += 1,
                    None => summary.failed += 1,
                }
                if result.is_live() {
                    summary.live += 1;
                }
                on_result(result);
            }
            Err(err) => {
                debug!("{phase} probe task did not finish: {err}");
                summary.lost += 1;
            }
        }

        if let Some(on_progress) = &self.on_progress {
            on_progress(Progress {
                phase,
                settled: summary.settled(),
                total,
                live: summary.live,
            });
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
