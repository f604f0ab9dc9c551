//! Scripted probers for unit tests.

use std::collections::HashMap;
use std::future::pending;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use subprobe_common::network::probe::{ProbeError, ProbeRequest, ProbeResult, Prober};

/// Answers with a scripted status per URL and refuses everything else.
/// Records every call and the highest number of concurrent calls.
pub(crate) struct FakeProber {
    responses: HashMap<String, u16>,
    delay: Duration,
    calls: Mutex<Vec<ProbeRequest>>,
    in_flight: AtomicUsize,
    high_water: AtomicUsize,
}

impl FakeProber {
    pub(crate) fn new() -> Self {
        Self {
            responses: HashMap::new(),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            high_water: AtomicUsize::new(0),
        }
    }

    pub(crate) fn respond(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), status);
        self
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> Vec<ProbeRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn high_water(&self) -> usize {
        self.high_water.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for FakeProber {
    async fn probe(&self, request: ProbeRequest) -> ProbeResult {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.high_water.fetch_max(now, Ordering::SeqCst);
        self.calls.lock().unwrap().push(request.clone());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.responses.get(&request.url()) {
            Some(&status) => ProbeResult::responded(request, status),
            None => ProbeResult::failed(request, ProbeError::Connect("connection refused".into())),
        }
    }
}

pub(crate) struct PanickingProber;

#[async_trait]
impl Prober for PanickingProber {
    async fn probe(&self, request: ProbeRequest) -> ProbeResult {
        panic!("prober exploded on {}", request.url());
    }
}

/// Never answers.
pub(crate) struct StalledProber;

#[async_trait]
impl Prober for StalledProber {
    async fn probe(&self, _request: ProbeRequest) -> ProbeResult {
        pending().await
    }
}
