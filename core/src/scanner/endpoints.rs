//! Endpoint discovery on already-live hosts.
//!
//! Only the first `cap_hosts` hosts (in discovery order) are checked. Each gets
//! a `HEAD https://{host}{path}` per path, and every URL answering below 400 is
//! recorded.

use std::time::Duration;

use subprobe_common::found;
use subprobe_common::network::endpoint::EndpointSet;
use subprobe_common::network::host::LiveHostSet;
use subprobe_common::network::probe::ProbeRequest;

use super::{ProbeDispatcher, ScanPhase};

pub fn candidates(
    hosts: &LiveHostSet,
    paths: &[String],
    cap_hosts: usize,
    timeout: Duration,
) -> Vec<ProbeRequest> {
    hosts
        .first(cap_hosts)
        .flat_map(|host| {
            paths
                .iter()
                .map(move |path| ProbeRequest::endpoint_check(host, path).with_timeout(timeout))
        })
        .collect()
}

pub async fn probe_endpoints(
    dispatcher: &ProbeDispatcher,
    hosts: &LiveHostSet,
    paths: &[String],
    cap_hosts: usize,
    concurrency: usize,
    timeout: Duration,
) -> EndpointSet {
    let mut endpoints = EndpointSet::new();
    let requests: Vec<ProbeRequest> = candidates(hosts, paths, cap_hosts, timeout);
    if requests.is_empty() {
        return endpoints;
    }

    dispatcher
        .dispatch(ScanPhase::Endpoints, requests, concurrency, |result| {
            let Some(status) = result.live_status() else {
                return;
            };
            let url: String = result.url();
            if endpoints.insert(url.clone()) {
                found!("Found: {url} ({status})");
            }
        })
        .await;

    endpoints
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
