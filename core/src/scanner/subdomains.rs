//! Subdomain enumeration.
//!
//! Every wordlist label becomes `{label}.{domain}` and is probed twice, once
//! over plain http and once over https. A host counts as live as soon as either
//! probe answers with a status below 400. Hosts are kept in the order their
//! first live answer settled.

use std::time::Duration;

use subprobe_common::network::host::LiveHostSet;
use subprobe_common::network::probe::{ProbeRequest, ProbeResult, Scheme};
use subprobe_common::network::target::Domain;
use subprobe_common::success;

use super::{ProbeDispatcher, ScanPhase};

pub fn candidates(domain: &Domain, labels: &[String], timeout: Duration) -> Vec<ProbeRequest> {
    labels
        .iter()
        .flat_map(|label| {
            let host: String = domain.subdomain(label);
            Scheme::ALL.into_iter().map(move |scheme| {
                ProbeRequest::host_check(scheme, host.clone()).with_timeout(timeout)
            })
        })
        .collect()
}

pub async fn enumerate(
    dispatcher: &ProbeDispatcher,
    domain: &Domain,
    labels: &[String],
    concurrency: usize,
    timeout: Duration,
) -> LiveHostSet {
    let requests: Vec<ProbeRequest> = candidates(domain, labels, timeout);
    let mut live_hosts = LiveHostSet::new();

    dispatcher
        .dispatch(ScanPhase::Subdomains, requests, concurrency, |result| {
            let Some(status) = result.live_status() else {
                return;
            };
            if live_hosts.insert(result.host()) {
                report_live_host(&result, status);
            }
        })
        .await;

    live_hosts
}

fn report_live_host(result: &ProbeResult, status: u16) {
    match result.scheme() {
        Scheme::Http => success!("{} ({status})", result.host()),
        Scheme::Https => success!("{} (https, {status})", result.host()),
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
