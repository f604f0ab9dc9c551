#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use subprobe_common::config::ReconOptions;
use subprobe_common::network::host::LiveHostSet;
use subprobe_common::network::target::Domain;
use subprobe_common::wordlist;
use subprobe_core::export;
use subprobe_core::recon::{ReconService, RunOutcome};
use subprobe_core::scanner::ProbeDispatcher;
use subprobe_core::scanner::endpoints::probe_endpoints;

use crate::support::{HangingProber, ScriptedProber};

fn example() -> Domain {
    "example.com".parse().unwrap()
}

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// www answers on both schemes, admin on neither.
#[tokio::test]
async fn www_live_on_both_schemes_is_reported_once() -> anyhow::Result<()> {
    let prober = Arc::new(ScriptedProber::live([
        "http://www.example.com",
        "https://www.example.com",
    ]));
    let mut service = ReconService::new(prober.clone());
    let options = ReconOptions {
        labels: strings(&["www", "admin"]),
        ..ReconOptions::default()
    };

    let result = service.run(example(), &options).await?;

    assert_eq!(prober.calls(), 4);
    assert_eq!(result.subdomains().to_vec(), vec!["www.example.com"]);
    assert_eq!(result.total_subs(), 1);
    Ok(())
}

#[tokio::test]
async fn only_live_endpoint_is_kept() {
    let prober = Arc::new(ScriptedProber::live(["https://a.example.com/robots.txt"]));
    let dispatcher = ProbeDispatcher::new(prober.clone());
    let hosts: LiveHostSet = ["a.example.com"].into_iter().collect();

    let endpoints = probe_endpoints(
        &dispatcher,
        &hosts,
        &strings(&["/admin", "/robots.txt"]),
        5,
        10,
        Duration::from_secs(2),
    )
    .await;

    assert_eq!(prober.calls(), 2);
    assert_eq!(endpoints.to_vec(), vec!["https://a.example.com/robots.txt"]);
}

#[tokio::test]
async fn endpoint_probes_are_capped_by_host_count() -> anyhow::Result<()> {
    let labels: Vec<String> = (0..8).map(|i| format!("h{i}")).collect();
    let live: Vec<String> = labels
        .iter()
        .map(|label| format!("http://{label}.example.com"))
        .collect();
    let prober = Arc::new(ScriptedProber::live(live));
    let mut service = ReconService::new(prober.clone());
    let options = ReconOptions {
        check_endpoints: true,
        labels,
        paths: strings(&["/admin", "/login", "/.env"]),
        ..ReconOptions::default()
    };

    let result = service.run(example(), &options).await?;

    assert_eq!(result.total_subs(), 8);
    assert_eq!(prober.calls(), 8 * 2 + 5 * 3);
    assert!(prober.calls() <= options.max_probe_count());
    assert!(result.endpoints().is_empty());
    Ok(())
}

#[tokio::test]
async fn all_probes_failing_yields_an_empty_result() -> anyhow::Result<()> {
    let prober = Arc::new(ScriptedProber::live(Vec::<String>::new()));
    let mut service = ReconService::new(prober.clone());
    let options = ReconOptions {
        check_endpoints: true,
        ..ReconOptions::default()
    };

    let result = service.run(example(), &options).await?;

    // Endpoint phase never ran: only the two probes per label went out.
    assert_eq!(prober.calls(), 2 * wordlist::default_labels().len());
    assert!(result.subdomains().is_empty());
    assert!(result.endpoints().is_empty());
    assert_eq!(result.total_subs(), 0);
    Ok(())
}

#[tokio::test]
async fn in_flight_probes_never_exceed_thread_count() -> anyhow::Result<()> {
    let prober = Arc::new(ScriptedProber::live(Vec::<String>::new()).with_delay(Duration::from_millis(5)));
    let mut service = ReconService::new(prober.clone());
    let options = ReconOptions {
        concurrency: 3,
        ..ReconOptions::default()
    };

    service.run(example(), &options).await?;

    assert_eq!(prober.calls(), 58);
    assert!(prober.high_water() <= 3, "high water mark was {}", prober.high_water());
    Ok(())
}

#[tokio::test]
async fn exported_json_has_unique_subdomains() -> anyhow::Result<()> {
    let prober = Arc::new(ScriptedProber::live([
        "https://staging.example.com",
        "http://dev.example.com",
        "https://dev.example.com",
    ]));
    let mut service = ReconService::new(prober.clone());

    let result = service.run(example(), &ReconOptions::default()).await?;
    let json: serde_json::Value = serde_json::from_str(&export::to_json(&result)?)?;

    let subdomains = json["subdomains"].as_array().cloned().unwrap_or_default();
    assert_eq!(subdomains.len(), 2);
    assert_eq!(json["total_subs"], 2);
    assert!(subdomains.contains(&serde_json::json!("staging.example.com")));
    assert!(subdomains.contains(&serde_json::json!("dev.example.com")));
    assert_eq!(json["domain"], "example.com");
    assert!(json["timestamp"].as_f64().unwrap_or_default() > 0.0);
    Ok(())
}

#[tokio::test]
async fn interrupt_mid_enumeration_produces_no_result() -> anyhow::Result<()> {
    let prober = Arc::new(HangingProber::default());
    let mut service = ReconService::new(prober.clone());
    let options = ReconOptions {
        concurrency: 4,
        ..ReconOptions::default()
    };

    let outcome = service
        .run_until(example(), &options, tokio::time::sleep(Duration::from_millis(50)))
        .await?;

    assert!(matches!(outcome, RunOutcome::Cancelled));
    assert_eq!(prober.calls(), 4);
    Ok(())
}
