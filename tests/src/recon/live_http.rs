#![cfg(test)]
//! The real reqwest prober against a local server. `www.example.com` is
//! pinned to the server, so nothing leaves the machine.

use std::sync::Arc;
use std::time::Duration;

use subprobe_common::config::ReconOptions;
use subprobe_core::network::http::HttpProber;
use subprobe_core::recon::ReconService;

use crate::support::spawn_http_server;

#[tokio::test]
async fn plain_http_host_is_discovered_through_reqwest() -> anyhow::Result<()> {
    let addr = spawn_http_server("302 Found").await;
    let client = HttpProber::client_builder()
        .no_proxy()
        .resolve("www.example.com", addr)
        .build()?;
    let mut service = ReconService::new(Arc::new(HttpProber::from_client(client)));
    let options = ReconOptions {
        labels: vec!["www".to_string()],
        host_timeout: Duration::from_millis(500),
        ..ReconOptions::default()
    };

    let result = service.run("example.com".parse()?, &options).await?;

    assert_eq!(result.subdomains().to_vec(), vec!["www.example.com"]);
    Ok(())
}

#[tokio::test]
async fn error_status_from_live_server_is_not_live() -> anyhow::Result<()> {
    let addr = spawn_http_server("500 Internal Server Error").await;
    let client = HttpProber::client_builder()
        .no_proxy()
        .resolve("www.example.com", addr)
        .build()?;
    let mut service = ReconService::new(Arc::new(HttpProber::from_client(client)));
    let options = ReconOptions {
        labels: vec!["www".to_string()],
        host_timeout: Duration::from_millis(500),
        ..ReconOptions::default()
    };

    let result = service.run("example.com".parse()?, &options).await?;

    assert!(result.subdomains().is_empty());
    Ok(())
}
