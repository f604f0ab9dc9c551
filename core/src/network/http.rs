//! # HTTP Prober
//!
//! The production [`Prober`]: one reqwest client shared by every probe.
//!
//! Redirects are **not** followed (a `301` is reported as `301`) and TLS
//! certificates are not verified, since recon targets routinely serve
//! self-signed or mismatched certificates.

use std::error::Error as StdError;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method, redirect};
use subprobe_common::network::probe::{ProbeError, ProbeMethod, ProbeRequest, ProbeResult, Prober};
use tokio::time::timeout;

const USER_AGENT: &str = concat!("subprobe/", env!("CARGO_PKG_VERSION"));

pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> anyhow::Result<Self> {
        let client: Client = Self::client_builder()
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self::from_client(client))
    }

    /// Client settings every probe relies on. Exposed so callers can layer
    /// their own options (proxies, resolvers) on top.
    pub fn client_builder() -> ClientBuilder {
        Client::builder()
            .redirect(redirect::Policy::none())
            .danger_accept_invalid_certs(true)
            .user_agent(USER_AGENT)
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, request: ProbeRequest) -> ProbeResult {
        let method: Method = match request.method {
            ProbeMethod::Get => Method::GET,
            ProbeMethod::Head => Method::HEAD,
        };
        let pending = self.client.request(method, request.url()).send();

        match timeout(request.timeout, pending).await {
            Ok(Ok(response)) => {
                let status: u16 = response.status().as_u16();
                ProbeResult::responded(request, status)
            }
            Ok(Err(err)) => {
                let error: ProbeError = classify(&err, request.timeout);
                ProbeResult::failed(request, error)
            }
            Err(_elapsed) => {
                let error = ProbeError::Timeout(request.timeout);
                ProbeResult::failed(request, error)
            }
        }
    }
}

fn classify(err: &reqwest::Error, limit: Duration) -> ProbeError {
    if err.is_timeout() {
        ProbeError::Timeout(limit)
    } else if err.is_connect() {
        ProbeError::Connect(root_cause(err))
    } else {
        ProbeError::Request(root_cause(err))
    }
}

fn root_cause(err: &reqwest::Error) -> String {
    let mut cause: &(dyn StdError + 'static) = err;
    while let Some(source) = cause.source() {
        cause = source;
    }
    cause.to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
