//! # Probe Model
//!
//! A probe is one bounded-timeout HTTP request plus its classification.
//!
//! [`Prober`] is the port the engine fans out over. Implementations never
//! return an error: a request that got no response comes back as
//! [`ProbeOutcome::Failed`], so "checked and not live" (a 4xx/5xx status)
//! stays distinguishable from "never got an answer".

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub const HOST_PROBE_TIMEOUT: Duration = Duration::from_millis(3_000);
pub const ENDPOINT_PROBE_TIMEOUT: Duration = Duration::from_millis(2_000);

/// Statuses below this value count as live, redirects included.
pub const LIVE_STATUS_CEILING: u16 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Http, Scheme::Https];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    /// Host liveness checks, so status bodies and redirects stay inspectable.
    Get,
    /// Endpoint checks, the body is irrelevant.
    Head,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub scheme: Scheme,
    pub host: String,
    /// Empty for host checks, always starts with `/` otherwise.
    pub path: String,
    pub method: ProbeMethod,
    pub timeout: Duration,
}

impl ProbeRequest {
    /// `GET {scheme}://{host}` with the host-check timeout.
    pub fn host_check(scheme: Scheme, host: impl Into<String>) -> Self {
        Self {
            scheme,
            host: host.into(),
            path: String::new(),
            method: ProbeMethod::Get,
            timeout: HOST_PROBE_TIMEOUT,
        }
    }

    /// `HEAD https://{host}{path}` with the endpoint-check timeout.
    pub fn endpoint_check(host: impl Into<String>, path: &str) -> Self {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            scheme: Scheme::Https,
            host: host.into(),
            path,
            method: ProbeMethod::Head,
            timeout: ENDPOINT_PROBE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.host, self.path)
    }
}

/// Why a probe got no HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request failed: {0}")]
    Request(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Responded { status: u16 },
    Failed(ProbeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub request: ProbeRequest,
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn responded(request: ProbeRequest, status: u16) -> Self {
        Self {
            request,
            outcome: ProbeOutcome::Responded { status },
        }
    }

    pub fn failed(request: ProbeRequest, error: ProbeError) -> Self {
        Self {
            request,
            outcome: ProbeOutcome::Failed(error),
        }
    }

    /// The first status code the target answered with, if any.
    pub fn status(&self) -> Option<u16> {
        match self.outcome {
            ProbeOutcome::Responded { status } => Some(status),
            ProbeOutcome::Failed(_) => None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live_status().is_some()
    }

    /// The status, but only when it counts as live.
    pub fn live_status(&self) -> Option<u16> {
        self.status().filter(|status| is_live_status(*status))
    }

    pub fn host(&self) -> &str {
        &self.request.host
    }

    pub fn scheme(&self) -> Scheme {
        self.request.scheme
    }

    pub fn url(&self) -> String {
        self.request.url()
    }
}

pub fn is_live_status(status: u16) -> bool {
    status < LIVE_STATUS_CEILING
}

/// Performs a single probe.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Sends `request` once and classifies the answer. Transport failures are
    /// data, never errors.
    async fn probe(&self, request: ProbeRequest) -> ProbeResult;
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
