//! # Recon Target Model
//!
//! Defines the base domain a run is pointed at.
//!
//! Input is normalized before validation:
//! * surrounding whitespace is dropped and the name is lowercased,
//! * a leading `http://` or `https://` is tolerated,
//! * a trailing `/` or root `.` is stripped.
//!
//! Anything that still carries a port, path, query or credentials is rejected,
//! as are labels that are not `[a-z0-9-]`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A validated base domain, e.g. `example.com`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("target domain cannot be empty")]
    Empty,
    #[error("'{0}' is not a bare domain, drop the port, path or query")]
    NotBare(String),
    #[error("'{0}' is longer than 253 characters")]
    TooLong(String),
    #[error("invalid label '{label}' in '{domain}'")]
    InvalidLabel { domain: String, label: String },
}

impl Domain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{label}.{domain}`
    pub fn subdomain(&self, label: &str) -> String {
        format!("{label}.{}", self.0)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Domain {
    type Err = TargetError;

    /// Parses a string into a `Domain`.
    ///
    /// Supported formats:
    /// * **Bare**: "example.com", "Example.COM."
    /// * **URL-ish**: "https://example.com/", "http://example.com"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize(s);

        if name.is_empty() {
            return Err(TargetError::Empty);
        }
        if name.contains(['/', ':', '?', '#', '@']) {
            return Err(TargetError::NotBare(s.trim().to_string()));
        }
        if name.len() > MAX_DOMAIN_LEN {
            return Err(TargetError::TooLong(name));
        }

        if let Some(label) = name.split('.').find(|label| !is_valid_label(label)) {
            return Err(TargetError::InvalidLabel {
                label: label.to_string(),
                domain: name.clone(),
            });
        }

        Ok(Domain(name))
    }
}

fn normalize(s: &str) -> String {
    let lower = s.trim().to_ascii_lowercase();
    let without_scheme = strip_scheme(&lower);
    without_scheme
        .trim_end_matches('/')
        .trim_end_matches('.')
        .to_string()
}

fn strip_scheme(s: &str) -> &str {
    s.strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
        .unwrap_or(s)
}

/// Whether `prefix` can stand in front of a base domain: one or more dotted
/// labels, each passing the same check as the domain's own labels.
pub fn is_valid_subdomain_prefix(prefix: &str) -> bool {
    prefix.len() <= MAX_DOMAIN_LEN && prefix.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
