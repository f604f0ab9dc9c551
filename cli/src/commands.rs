pub mod recon;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use subprobe_common::config::{DEFAULT_ENDPOINT_HOST_CAP, DEFAULT_THREADS};
use subprobe_common::network::probe::HOST_PROBE_TIMEOUT;

pub const EXIT_FAILURE: u8 = 1;
/// Interrupts share the generic failure status.
pub const EXIT_CANCELLED: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "subprobe", version)]
#[command(about = "Subdomain and endpoint reconnaissance over HTTP.")]
pub struct CommandLine {
    /// Target base domain, e.g. example.com
    #[arg(short, long)]
    pub domain: String,

    /// Write the results as JSON to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also probe common endpoints on the first live hosts
    #[arg(long)]
    pub all_checks: bool,

    /// Maximum number of probes in flight
    #[arg(short, long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Read subdomain labels from this file, one per line
    #[arg(short, long)]
    pub wordlist: Option<PathBuf>,

    /// Host probe timeout in milliseconds
    #[arg(long, default_value_t = HOST_PROBE_TIMEOUT.as_millis() as u64)]
    pub timeout: u64,

    /// Number of live hosts that get endpoint probes
    #[arg(long, default_value_t = DEFAULT_ENDPOINT_HOST_CAP)]
    pub max_hosts: usize,

    /// Less output: -q drops banner and headers, -qq also the summary
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug events
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
