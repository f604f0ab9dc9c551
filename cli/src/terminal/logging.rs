//! Console rendering of `tracing` events.
//!
//! The engine only emits events. This module decides what they look like:
//! the dedicated targets from [`subprobe_common::logging`] pick the prefix, and
//! plain events fall back to one prefix per level.

use colored::*;
use subprobe_common::config::Config;
use subprobe_common::logging::{FOUND_TARGET, PRINT_TARGET, SUCCESS_TARGET};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use super::spinner::SpinnerWriter;

pub struct ReconFormatter;

impl<S, N> FormatEvent<S, N> for ReconFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let symbol: ColoredString = prefix(meta.target(), *meta.level());
            write!(writer, "{symbol} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn prefix(target: &str, level: Level) -> ColoredString {
    match target {
        SUCCESS_TARGET => "[+]".green().bold(),
        FOUND_TARGET => "[!]".yellow().bold(),
        _ => match level {
            Level::TRACE => "[ ]".dimmed(),
            Level::DEBUG => "[?]".blue(),
            Level::INFO => "[*]".cyan().bold(),
            Level::WARN => "[!]".yellow().bold(),
            Level::ERROR => "[!]".red().bold(),
        },
    }
}

/// Default directive when `RUST_LOG` is unset: dependencies stay at `warn`,
/// our own crates log at `info`, or `debug` with `-v`.
fn default_directive(cfg: &Config) -> String {
    let level: &str = if cfg.verbose { "debug" } else { "info" };
    format!("warn,subprobe={level},subprobe_core={level},subprobe_cli={level}")
}

pub fn init_logging(cfg: &Config) {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(cfg)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(ReconFormatter)
        .with_writer(|| SpinnerWriter)
        .init();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
