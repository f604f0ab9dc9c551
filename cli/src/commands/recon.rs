use std::future::Future;
use std::io::{self, Write};
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use subprobe_common::config::{Config, ReconOptions};
use subprobe_common::network::probe::{ENDPOINT_PROBE_TIMEOUT, Prober};
use subprobe_common::network::target::Domain;
use subprobe_common::report::ReconResult;
use subprobe_common::{success, wordlist};
use subprobe_core::export;
use subprobe_core::network::http::HttpProber;
use subprobe_core::recon::{ReconService, RunOutcome};
use tracing::debug;

use super::CommandLine;
use crate::mprint;
use crate::terminal::{colors, print, spinner};

pub async fn recon(args: &CommandLine, cfg: &Config) -> anyhow::Result<RunOutcome> {
    let domain: Domain = args.domain.parse()?;
    let options: ReconOptions = build_options(args)?;
    let prober = Arc::new(HttpProber::new()?);

    execute(prober, domain, options, args.output.as_deref(), cfg, shutdown_signal()).await
}

pub(crate) fn build_options(args: &CommandLine) -> anyhow::Result<ReconOptions> {
    let labels: Vec<String> = match &args.wordlist {
        Some(path) => wordlist::load_labels(path)?,
        None => wordlist::default_labels(),
    };

    let options = ReconOptions {
        concurrency: args.threads,
        check_endpoints: args.all_checks,
        host_timeout: Duration::from_millis(args.timeout),
        endpoint_timeout: ENDPOINT_PROBE_TIMEOUT,
        endpoint_host_cap: args.max_hosts,
        labels,
        paths: wordlist::default_paths(),
    };
    options.validate()?;

    Ok(options)
}

pub(crate) async fn execute<S>(
    prober: Arc<dyn Prober>,
    domain: Domain,
    options: ReconOptions,
    output: Option<&Path>,
    cfg: &Config,
    shutdown: S,
) -> anyhow::Result<RunOutcome>
where
    S: Future<Output = ()>,
{
    print_settings(&domain, &options, output, cfg);
    print::header("subdomain enumeration", cfg.quiet);

    tokio::pin!(shutdown);
    let mut service = ReconService::new(prober).with_progress(Arc::new(spinner::report_progress));
    let start_time: Instant = Instant::now();
    let outcome: RunOutcome = service.run_until(domain, &options, shutdown.as_mut()).await?;
    spinner::get_spinner().finish_and_clear();

    let RunOutcome::Completed(result) = outcome else {
        return Ok(RunOutcome::Cancelled);
    };

    deliver(&result, output, cfg)?;

    // The Ctrl-C listener stays installed after the run, an interrupt during
    // delivery is only seen here.
    if interrupted(shutdown.as_mut()).await {
        if let Some(path) = output {
            std::fs::remove_file(path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
            debug!("removed {} after interrupt", path.display());
        }
        return Ok(RunOutcome::Cancelled);
    }

    print_summary(&result, start_time.elapsed(), cfg);
    Ok(RunOutcome::Completed(result))
}

/// `true` once `shutdown` has fired, without waiting for it.
async fn interrupted<S>(shutdown: Pin<&mut S>) -> bool
where
    S: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = shutdown => true,
        _ = std::future::ready(()) => false,
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        debug!("cannot listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
}

fn deliver(result: &ReconResult, output: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            export::write_json(result, path)?;
            success!("Results saved to {}", path.display());
        }
        None => {
            print::header("results", cfg.quiet);
            let json: String = export::to_json(result)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write results to stdout")?;
        }
    }
    Ok(())
}

fn print_settings(domain: &Domain, options: &ReconOptions, output: Option<&Path>, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::header("configuration", cfg.quiet);
    print::align_keys(&["Domain", "Threads", "Labels", "Endpoints", "Output"]);
    print::aligned_line("Domain", domain.as_str());
    print::aligned_line("Threads", options.concurrency.to_string());
    print::aligned_line("Labels", options.labels.len().to_string());

    let endpoints: String = if options.check_endpoints {
        format!("{} paths on up to {} hosts", options.paths.len(), options.endpoint_host_cap)
    } else {
        "off".to_string()
    };
    print::aligned_line("Endpoints", endpoints);

    let destination: String = match output {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };
    print::aligned_line("Output", destination);
}

fn print_summary(result: &ReconResult, total_time: Duration, cfg: &Config) {
    let subdomains: ColoredString = format!("{} live subdomains", result.total_subs())
        .bold()
        .green();
    let endpoints: ColoredString = format!("{} endpoints", result.endpoints().len())
        .bold()
        .color(colors::ACCENT);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Recon complete: {subdomains}, {endpoints} in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        1 => {
            mprint!();
            success!("{}", output)
        }
        _ => {}
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
