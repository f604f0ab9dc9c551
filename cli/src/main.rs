mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, EXIT_CANCELLED, EXIT_FAILURE, recon};
use subprobe_common::config::Config;
use subprobe_common::{error, warn};
use subprobe_core::recon::RunOutcome;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    match recon::recon(&commands, &cfg).await {
        Ok(RunOutcome::Completed(_)) => ExitCode::SUCCESS,
        Ok(RunOutcome::Cancelled) => {
            warn!("Cancelled");
            ExitCode::from(EXIT_CANCELLED)
        }
        Err(e) => {
            error!("Error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
