//! Peg CLI - search every starting hole of a triangular peg solitaire board

mod cli;
mod config;
mod error;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use peg_solver::Dispatcher;

fn main() {
    // Usage errors exit here with clap's message and usage text
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_logging(&config);

    let formatter = OutputFormatter::new(config.stats);
    let dispatcher = Dispatcher::new(config.size, config.objective, Some(config.thread_count))?;
    let outcome = dispatcher.run()?;

    formatter.print_result(outcome.winner())?;
    formatter.print_summary(&outcome)?;

    Ok(())
}

/// Send logs to stderr; `RUST_LOG` overrides the `-v` level
fn init_logging(config: &Config) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .format_timestamp_millis()
        .init();
}
