use std::io::Write;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to write greeting: {0}")]
    Output(#[from] std::io::Error),
}

fn init_tracing() {
    // stdout carries the greeting only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    debug!(name = ?cli.name(), ignored = cli.ignored(), "greeting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    hello_core::write_greeting(&mut out, cli.name())?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse_args(std::env::args_os());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
