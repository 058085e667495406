use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

pub mod cli;
pub mod commands;
pub mod error;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate and integration tests.
///
/// Parsing happens inside clap, so unknown arguments, `--help`, and
/// `--version` terminate the process before dispatch. Everything that reaches
/// `commands::execute` resolves to a message on stdout plus an exit code.
pub fn run() -> Result<ExitCode> {
    init_tracing();

    let args = cli::Args::parse();
    tracing::debug!(greet = args.greet, "dispatching invocation");

    let outcome = commands::execute(&args).context("failed to execute command")?;
    println!("{}", outcome.message);
    Ok(ExitCode::from(outcome.exit_code))
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        // Diagnostics go to stderr so stdout stays exactly the contractual text.
        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
