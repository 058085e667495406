use clap::Parser;

/// Command-line arguments for the sanity CLI.
///
/// Unrecognized tokens never reach the dispatcher: clap rejects them with a
/// usage message on stderr and exit code 2.
#[derive(Debug, Parser)]
#[command(
    name = "sanity",
    version,
    about = "Sample command-line tool for sanity testing.",
    long_about = None
)]
pub struct Args {
    /// Display a greeting message.
    #[arg(long)]
    pub greet: bool,
}
