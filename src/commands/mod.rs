pub mod greet;

use crate::cli::Args;
use crate::error::CommandResult;

/// Text printed when the invocation carries no recognized flag.
pub const NO_ARGS_HINT: &str =
    "No arguments provided. Use --greet to display a greeting message.";

/// Result of dispatching one invocation: what to print and how to exit.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub message: &'static str,
    pub exit_code: u8,
}

/// Dispatches execution to the appropriate command handler.
///
/// The bare invocation is not a usage error; it reports the hint on stdout and
/// exits 1, distinct from clap's exit 2 for unrecognized arguments.
pub fn execute(args: &Args) -> CommandResult<Outcome> {
    if args.greet {
        Ok(Outcome {
            message: greet::message(args)?,
            exit_code: 0,
        })
    } else {
        Ok(Outcome {
            message: NO_ARGS_HINT,
            exit_code: 1,
        })
    }
}
