use crate::cli::Args;
use crate::error::CommandResult;

pub const GREETING: &str = "Hello, World!";

/// Returns the greeting message for the provided arguments.
pub fn message(_args: &Args) -> CommandResult<&'static str> {
    Ok(GREETING)
}
