use thiserror::Error;

pub type CommandResult<T> = Result<T, SanityError>;

#[derive(Debug, Error)]
pub enum SanityError {
    #[error("greeting is currently unavailable")]
    GreetingUnavailable,
}
