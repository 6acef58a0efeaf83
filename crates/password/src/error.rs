use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when analysis is requested without a password.
    #[error("password must not be empty")]
    EmptyPassword,

    /// Error generated when the strength scorer fails.
    #[error("strength scoring failed: {0}")]
    Scoring(String),
}
