//! Command line interface for password strength analysis and
//! targeted wordlist generation.

/// Target for tracing macros.
///
/// Used so that error messages are succinct rather than
/// including the full module path.
pub const TARGET: &str = "guesswork";

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub(crate) mod helpers;
pub mod session;

pub use error::Error;
pub use guesswork_cli_helpers::CommandTree;

/// Result type for the executable.
pub type Result<T> = std::result::Result<T, error::Error>;
