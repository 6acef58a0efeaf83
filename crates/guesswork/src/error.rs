use rustyline::error::ReadlineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("path {0} is not a file")]
    NotFile(PathBuf),

    #[error("no wordlist has been generated")]
    NoWordlist,

    #[error(transparent)]
    Password(#[from] guesswork_password::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Readline(#[from] ReadlineError),

    #[error(transparent)]
    ShellWords(#[from] shell_words::ParseError),
}

impl Error {
    /// Determine if this error was caused by the user
    /// interrupting or closing an input prompt.
    pub fn is_interrupted(&self) -> bool {
        matches!(
            self,
            Error::Readline(ReadlineError::Interrupted)
                | Error::Readline(ReadlineError::Eof)
        )
    }
}
