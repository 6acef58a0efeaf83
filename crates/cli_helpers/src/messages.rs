//! Terminal messages.
use colored::Colorize;

const ERROR: &str = "Error:";

/// Print an informational message.
pub fn info(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().cyan());
}

/// Print an error message for failure.
pub fn fail(msg: impl AsRef<str>) {
    let out = format!("{} {}", ERROR.red(), msg.as_ref());
    println!("{}", out);
}
