use colored::Colorize;
use guesswork_password::{StrengthReport, Wordlist};
use terminal_banner::{Banner, Padding};

pub(crate) mod readline;

pub use guesswork_cli_helpers::messages;

pub(crate) const EMPTY_PASSWORD: &str = "Please enter a password to analyze.";
pub(crate) const NO_SEED_INPUTS: &str =
    "No seed inputs provided; the wordlist only contains common passwords.";

/// Print a strength report for the terminal.
pub(crate) fn print_report(report: &StrengthReport) {
    let banner = Banner::new()
        .padding(Padding::one())
        .text(
            format!("Password strength score (0-4): {}", report.score)
                .into(),
        )
        .text(
            format!(
                "Estimated crack time (offline, slow hashing): {}",
                report.crack_time
            )
            .into(),
        )
        .render();
    println!("{}", banner);

    for warning in &report.warnings {
        println!("{}", warning.yellow());
    }

    if !report.suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!(" - {}", suggestion);
        }
    }
}

/// Print a capped view of a wordlist.
pub(crate) fn print_wordlist(wordlist: &Wordlist, offset: usize, limit: usize) {
    let preview = wordlist.preview(offset, limit);
    println!("Generated wordlist with {} entries:", wordlist.len());
    println!();
    for entry in preview.shown {
        println!("{}", entry);
    }
    if preview.remaining > 0 {
        println!();
        println!(
            "...and {} more entries not displayed.",
            preview.remaining
        );
    }
}

/// Print every wordlist entry, one per line.
pub(crate) fn print_all(wordlist: &Wordlist) {
    for entry in wordlist {
        println!("{}", entry);
    }
}
