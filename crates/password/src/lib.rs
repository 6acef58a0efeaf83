#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Targeted wordlist generation and password strength analysis.
//!
//! Seed facts such as a name or a date of birth are expanded into
//! plausible password guesses using case variation, leetspeak
//! substitution, common suffixes and reversal. Strength analysis
//! delegates scoring to [zxcvbn](https://docs.rs/zxcvbn) and layers a
//! few heuristic checks on top.

pub mod case;
mod error;
pub mod leet;
pub mod strength;
pub mod suffix;
pub mod wordlist;

pub use error::Error;
pub use leet::SubstitutionTable;
pub use strength::{
    analyze_password_strength, format_crack_time, ScoreEstimate,
    StrengthReport, StrengthScorer, Zxcvbn,
};
pub use wordlist::{
    generate_best_wordlist, SeedInput, Wordlist, WordlistBuilder,
    WordlistPreview,
};

pub use zxcvbn;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Target for tracing macros.
pub(crate) const TARGET: &str = "guesswork::password";

/// Suffixes appended to every candidate.
pub const COMMON_SUFFIXES: &[&str] =
    &["123", "!", "2025", "2024", "2023", "321", "007"];

/// Well known weak passwords included in every wordlist.
pub const COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "password",
    "123456789",
    "12345",
    "12345678",
    "qwerty",
    "abc123",
    "football",
    "monkey",
    "letmein",
    "dragon",
    "111111",
    "baseball",
    "iloveyou",
    "master",
    "sunshine",
    "ashley",
    "bailey",
    "passw0rd",
    "shadow",
];
