//! State for the interactive shell.
use guesswork_password::{generate_best_wordlist, SeedInput, Wordlist};

use crate::{Error, Result, TARGET};

/// Holds the most recently generated wordlist until it is
/// replaced or cleared.
#[derive(Debug, Default)]
pub struct Session {
    wordlist: Option<Wordlist>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Default::default()
    }

    /// Generate a wordlist replacing any previous wordlist.
    pub fn generate(&mut self, seeds: &SeedInput) -> &Wordlist {
        let wordlist = generate_best_wordlist(seeds);
        tracing::debug!(
            target: TARGET,
            entries = wordlist.len(),
            replaced = self.wordlist.is_some(),
            "session::generate"
        );
        self.wordlist.insert(wordlist)
    }

    /// Current wordlist.
    pub fn wordlist(&self) -> Result<&Wordlist> {
        self.wordlist.as_ref().ok_or(Error::NoWordlist)
    }

    /// Discard the current wordlist.
    ///
    /// Returns whether a wordlist was discarded.
    pub fn clear(&mut self) -> bool {
        self.wordlist.take().is_some()
    }
}
