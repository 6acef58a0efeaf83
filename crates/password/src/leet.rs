//! Leetspeak substitution of candidate words.
use std::{collections::BTreeMap, sync::LazyLock};

/// Builtin substitutions keyed by lowercase letter.
///
/// The first entry of each list is the letter itself.
pub const LEET_MAP: &[(char, &[&str])] = &[
    ('a', &["a", "@", "4"]),
    ('e', &["e", "3"]),
    ('i', &["i", "1", "!"]),
    ('o', &["o", "0"]),
    ('s', &["s", "$", "5"]),
    ('t', &["t", "7"]),
];

static BUILTIN: LazyLock<SubstitutionTable> = LazyLock::new(|| {
    SubstitutionTable::new(LEET_MAP.iter().map(|(key, options)| {
        (*key, options.iter().map(|s| s.to_string()).collect())
    }))
});

/// Interchangeable characters for each letter.
///
/// Lookups are case insensitive; a character without an entry
/// can only be substituted by itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: BTreeMap<char, Vec<String>>,
}

impl SubstitutionTable {
    /// Create a substitution table.
    ///
    /// Keys are lowercased and every list is guaranteed to contain
    /// the key itself so a word always expands to include itself.
    pub fn new(
        entries: impl IntoIterator<Item = (char, Vec<String>)>,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, mut options)| {
                let key = key.to_ascii_lowercase();
                let identity = key.to_string();
                if !options.contains(&identity) {
                    options.insert(0, identity);
                }
                (key, options)
            })
            .collect();
        Self { entries }
    }

    /// Shared builtin leetspeak table.
    pub fn builtin() -> &'static SubstitutionTable {
        &BUILTIN
    }

    /// Alternatives for a character.
    ///
    /// The identity option keeps the case of the input character.
    pub fn alternatives(&self, c: char) -> Vec<String> {
        let key = c.to_ascii_lowercase();
        match self.entries.get(&key) {
            Some(options) => options
                .iter()
                .map(|option| {
                    if option.len() == key.len_utf8()
                        && option.starts_with(key)
                    {
                        c.to_string()
                    } else {
                        option.clone()
                    }
                })
                .collect(),
            None => vec![c.to_string()],
        }
    }

    /// Number of variants [SubstitutionTable::expand] yields for a word.
    ///
    /// Saturates rather than overflowing for very long words.
    pub fn expansion_count(&self, word: &str) -> usize {
        word.chars().fold(1usize, |acc, c| {
            let options = self
                .entries
                .get(&c.to_ascii_lowercase())
                .map(|o| o.len())
                .unwrap_or(1);
            acc.saturating_mul(options)
        })
    }

    /// Every string formed by independently substituting each
    /// character of the word with one of its alternatives.
    ///
    /// Variants are ordered with the first position varying slowest.
    /// An empty word yields a single empty variant.
    pub fn expand(&self, word: &str) -> Vec<String> {
        let mut variants = vec![String::with_capacity(word.len())];
        for c in word.chars() {
            let options = self.alternatives(c);
            let mut next = Vec::with_capacity(
                variants.len().saturating_mul(options.len()),
            );
            for prefix in &variants {
                for option in &options {
                    let mut candidate =
                        String::with_capacity(prefix.len() + option.len());
                    candidate.push_str(prefix);
                    candidate.push_str(option);
                    next.push(candidate);
                }
            }
            variants = next;
        }
        variants
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Expand a word using the builtin table.
pub fn leetspeak_variants(word: &str) -> Vec<String> {
    SubstitutionTable::builtin().expand(word)
}
