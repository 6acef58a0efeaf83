//! Build targeted wordlists from personal seed facts.
use crate::{
    case::case_variants, leet::SubstitutionTable, suffix::append_suffixes,
    COMMON_PASSWORDS, COMMON_SUFFIXES, TARGET,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Personal facts used as the basis for guesses.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeedInput {
    /// Name of the person.
    pub name: Option<String>,
    /// Date of birth, typically `YYYYMMDD`.
    pub date_of_birth: Option<String>,
    /// Name of a pet.
    pub pet_name: Option<String>,
    /// A favorite word.
    pub favorite_word: Option<String>,
}

impl SeedInput {
    /// Trimmed seed words that are not empty, in field order.
    pub fn words(&self) -> Vec<&str> {
        [
            &self.name,
            &self.date_of_birth,
            &self.pet_name,
            &self.favorite_word,
        ]
        .into_iter()
        .filter_map(|value| value.as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect()
    }

    /// Determine if no usable seed words were supplied.
    pub fn is_empty(&self) -> bool {
        self.words().is_empty()
    }
}

impl From<[&str; 4]> for SeedInput {
    fn from(value: [&str; 4]) -> Self {
        let [name, date_of_birth, pet_name, favorite_word] =
            value.map(|s| Some(s.to_owned()));
        Self {
            name,
            date_of_birth,
            pet_name,
            favorite_word,
        }
    }
}

/// Deduplicated candidate passwords in ascending order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Wordlist(Vec<String>);

impl Wordlist {
    fn from_set(set: HashSet<String>) -> Self {
        let mut entries: Vec<String> = set.into_iter().collect();
        entries.sort_unstable();
        Self(entries)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Determine if the wordlist is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Entries as a sorted slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Determine if the wordlist contains a candidate.
    pub fn contains(&self, candidate: &str) -> bool {
        self.0
            .binary_search_by(|entry| entry.as_str().cmp(candidate))
            .is_ok()
    }

    /// Capped view for display starting at an offset.
    pub fn preview(&self, offset: usize, limit: usize) -> WordlistPreview<'_> {
        let start = offset.min(self.len());
        let end = start.saturating_add(limit).min(self.len());
        WordlistPreview {
            shown: &self.0[start..end],
            remaining: self.len() - end,
        }
    }

    /// Consume the wordlist and return the sorted entries.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl IntoIterator for Wordlist {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Wordlist {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Slice of a wordlist for display.
#[derive(Debug)]
pub struct WordlistPreview<'a> {
    /// Entries to display.
    pub shown: &'a [String],
    /// Count of entries after the displayed slice.
    pub remaining: usize,
}

/// Expands seed inputs into a wordlist.
#[derive(Debug, Clone)]
pub struct WordlistBuilder {
    table: SubstitutionTable,
    suffixes: Vec<String>,
    common: Vec<String>,
}

impl Default for WordlistBuilder {
    fn default() -> Self {
        Self {
            table: SubstitutionTable::default(),
            suffixes: COMMON_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            common: COMMON_PASSWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WordlistBuilder {
    /// Create a builder using the builtin tables.
    pub fn new() -> Self {
        Default::default()
    }

    /// Use a different substitution table.
    pub fn table(mut self, table: SubstitutionTable) -> Self {
        self.table = table;
        self
    }

    /// Use different suffixes.
    pub fn suffixes(
        mut self,
        suffixes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Use a different set of common passwords.
    pub fn common_passwords(
        mut self,
        common: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.common = common.into_iter().map(Into::into).collect();
        self
    }

    /// Generate the wordlist for the seed inputs.
    ///
    /// The result always includes the common passwords; with
    /// no seed words it is exactly the common passwords.
    pub fn build(&self, seeds: &SeedInput) -> Wordlist {
        let mut wordlist: HashSet<String> =
            self.common.iter().cloned().collect();

        for word in seeds.words() {
            let variants = case_variants(word);
            let reversed = variants
                .clone()
                .map(|variant| variant.chars().rev().collect::<String>());

            for variant in variants.iter().chain(reversed.iter()) {
                tracing::debug!(
                    target: TARGET,
                    variant = %variant,
                    expansions = self.table.expansion_count(variant),
                    "expand"
                );
                let leet = self.table.expand(variant);
                wordlist.extend(append_suffixes(&leet, &self.suffixes));
            }
        }

        tracing::debug!(
            target: TARGET,
            seeds = seeds.words().len(),
            entries = wordlist.len(),
            "wordlist"
        );

        Wordlist::from_set(wordlist)
    }
}

/// Generate a wordlist using the builtin tables.
pub fn generate_best_wordlist(seeds: &SeedInput) -> Wordlist {
    WordlistBuilder::new().build(seeds)
}
