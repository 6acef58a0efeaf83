//! Append common suffixes to candidate words.
use crate::COMMON_SUFFIXES;

/// Each word unchanged followed by the word joined with every suffix.
///
/// Output is grouped per word in input order; duplicates are kept.
pub fn append_suffixes<S, T>(words: &[S], suffixes: &[T]) -> Vec<String>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut extended = Vec::with_capacity(words.len() * (suffixes.len() + 1));
    for word in words {
        let word = word.as_ref();
        extended.push(word.to_owned());
        for suffix in suffixes {
            extended.push(format!("{}{}", word, suffix.as_ref()));
        }
    }
    extended
}

/// Append the builtin [COMMON_SUFFIXES].
pub fn append_common_suffixes<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    append_suffixes(words, COMMON_SUFFIXES)
}
