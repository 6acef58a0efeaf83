//! Shared fixtures for the unit tests.
use guesswork_password::{
    Error, Result, ScoreEstimate, StrengthScorer, COMMON_PASSWORDS,
};

/// Scorer that is always unavailable.
pub struct UnavailableScorer;

impl StrengthScorer for UnavailableScorer {
    fn estimate(&self, _password: &str) -> Result<ScoreEstimate> {
        Err(Error::Scoring("service unavailable".to_owned()))
    }
}

/// Common passwords in sorted order.
pub fn common_sorted() -> Vec<String> {
    let mut common: Vec<String> =
        COMMON_PASSWORDS.iter().map(|s| s.to_string()).collect();
    common.sort();
    common
}
