//! Password strength analysis.
//!
//! Scoring is delegated to a [StrengthScorer]; the production scorer
//! is [Zxcvbn]. The analysis formats the estimated crack time and
//! appends heuristic warnings to whatever the scorer reports.
use crate::{Error, Result, TARGET};
use serde::{Deserialize, Serialize};
use zxcvbn::time_estimates::CrackTimeSeconds;

/// Passwords shorter than this number of characters are flagged.
pub const MIN_LENGTH: usize = 12;

/// Highest score a scorer may report.
pub const MAX_SCORE: u8 = 4;

const SHORT_WARNING: &str = "Password is shorter than 12 characters; longer passwords are generally stronger.";
const CASE_WARNING: &str =
    "Password should include a mix of uppercase and lowercase letters.";
const DIGITS_WARNING: &str = "Password should not be only digits.";

const SECONDS_PER_MINUTE: f64 = 60.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Output of an external strength scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEstimate {
    /// Coarse strength from zero (weakest) to four (strongest).
    pub score: u8,
    /// Warning about the password, if any.
    pub warning: Option<String>,
    /// Suggestions for a stronger password.
    pub suggestions: Vec<String>,
    /// Estimated seconds to crack offline with slow hashing
    /// at ten thousand guesses per second.
    pub offline_slow_hashing_seconds: f64,
}

/// Capability to score the strength of a password.
pub trait StrengthScorer {
    /// Estimate the strength of a password.
    fn estimate(&self, password: &str) -> Result<ScoreEstimate>;
}

/// Scorer backed by the zxcvbn estimator.
#[derive(Debug, Default, Clone)]
pub struct Zxcvbn {
    user_inputs: Vec<String>,
}

impl Zxcvbn {
    /// Create a scorer without user inputs.
    pub fn new() -> Self {
        Default::default()
    }

    /// Create a scorer that penalizes passwords containing
    /// any of the given user inputs.
    pub fn with_user_inputs(
        user_inputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            user_inputs: user_inputs.into_iter().map(Into::into).collect(),
        }
    }
}

impl StrengthScorer for Zxcvbn {
    fn estimate(&self, password: &str) -> Result<ScoreEstimate> {
        let inputs: Vec<&str> =
            self.user_inputs.iter().map(String::as_str).collect();
        let entropy = zxcvbn::zxcvbn(password, &inputs);

        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback
                    .suggestions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        let seconds = match entropy
            .crack_times()
            .offline_slow_hashing_1e4_per_second()
        {
            CrackTimeSeconds::Integer(value) => value as f64,
            CrackTimeSeconds::Float(value) => value,
        };

        Ok(ScoreEstimate {
            score: u8::from(entropy.score()),
            warning,
            suggestions,
            offline_slow_hashing_seconds: seconds,
        })
    }
}

/// Result of analyzing a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    /// Score from zero (weakest) to four (strongest).
    pub score: u8,
    /// Scorer warning followed by heuristic warnings.
    pub warnings: Vec<String>,
    /// Scorer suggestions.
    pub suggestions: Vec<String>,
    /// Human readable offline slow hashing crack time.
    pub crack_time: String,
}

/// Analyze the strength of a password.
///
/// Fails when the password is empty or the scorer fails; no
/// score is ever fabricated.
pub fn analyze_password_strength<S: StrengthScorer + ?Sized>(
    scorer: &S,
    password: &str,
) -> Result<StrengthReport> {
    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }

    let estimate = scorer.estimate(password)?;
    if estimate.score > MAX_SCORE {
        return Err(Error::Scoring(format!(
            "score {} is out of range",
            estimate.score
        )));
    }

    tracing::debug!(
        target: TARGET,
        score = estimate.score,
        seconds = estimate.offline_slow_hashing_seconds,
        "estimate"
    );

    let mut warnings = Vec::new();
    if let Some(warning) = estimate.warning.filter(|w| !w.is_empty()) {
        warnings.push(format!("Warning: {}", warning));
    }
    if password.chars().count() < MIN_LENGTH {
        warnings.push(SHORT_WARNING.to_owned());
    }
    if is_single_case(password) {
        warnings.push(CASE_WARNING.to_owned());
    }
    if password.chars().all(char::is_numeric) {
        warnings.push(DIGITS_WARNING.to_owned());
    }

    Ok(StrengthReport {
        score: estimate.score,
        warnings,
        suggestions: estimate.suggestions,
        crack_time: format_crack_time(estimate.offline_slow_hashing_seconds),
    })
}

/// Password has cased characters and all of them share one case.
fn is_single_case(password: &str) -> bool {
    let lower = password.chars().any(char::is_lowercase);
    let upper = password.chars().any(char::is_uppercase);
    lower != upper
}

/// Format a duration in seconds using the largest fitting unit.
///
/// Units below a year are truncated to an integer; years are
/// shown with two decimal places.
pub fn format_crack_time(seconds: f64) -> String {
    if seconds < SECONDS_PER_MINUTE {
        return format!("{} seconds", seconds as u64);
    }
    let minutes = seconds / SECONDS_PER_MINUTE;
    if minutes < MINUTES_PER_HOUR {
        return format!("{} minutes", minutes as u64);
    }
    let hours = minutes / MINUTES_PER_HOUR;
    if hours < HOURS_PER_DAY {
        return format!("{} hours", hours as u64);
    }
    let days = hours / HOURS_PER_DAY;
    if days < DAYS_PER_YEAR {
        return format!("{} days", days as u64);
    }
    format!("{:.2} years", days / DAYS_PER_YEAR)
}
