// VigCrack Type Definitions
// Core types for candidate verdicts and search outcomes

use thiserror::Error;

/// Verdict for a single candidate key
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The decoded text did not satisfy the success policy
    NoMatch,

    /// The decoded text satisfied the success policy
    /// `score` carries the language probability under the LanguageMatch policy,
    /// and is `None` for known-string matches
    Match { score: Option<f64> },
}

/// Result of evaluating one candidate key against the ciphertext
///
/// Produced fresh per candidate and never mutated; the decoded text is only
/// retained as long as the sink needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The candidate key as it appeared in the wordlist (trimmed)
    pub key: String,

    /// The deciphered text, same length and shape as the ciphertext
    pub decoded: String,

    /// Match or no-match
    pub verdict: Verdict,
}

impl Evaluation {
    /// Whether this candidate satisfied the success policy
    pub fn is_match(&self) -> bool {
        matches!(self.verdict, Verdict::Match { .. })
    }

    /// The language match score, if any
    pub fn score(&self) -> Option<f64> {
        match self.verdict {
            Verdict::Match { score } => score,
            Verdict::NoMatch => None,
        }
    }
}

/// Terminal state of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The candidate sequence was exhausted normally
    Completed,

    /// Cancellation was requested; iteration stopped after the current candidate
    Interrupted,
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStatus::Completed => write!(f, "completed"),
            SearchStatus::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// Summary returned by the search driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    /// How the run ended
    pub status: SearchStatus,

    /// Number of keys actually evaluated (blank and invalid entries excluded)
    pub keys_tried: usize,

    /// Number of matches streamed to the sink
    pub matches_found: usize,
}

/// Crack errors
#[derive(Debug, Clone, Error)]
pub enum CrackError {
    #[error("invalid key '{key}': contains no alphabetic characters")]
    InvalidKey { key: String },

    #[error("wordlist contains no usable keys")]
    EmptyWordlist,

    #[error("no success criteria: provide a known substring or a 2-letter language code")]
    MissingSuccessCriteria,

    #[error("invalid language code '{code}': expected a 2-letter code such as 'en'")]
    InvalidLanguageCode { code: String },

    #[error("match threshold {value} out of range: must lie strictly between 0 and 1")]
    InvalidThreshold { value: f64 },

    #[error("language estimator unavailable: {0}")]
    EstimatorUnavailable(String),

    #[error("language estimation failed: {0}")]
    EstimatorFailed(String),
}
