// VigCrack Search Engine
// Candidate evaluation and the wordlist search driver

use crate::cancel::CancelToken;
use crate::cipher::decipher;
use crate::detect::{LanguageEstimator, LinguaEstimator};
use crate::policy::SuccessPolicy;
use crate::report::ReportSink;
use crate::types::{CrackError, Evaluation, SearchStatus, SearchSummary, Verdict};

/// Vigenère dictionary attack engine
///
/// Holds the success policy, the language estimator (when the policy needs
/// one), and the cancellation token. The ciphertext and wordlist are passed
/// per run; nothing is retained across candidates except the sink's output.
pub struct CrackSearch {
    policy: SuccessPolicy,
    estimator: Option<Box<dyn LanguageEstimator>>,
    cancel: CancelToken,
}

impl CrackSearch {
    /// Create an engine for the given policy
    ///
    /// Under the LanguageMatch policy this builds the lingua estimator up
    /// front, so an unusable estimator or an unsupported target language is
    /// rejected here, before any candidate is tried.
    ///
    /// # Errors
    /// `CrackError::EstimatorUnavailable` when language matching is requested
    /// but cannot be served.
    pub fn new(policy: SuccessPolicy) -> Result<Self, CrackError> {
        let estimator: Option<Box<dyn LanguageEstimator>> = match &policy {
            SuccessPolicy::LanguageMatch { lang, .. } => {
                if !LinguaEstimator::supports(lang) {
                    return Err(CrackError::EstimatorUnavailable(format!(
                        "language '{}' has no compiled-in model",
                        lang
                    )));
                }
                Some(Box::new(LinguaEstimator::new()?))
            }
            SuccessPolicy::KnownString(_) => None,
        };

        Ok(Self {
            policy,
            estimator,
            cancel: CancelToken::new(),
        })
    }

    /// Create an engine with an injected estimator
    ///
    /// Used by tests and by callers that wrap the estimator, e.g. with a
    /// timeout decorator.
    pub fn with_estimator(policy: SuccessPolicy, estimator: Box<dyn LanguageEstimator>) -> Self {
        Self {
            policy,
            estimator: Some(estimator),
            cancel: CancelToken::new(),
        }
    }

    /// Handle to the engine's cancellation flag
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Evaluate a single candidate key
    ///
    /// Deciphers the text and applies the success policy. A per-candidate
    /// scoring failure from the estimator is recovered as a no-match so one
    /// degenerate decode cannot abort a long search; only estimator errors
    /// that would affect every candidate propagate.
    ///
    /// # Errors
    /// `CrackError::InvalidKey` for keys without alphabetic characters, and
    /// `CrackError::EstimatorUnavailable` if language matching is requested
    /// without an estimator.
    pub fn evaluate(&self, ciphertext: &str, key: &str) -> Result<Evaluation, CrackError> {
        let decoded = decipher(ciphertext, key)?;

        let verdict = match &self.policy {
            SuccessPolicy::KnownString(needle) => {
                if decoded.contains(needle.as_str()) {
                    Verdict::Match { score: None }
                } else {
                    Verdict::NoMatch
                }
            }
            SuccessPolicy::LanguageMatch { lang, threshold } => {
                let estimator = self.estimator.as_deref().ok_or_else(|| {
                    CrackError::EstimatorUnavailable("no estimator configured".to_string())
                })?;

                match estimator.estimate(&decoded) {
                    Ok(scores) => {
                        let hit = scores
                            .iter()
                            .find(|s| s.code == *lang && s.probability > *threshold);
                        match hit {
                            Some(score) => Verdict::Match {
                                score: Some(score.probability),
                            },
                            None => Verdict::NoMatch,
                        }
                    }
                    // Scoring failed for this decode only; skip the candidate.
                    Err(CrackError::EstimatorFailed(_)) => Verdict::NoMatch,
                    Err(err) => return Err(err),
                }
            }
        };

        Ok(Evaluation {
            key: key.to_string(),
            decoded,
            verdict,
        })
    }

    /// Run the dictionary attack over a sequence of wordlist lines
    ///
    /// Each line is trimmed; blank lines are skipped without an evaluator
    /// call, and keys without alphabetic characters are skipped as well.
    /// Every match is streamed to the sink the moment it is found. The cancel
    /// token is polled between candidates, so an interrupt lets the current
    /// candidate finish and then stops with `SearchStatus::Interrupted`.
    ///
    /// Strictly sequential: one candidate is fully evaluated before the next
    /// begins, and no key is evaluated twice.
    ///
    /// # Errors
    /// `CrackError::EmptyWordlist` when the exhausted sequence yielded no
    /// usable key; unrecoverable policy errors abort the run as-is, leaving
    /// already-reported matches valid.
    pub fn run<I, S>(
        &self,
        ciphertext: &str,
        words: I,
        sink: &mut S,
    ) -> Result<SearchSummary, CrackError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        S: ReportSink + ?Sized,
    {
        let mut keys_tried = 0;
        let mut matches_found = 0;
        let mut status = SearchStatus::Completed;

        for line in words {
            if self.cancel.is_cancelled() {
                status = SearchStatus::Interrupted;
                break;
            }

            let key = line.as_ref().trim();
            if key.is_empty() {
                continue;
            }

            let eval = match self.evaluate(ciphertext, key) {
                Ok(eval) => eval,
                Err(CrackError::InvalidKey { .. }) => continue,
                Err(err) => return Err(err),
            };

            keys_tried += 1;
            sink.on_attempt(&eval);

            if eval.is_match() {
                matches_found += 1;
                sink.on_match(&eval);
            }
        }

        if keys_tried == 0 && status == SearchStatus::Completed {
            return Err(CrackError::EmptyWordlist);
        }

        Ok(SearchSummary {
            status,
            keys_tried,
            matches_found,
        })
    }
}
