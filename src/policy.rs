// VigCrack Success Policy
// How a decoded candidate is classified as a hit

use crate::types::CrackError;

/// Default language match threshold
pub const DEFAULT_THRESHOLD: f64 = 0.99;

/// Success policy applied to each decoded candidate
///
/// Exactly one variant is active for a whole search run; the evaluator
/// pattern matches on it.
#[derive(Debug, Clone, PartialEq)]
pub enum SuccessPolicy {
    /// Match iff this exact string occurs in the decoded text (case-sensitive)
    KnownString(String),

    /// Match iff the language estimator scores the decoded text for `lang`
    /// strictly above `threshold`
    LanguageMatch {
        /// Lowercased 2-letter ISO 639-1 code, e.g. "en"
        lang: String,
        /// Probability bound in (0.0, 1.0); scores equal to it do not match
        threshold: f64,
    },
}

impl SuccessPolicy {
    /// Build a policy from the raw configuration inputs
    ///
    /// A non-empty known string wins over language detection. Otherwise the
    /// language code must be exactly 2 ASCII letters (normalized to lowercase)
    /// and the threshold must lie strictly between 0 and 1.
    ///
    /// # Errors
    /// - `MissingSuccessCriteria` when neither a known string nor a language code is given
    /// - `InvalidLanguageCode` for codes that are not 2 ASCII letters
    /// - `InvalidThreshold` for thresholds outside (0.0, 1.0)
    pub fn from_options(
        known: Option<&str>,
        language: &str,
        threshold: f64,
    ) -> Result<Self, CrackError> {
        if let Some(needle) = known {
            if !needle.is_empty() {
                return Ok(SuccessPolicy::KnownString(needle.to_string()));
            }
        }

        let code = language.trim();
        if code.is_empty() {
            return Err(CrackError::MissingSuccessCriteria);
        }
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(CrackError::InvalidLanguageCode {
                code: language.to_string(),
            });
        }
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(CrackError::InvalidThreshold { value: threshold });
        }

        Ok(SuccessPolicy::LanguageMatch {
            lang: code.to_ascii_lowercase(),
            threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_string_wins() {
        let policy = SuccessPolicy::from_options(Some("lazy dog."), "en", 0.99).unwrap();
        assert_eq!(policy, SuccessPolicy::KnownString("lazy dog.".to_string()));
    }

    #[test]
    fn test_empty_known_string_falls_back_to_language() {
        let policy = SuccessPolicy::from_options(Some(""), "en", 0.99).unwrap();
        assert!(matches!(policy, SuccessPolicy::LanguageMatch { .. }));
    }

    #[test]
    fn test_language_code_normalized() {
        let policy = SuccessPolicy::from_options(None, " EN ", 0.5).unwrap();
        assert_eq!(
            policy,
            SuccessPolicy::LanguageMatch {
                lang: "en".to_string(),
                threshold: 0.5,
            }
        );
    }

    #[test]
    fn test_rejects_bad_language_codes() {
        for code in ["eng", "e", "e1", "3n"] {
            assert!(
                matches!(
                    SuccessPolicy::from_options(None, code, 0.99),
                    Err(CrackError::InvalidLanguageCode { .. })
                ),
                "code '{}' should be rejected",
                code
            );
        }
    }

    #[test]
    fn test_rejects_missing_criteria() {
        assert!(matches!(
            SuccessPolicy::from_options(None, "", 0.99),
            Err(CrackError::MissingSuccessCriteria)
        ));
        assert!(matches!(
            SuccessPolicy::from_options(Some(""), "  ", 0.99),
            Err(CrackError::MissingSuccessCriteria)
        ));
    }

    #[test]
    fn test_rejects_out_of_range_thresholds() {
        for value in [0.0, 1.0, -0.1, 1.5] {
            assert!(
                matches!(
                    SuccessPolicy::from_options(None, "en", value),
                    Err(CrackError::InvalidThreshold { .. })
                ),
                "threshold {} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_known_string_skips_threshold_validation() {
        // The threshold is irrelevant when a known string is configured.
        let policy = SuccessPolicy::from_options(Some("hit"), "en", 2.0).unwrap();
        assert_eq!(policy, SuccessPolicy::KnownString("hit".to_string()));
    }
}
