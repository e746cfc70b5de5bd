// VigCrack Language Estimator
// Lingua-backed statistical language scoring behind a trait seam

use crate::types::CrackError;
use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

/// One language's probability for a piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageScore {
    /// Lowercased 2-letter ISO 639-1 code, e.g. "en"
    pub code: String,

    /// Probability in [0.0, 1.0]
    pub probability: f64,
}

/// Scores text against the set of supported languages
///
/// The search core only ever talks to this trait, so tests inject stubs and a
/// future per-candidate timeout wrapper can decorate an estimator without
/// touching the evaluator.
pub trait LanguageEstimator {
    /// Score `text` against every supported language
    ///
    /// # Errors
    /// `CrackError::EstimatorFailed` when no score can be produced, e.g. for
    /// degenerate text. The caller decides whether to recover or escalate.
    fn estimate(&self, text: &str) -> Result<Vec<LanguageScore>, CrackError>;
}

/// Production estimator backed by the lingua detector
///
/// Models for the compiled-in languages are loaded lazily on first use; the
/// detector itself is built once per search run.
pub struct LinguaEstimator {
    detector: LanguageDetector,
}

impl LinguaEstimator {
    /// Build a detector over every compiled-in language
    pub fn new() -> Result<Self, CrackError> {
        let languages: Vec<Language> = Language::all().into_iter().collect();
        if languages.is_empty() {
            return Err(CrackError::EstimatorUnavailable(
                "no language models compiled in".to_string(),
            ));
        }

        let detector = LanguageDetectorBuilder::from_languages(&languages).build();
        Ok(Self { detector })
    }

    /// Whether a 2-letter code belongs to a compiled-in language
    pub fn supports(code: &str) -> bool {
        Language::all()
            .into_iter()
            .any(|lang| iso_code(&lang).eq_ignore_ascii_case(code))
    }
}

impl LanguageEstimator for LinguaEstimator {
    fn estimate(&self, text: &str) -> Result<Vec<LanguageScore>, CrackError> {
        let values = self.detector.compute_language_confidence_values(text);
        if values.is_empty() {
            return Err(CrackError::EstimatorFailed(
                "no language scores for text".to_string(),
            ));
        }

        Ok(values
            .into_iter()
            .map(|(lang, probability)| LanguageScore {
                code: iso_code(&lang),
                probability,
            })
            .collect())
    }
}

fn iso_code(lang: &Language) -> String {
    lang.iso_code_639_1().to_string().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_compiled_languages() {
        assert!(LinguaEstimator::supports("en"));
        assert!(LinguaEstimator::supports("EN"));
        assert!(!LinguaEstimator::supports("xx"));
    }

    #[test]
    fn test_estimate_clear_english() {
        let estimator = LinguaEstimator::new().unwrap();
        let scores = estimator
            .estimate("The quick brown fox jumps over the lazy dog.")
            .unwrap();

        assert!(!scores.is_empty());
        for score in &scores {
            assert_eq!(score.code.len(), 2);
            assert!((0.0..=1.0).contains(&score.probability));
        }

        let english = scores.iter().find(|s| s.code == "en");
        assert!(english.is_some(), "english should be among the scores");
    }
}
