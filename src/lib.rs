//! # VigCrack: Vigenère Dictionary Attack
//!
//! Cracks Vigenère-encrypted text by decrypting it under every key in a wordlist
//! and reporting the keys whose output looks like a hit.
//!
//! ## Two Success Policies
//!
//! 1. **Known string** - the decoded text must contain an expected phrase
//!    - `SuccessPolicy::KnownString("lazy dog.".into())`
//! 2. **Language match** - a statistical language detector must assign the decoded
//!    text a probability above a threshold for the target language
//!    - `SuccessPolicy::LanguageMatch { lang: "en".into(), threshold: 0.99 }`
//!
//! ## Example Usage
//!
//! ```ignore
//! use vigcrack::{CrackSearch, MatchCollector, SuccessPolicy};
//!
//! let policy = SuccessPolicy::from_options(Some("lazy dog."), "en", 0.99)?;
//! let search = CrackSearch::new(policy)?;
//!
//! let mut sink = MatchCollector::default();
//! let summary = search.run(
//!     "Ifx xivri uycjc dhe xhbnl vjrg ral znow wvu.",
//!     ["banana", "python", "secret"],
//!     &mut sink,
//! )?;
//!
//! println!("{} match(es) across {} keys", summary.matches_found, summary.keys_tried);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Key Expander** - cycles a key into per-letter shift values
//! - **Vigenère Transform** - case-preserving decipher/encipher
//! - **Candidate Evaluator** - decodes one key and applies the success policy
//! - **Search Driver** - walks the wordlist, streams matches, honors cancellation
//! - **Language Estimator** - lingua-backed scorer behind a trait seam

pub mod cancel;
pub mod cipher;
pub mod detect;
pub mod keysched;
pub mod policy;
pub mod report;
pub mod search;
pub mod types;

// Re-export main types and functions for convenience
pub use cancel::CancelToken;
pub use cipher::{decipher, encipher};
pub use detect::{LanguageEstimator, LanguageScore, LinguaEstimator};
pub use keysched::expand_key;
pub use policy::{SuccessPolicy, DEFAULT_THRESHOLD};
pub use report::{MatchCollector, ReportSink};
pub use search::CrackSearch;
pub use types::{CrackError, Evaluation, SearchStatus, SearchSummary, Verdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
