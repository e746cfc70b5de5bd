// VigCrack Reporting
// Streaming consumer for search results

use crate::types::Evaluation;

/// Consumer for verdicts as the driver produces them
///
/// Matches are delivered one at a time, in wordlist order, as soon as they are
/// found; long searches show partial progress instead of buffering to the end.
/// The driver makes no assumption about the destination.
pub trait ReportSink {
    /// Called once per match, immediately after the candidate is evaluated
    fn on_match(&mut self, eval: &Evaluation);

    /// Called once per evaluated candidate, match or not
    ///
    /// Diagnostic hook for verbose tracing; the default does nothing.
    fn on_attempt(&mut self, _eval: &Evaluation) {}
}

/// Sink that collects matches into a vector
#[derive(Debug, Default)]
pub struct MatchCollector {
    /// Matches in the order they were reported
    pub matches: Vec<Evaluation>,
}

impl ReportSink for MatchCollector {
    fn on_match(&mut self, eval: &Evaluation) {
        self.matches.push(eval.clone());
    }
}
