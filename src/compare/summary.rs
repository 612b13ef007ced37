use super::{ComparisonResult, Verdict};

/// Tally over a test run.
///
/// `MatchedNoDifference` counts neither as passed nor as failed; a case
/// whose glossary translation errored counts as failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub matched_no_difference: usize,
    /// Cases where the glossary changed the output.
    pub effective: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &ComparisonResult) {
        self.total += 1;
        match result.verdict {
            Verdict::Passed => self.passed += 1,
            Verdict::MatchedNoDifference => self.matched_no_difference += 1,
            Verdict::Partial | Verdict::Failed => self.failed += 1,
        }
        if result.has_difference {
            self.effective += 1;
        }
    }

    pub const fn record_error(&mut self) {
        self.total += 1;
        self.failed += 1;
    }

    pub fn pass_rate(&self) -> f64 {
        percent(self.passed, self.total)
    }

    pub fn effective_rate(&self) -> f64 {
        percent(self.effective, self.total)
    }

    pub const fn all_passed(&self) -> bool {
        self.total > 0 && self.passed == self.total
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
