//! Inserting a freshly computed rule result into an existing result set.
//!
//! A rule already present is replaced in place, keeping its position so
//! repeated exports of the same rule produce a stable document order. A rule
//! not yet present is appended. Replacement is total: violations from the
//! previous run of that rule are dropped, never unioned.

use crate::types::{ResultSet, RuleResult};

/// Where a merged result ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// An entry with the same rule name existed and was overwritten.
    Replaced { index: usize },
    /// No entry matched; the result was appended.
    Appended { index: usize },
}

impl MergeOutcome {
    pub fn index(&self) -> usize {
        match self {
            MergeOutcome::Replaced { index } | MergeOutcome::Appended { index } => *index,
        }
    }

    pub fn is_replaced(&self) -> bool {
        matches!(self, MergeOutcome::Replaced { .. })
    }
}

impl ResultSet {
    /// Merge `result` into this set. Rule names are compared exactly.
    pub fn insert_result(&mut self, result: RuleResult) -> MergeOutcome {
        let results = self.results_mut();
        match results.iter().position(|r| r.rule() == result.rule()) {
            Some(index) => {
                results[index] = result;
                MergeOutcome::Replaced { index }
            }
            None => {
                results.push(result);
                MergeOutcome::Appended {
                    index: results.len() - 1,
                }
            }
        }
    }
}

/// Merge `result` into `existing`, returning the combined sequence.
pub fn insert_result(result: RuleResult, existing: Vec<RuleResult>) -> Vec<RuleResult> {
    let mut set = ResultSet::from_results(existing);
    set.insert_result(result);
    set.into_results()
}
