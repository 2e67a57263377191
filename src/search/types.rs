//! Search type definitions

use serde::{Deserialize, Serialize};

use crate::budget::BudgetWarning;

/// Ascending positions removed from the original sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeletionCombination {
    positions: Vec<usize>,
}

impl DeletionCombination {
    /// Build a combination from positions, sorting and de-duplicating them
    pub fn new(mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        Self { positions }
    }

    /// The empty combination: the unmodified sequence
    pub fn none() -> Self {
        Self::default()
    }

    /// Complement of the surviving original positions among `0..len`
    pub(crate) fn from_survivors(survivors: &[usize], len: usize) -> Self {
        let mut positions = Vec::with_capacity(len.saturating_sub(survivors.len()));
        let mut kept = survivors.iter().peekable();
        for position in 0..len {
            if kept.peek() == Some(&&position) {
                kept.next();
            } else {
                positions.push(position);
            }
        }
        Self { positions }
    }

    /// Deleted positions in ascending order
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of deletions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Zero-based level this combination belongs to (`deletions - 1`)
    ///
    /// `None` for the unmodified sequence, which is checked before any level.
    pub fn level(&self) -> Option<usize> {
        self.positions.len().checked_sub(1)
    }

    /// Produce the candidate subsequence, preserving order of survivors
    pub fn apply<T: Clone>(&self, sequence: &[T]) -> Vec<T> {
        let mut deleted = self.positions.iter().peekable();
        sequence
            .iter()
            .enumerate()
            .filter_map(|(position, item)| {
                if deleted.peek() == Some(&&position) {
                    deleted.next();
                    None
                } else {
                    Some(item.clone())
                }
            })
            .collect()
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// A candidate satisfied the predicate
    Matched,
    /// Every candidate was tried without a match
    NotFound,
    /// The evaluation budget ran out before a match
    BudgetExhausted,
    /// The input sequence was empty; nothing was evaluated
    EmptyInput,
}

/// Bookkeeping for one search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub status: SearchStatus,
    /// Predicate calls actually made
    pub evaluations: usize,
    /// Evaluations granted by the caller
    pub max_evaluations: i64,
    /// Original positions removed to produce the match
    pub deletions: Option<DeletionCombination>,
    pub warning: Option<BudgetWarning>,
}

impl SearchReport {
    pub fn is_match(&self) -> bool {
        self.status == SearchStatus::Matched
    }
}

/// Result of a search plus its report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    /// The matching subsequence; empty when nothing matched
    pub subsequence: Vec<T>,
    pub report: SearchReport,
}

impl<T> SearchOutcome<T> {
    /// The matching subsequence, or `None` when not found
    pub fn matched(&self) -> Option<&[T]> {
        if self.report.is_match() {
            Some(&self.subsequence)
        } else {
            None
        }
    }

    pub fn into_subsequence(self) -> Vec<T> {
        self.subsequence
    }
}

impl<T: Serialize> SearchOutcome<T> {
    /// Pretty JSON object holding the subsequence and the report
    pub fn to_json(&self) -> crate::Result<String> {
        let value = serde_json::json!({
            "subsequence": self.subsequence,
            "report": self.report,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_normalizes_positions() {
        let combo = DeletionCombination::new(vec![3, 1, 3, 0]);
        assert_eq!(combo.positions(), &[0, 1, 3]);
        assert_eq!(combo.len(), 3);
        assert_eq!(combo.level(), Some(2));
    }

    #[test]
    fn test_empty_combination_has_no_level() {
        let combo = DeletionCombination::none();
        assert!(combo.is_empty());
        assert_eq!(combo.level(), None);
    }

    #[test]
    fn test_apply_preserves_order() {
        let combo = DeletionCombination::new(vec![0, 2]);
        assert_eq!(combo.apply(&["a", "b", "c", "d"]), vec!["b", "d"]);
    }

    #[test]
    fn test_apply_ignores_out_of_range() {
        let combo = DeletionCombination::new(vec![1, 9]);
        assert_eq!(combo.apply(&[10, 20, 30]), vec![10, 30]);
    }

    #[test]
    fn test_from_survivors() {
        let combo = DeletionCombination::from_survivors(&[1, 3], 5);
        assert_eq!(combo.positions(), &[0, 2, 4]);
    }

    #[test]
    fn test_outcome_matched() {
        let outcome = SearchOutcome {
            subsequence: vec![1, 3],
            report: SearchReport {
                status: SearchStatus::Matched,
                evaluations: 4,
                max_evaluations: 10,
                deletions: Some(DeletionCombination::new(vec![0, 2])),
                warning: None,
            },
        };
        assert_eq!(outcome.matched(), Some(&[1, 3][..]));
    }

    #[test]
    fn test_outcome_to_json() {
        let outcome = SearchOutcome {
            subsequence: vec!["1".to_string()],
            report: SearchReport {
                status: SearchStatus::Matched,
                evaluations: 2,
                max_evaluations: 5,
                deletions: Some(DeletionCombination::new(vec![0])),
                warning: None,
            },
        };
        let json: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
        assert_eq!(json["subsequence"][0], "1");
        assert_eq!(json["report"]["status"], "matched");
        assert_eq!(json["report"]["deletions"]["positions"][0], 0);
    }

    #[test]
    fn test_report_serialization() {
        let report = SearchReport {
            status: SearchStatus::BudgetExhausted,
            evaluations: 1,
            max_evaluations: 1,
            deletions: None,
            warning: Some(BudgetWarning::Exhausted { used: 1, allocated: 1 }),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"budget_exhausted\""));
        let back: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
