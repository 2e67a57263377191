//! Evaluation budget counter
//! Owned by exactly one search invocation and threaded through it by `&mut`

use crate::budget::types::BudgetWarning;

/// Remaining predicate evaluations for one search
///
/// The counter is signed: the first whole-sequence check is made even when
/// the allocation is zero or negative, which drives `remaining` below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationBudget {
    /// Evaluations granted by the caller
    allocated: i64,

    /// Evaluations left; `<= 0` means exhausted
    remaining: i64,

    /// Evaluations consumed so far
    used: usize,
}

impl EvaluationBudget {
    /// Create a budget allowing `max_evaluations` predicate calls
    pub fn new(max_evaluations: i64) -> Self {
        Self {
            allocated: max_evaluations,
            remaining: max_evaluations,
            used: 0,
        }
    }

    /// Account for one predicate evaluation
    ///
    /// Never refuses: callers check `is_exhausted` before the candidates
    /// that are subject to the limit.
    pub fn consume(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        self.used += 1;
    }

    /// Check if budget is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0
    }

    /// Get remaining evaluations (may be negative)
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Get allocated budget
    pub fn allocated(&self) -> i64 {
        self.allocated
    }

    /// Get used evaluations
    pub fn used(&self) -> usize {
        self.used
    }

    /// Exhaustion signal for telemetry, if the budget ran out
    pub fn check_exhaustion_warning(&self) -> Option<BudgetWarning> {
        if self.is_exhausted() {
            Some(BudgetWarning::Exhausted {
                used: self.used,
                allocated: self.allocated,
            })
        } else {
            None
        }
    }
}
