//! Budget system type definitions

use serde::{Deserialize, Serialize};

/// Default predicate-evaluation limit for a single search
pub const DEFAULT_MAX_EVALUATIONS: i64 = 100_000;

/// Configuration for the evaluation budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Max. number of predicate evaluations per search (default: 100_000)
    pub max_evaluations: i64,

    /// Emit a warning when the budget ends a search (default: true)
    pub warn_on_exhaustion: bool,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
            warn_on_exhaustion: true,
        }
    }
}

/// Budget warning types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetWarning {
    /// The search was abandoned because no evaluations were left
    Exhausted {
        used: usize,
        allocated: i64,
    },
}
