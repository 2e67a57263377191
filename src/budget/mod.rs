//! Predicate-evaluation budget
//! Bounds a single search by the number of predicate calls it may make

pub mod manager;
pub mod types;

pub use manager::EvaluationBudget;
pub use types::{BudgetConfig, BudgetWarning, DEFAULT_MAX_EVALUATIONS};
