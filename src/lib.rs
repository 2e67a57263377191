//! subseqfind - Budgeted subsequence search
//!
//! Given an ordered sequence and a predicate, finds the closest reduced
//! subsequence (elements deleted, never reordered) that satisfies the
//! predicate while making at most a caller-supplied number of predicate
//! evaluations.
//!
//! ```
//! use subseqfind::find_matching_subsequence;
//!
//! let items = [0, 1, 2, 3];
//! let found = find_matching_subsequence(&[1, 3][..], &items, |target, candidate| candidate == target, 100);
//! assert_eq!(found, vec![1, 3]);
//! ```
//!
//! # Architecture
//!
//! - **search**: the bounded search, candidate order and reports
//! - **budget**: the per-search evaluation counter
//! - **telemetry**: search events and statistics
//! - **cli**: command-line arguments and TOML configuration

pub mod errors;
pub mod budget;
pub mod search;
pub mod telemetry;
pub mod cli;

// Re-export commonly used types
pub use errors::{Result, SearchError};
pub use budget::{BudgetConfig, BudgetWarning, EvaluationBudget};
pub use search::{
    find_matching_subsequence, try_find_matching_subsequence, Candidates, DeletionCombination,
    SearchOutcome, SearchReport, SearchStatus, SubsequenceSearch,
};
