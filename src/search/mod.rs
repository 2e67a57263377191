//! Bounded subsequence search
//! Finds the closest order-preserving subsequence matching a predicate

pub mod candidates;
pub mod finder;
pub mod types;

pub use candidates::{candidate_count, Candidates};
pub use finder::{find_matching_subsequence, try_find_matching_subsequence, SubsequenceSearch};
pub use types::{DeletionCombination, SearchOutcome, SearchReport, SearchStatus};
