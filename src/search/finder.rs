//! Bounded subsequence search
//!
//! Finds the subsequence closest to the input (fewest deletions, survivors
//! never reordered) that satisfies a predicate, spending at most a fixed
//! number of predicate evaluations.
//!
//! Evaluation order:
//! 1. the unmodified sequence, unconditionally, even for a budget `<= 0`
//! 2. every single-deletion candidate, then every two-deletion candidate,
//!    and so on up to `n - 1` deletions
//! 3. within a level, deletion positions ascend lexicographically
//!
//! The first match wins. Once the budget is spent, the whole search is
//! abandoned and reported as not found.

use std::convert::Infallible;
use std::time::Instant;

use crate::budget::{BudgetConfig, EvaluationBudget};
use crate::search::candidates::candidate_count;
use crate::search::types::{DeletionCombination, SearchOutcome, SearchReport, SearchStatus};
use crate::telemetry::{SearchEvent, TelemetryCollector};

/// Find the closest subsequence of `sequence` matching `predicate`
///
/// Returns an empty `Vec` when nothing matched within `max_evaluations`
/// predicate calls. The empty subsequence is never a legitimate match.
pub fn find_matching_subsequence<T, R, F>(
    target: &R,
    sequence: &[T],
    predicate: F,
    max_evaluations: i64,
) -> Vec<T>
where
    T: Clone,
    R: ?Sized,
    F: FnMut(&R, &[T]) -> bool,
{
    SubsequenceSearch::with_max_evaluations(max_evaluations)
        .search(target, sequence, predicate)
        .into_subsequence()
}

/// Same as [`find_matching_subsequence`] for a fallible predicate
///
/// The first predicate error aborts the search and is returned as-is.
pub fn try_find_matching_subsequence<T, R, E, F>(
    target: &R,
    sequence: &[T],
    predicate: F,
    max_evaluations: i64,
) -> Result<Vec<T>, E>
where
    T: Clone,
    R: ?Sized,
    F: FnMut(&R, &[T]) -> Result<bool, E>,
{
    SubsequenceSearch::with_max_evaluations(max_evaluations)
        .try_search(target, sequence, predicate)
        .map(SearchOutcome::into_subsequence)
}

/// Status, matching subsequence and its deletions
type Finding<T> = (SearchStatus, Vec<T>, Option<DeletionCombination>);

/// Outcome of walking one level (or part of one)
enum Step<T> {
    /// Nothing matched; keep going
    Continue,
    /// Budget spent; abandon every remaining candidate
    Exhausted,
    Found { candidate: Vec<T>, survivors: Vec<usize> },
}

/// State shared by every recursive step of one search
struct Descent<'a, T, R: ?Sized, F> {
    target: &'a R,
    sequence: &'a [T],
    predicate: F,
    budget: &'a mut EvaluationBudget,
    telemetry: Option<&'a TelemetryCollector>,
}

impl<'a, T, R, E, F> Descent<'a, T, R, F>
where
    T: Clone,
    R: ?Sized,
    F: FnMut(&R, &[T]) -> Result<bool, E>,
{
    fn evaluate(&mut self, candidate: &[T]) -> Result<bool, E> {
        self.budget.consume();
        let matched = (self.predicate)(self.target, candidate)?;
        if let Some(telemetry) = self.telemetry {
            telemetry.record(SearchEvent::Evaluated {
                level: (self.sequence.len() - candidate.len()).checked_sub(1),
                candidate_len: candidate.len(),
                matched,
                timestamp: Instant::now(),
            });
        }
        Ok(matched)
    }

    /// Try every way of making `level + 1` more deletions from `survivors`,
    /// choosing each next deletion at or after `start`
    fn check_level(
        &mut self,
        survivors: &[usize],
        level: usize,
        start: usize,
    ) -> Result<Step<T>, E> {
        if survivors.len() == 1 {
            return Ok(Step::Continue);
        }

        for i in start..survivors.len() {
            if self.budget.is_exhausted() {
                return Ok(Step::Exhausted);
            }

            let mut reduced = survivors.to_vec();
            reduced.remove(i);

            if level == 0 {
                let candidate: Vec<T> = reduced
                    .iter()
                    .map(|&position| self.sequence[position].clone())
                    .collect();
                if self.evaluate(&candidate)? {
                    return Ok(Step::Found {
                        candidate,
                        survivors: reduced,
                    });
                }
            } else {
                match self.check_level(&reduced, level - 1, i)? {
                    Step::Continue => {}
                    step => return Ok(step),
                }
            }
        }

        Ok(Step::Continue)
    }
}

/// Configured bounded subsequence searcher
#[derive(Debug, Clone, Default)]
pub struct SubsequenceSearch {
    config: BudgetConfig,
    telemetry: Option<TelemetryCollector>,
}

impl SubsequenceSearch {
    /// Create a searcher with the given budget configuration
    pub fn new(config: BudgetConfig) -> Self {
        Self {
            config,
            telemetry: None,
        }
    }

    /// Create a searcher allowing `max_evaluations` predicate calls
    pub fn with_max_evaluations(max_evaluations: i64) -> Self {
        Self::new(BudgetConfig {
            max_evaluations,
            ..BudgetConfig::default()
        })
    }

    /// Record search events into `collector`
    pub fn with_telemetry(mut self, collector: TelemetryCollector) -> Self {
        self.telemetry = Some(collector);
        self
    }

    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    fn record(&self, event: SearchEvent) {
        if let Some(telemetry) = &self.telemetry {
            telemetry.record(event);
        }
    }

    /// Run a search with an infallible predicate
    pub fn search<T, R, F>(&self, target: &R, sequence: &[T], mut predicate: F) -> SearchOutcome<T>
    where
        T: Clone,
        R: ?Sized,
        F: FnMut(&R, &[T]) -> bool,
    {
        let outcome = self.try_search(target, sequence, |target: &R, candidate: &[T]| {
            Ok::<bool, Infallible>(predicate(target, candidate))
        });
        match outcome {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Run a search with a fallible predicate
    pub fn try_search<T, R, E, F>(
        &self,
        target: &R,
        sequence: &[T],
        predicate: F,
    ) -> Result<SearchOutcome<T>, E>
    where
        T: Clone,
        R: ?Sized,
        F: FnMut(&R, &[T]) -> Result<bool, E>,
    {
        let started = Instant::now();
        let max_evaluations = self.config.max_evaluations;
        let len = sequence.len();

        self.record(SearchEvent::Started {
            sequence_len: len,
            max_evaluations,
            timestamp: started,
        });

        let mut budget = EvaluationBudget::new(max_evaluations);
        let (status, subsequence, deletions) = if sequence.is_empty() {
            tracing::debug!("empty input sequence, nothing to search");
            (SearchStatus::EmptyInput, Vec::new(), None)
        } else {
            let mut descent = Descent {
                target,
                sequence,
                predicate,
                budget: &mut budget,
                telemetry: self.telemetry.as_ref(),
            };
            Self::run(&mut descent)?
        };

        let warning = match status {
            SearchStatus::BudgetExhausted => budget.check_exhaustion_warning(),
            _ => None,
        };

        match (&status, &deletions) {
            (SearchStatus::Matched, Some(deletions)) => {
                tracing::debug!(
                    deletions = deletions.len(),
                    evaluations = budget.used(),
                    "found matching subsequence"
                );
                self.record(SearchEvent::Matched {
                    deletions: deletions.len(),
                    evaluations: budget.used(),
                    timestamp: Instant::now(),
                });
            }
            (SearchStatus::BudgetExhausted, _) => {
                if self.config.warn_on_exhaustion {
                    tracing::warn!(
                        "hit the limit of {} predicate evaluations after {} calls",
                        max_evaluations,
                        budget.used()
                    );
                }
                if let Some(warning) = &warning {
                    self.record(SearchEvent::BudgetExhausted {
                        warning: warning.clone(),
                        timestamp: Instant::now(),
                    });
                }
            }
            _ => {}
        }

        self.record(SearchEvent::Completed {
            status,
            evaluations: budget.used(),
            duration_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
            timestamp: Instant::now(),
        });

        Ok(SearchOutcome {
            subsequence,
            report: SearchReport {
                status,
                evaluations: budget.used(),
                max_evaluations,
                deletions,
                warning,
            },
        })
    }

    fn run<T, R, E, F>(descent: &mut Descent<'_, T, R, F>) -> Result<Finding<T>, E>
    where
        T: Clone,
        R: ?Sized,
        F: FnMut(&R, &[T]) -> Result<bool, E>,
    {
        let sequence = descent.sequence;
        let len = sequence.len();

        // The whole sequence is always checked, whatever the budget
        if descent.evaluate(sequence)? {
            return Ok((
                SearchStatus::Matched,
                sequence.to_vec(),
                Some(DeletionCombination::none()),
            ));
        }

        let all: Vec<usize> = (0..len).collect();
        for level in 0..len - 1 {
            tracing::trace!(level, deletions = level + 1, "checking level");
            match descent.check_level(&all, level, 0)? {
                Step::Found {
                    candidate,
                    survivors,
                } => {
                    let deletions = DeletionCombination::from_survivors(&survivors, len);
                    return Ok((SearchStatus::Matched, candidate, Some(deletions)));
                }
                Step::Exhausted => break,
                Step::Continue => {}
            }
            if descent.budget.is_exhausted() {
                break;
            }
        }

        // Stopping early without a match only happens when the budget ran out
        let status = if (descent.budget.used() as u64) < candidate_count(len) {
            SearchStatus::BudgetExhausted
        } else {
            SearchStatus::NotFound
        };
        Ok((status, Vec::new(), None))
    }
}
