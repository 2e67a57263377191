//! Telemetry system for subseqfind
//!
//! Collects search events and summary statistics for terminal display.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use crate::budget::BudgetWarning;
use crate::search::SearchStatus;

/// Events kept before the oldest are dropped
pub const DEFAULT_MAX_EVENTS: usize = 10_000;

/// Telemetry event types
#[derive(Debug, Clone)]
pub enum SearchEvent {
    Started {
        sequence_len: usize,
        max_evaluations: i64,
        timestamp: Instant,
    },
    /// One predicate call; `level` is `None` for the unmodified sequence
    Evaluated {
        level: Option<usize>,
        candidate_len: usize,
        matched: bool,
        timestamp: Instant,
    },
    Matched {
        deletions: usize,
        evaluations: usize,
        timestamp: Instant,
    },
    BudgetExhausted {
        warning: BudgetWarning,
        timestamp: Instant,
    },
    Completed {
        status: SearchStatus,
        evaluations: usize,
        duration_us: u64,
        timestamp: Instant,
    },
}

/// Telemetry statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryStats {
    pub searches: usize,
    pub evaluations: usize,
    pub matches: usize,
    pub not_found: usize,
    pub budget_exhaustions: usize,
}

/// Telemetry collector
#[derive(Debug, Clone)]
pub struct TelemetryCollector {
    events: Arc<Mutex<VecDeque<SearchEvent>>>,
    stats: Arc<Mutex<TelemetryStats>>,
    max_events: usize,
    start_time: Instant,
}

/// Recover the guard even if another thread panicked while holding it
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl TelemetryCollector {
    /// Create a new telemetry collector
    pub fn new() -> Self {
        Self::with_event_limit(DEFAULT_MAX_EVENTS)
    }

    /// Create a collector keeping at most `max_events` recent events
    ///
    /// Statistics still count every event, including dropped ones.
    pub fn with_event_limit(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::new())),
            stats: Arc::new(Mutex::new(TelemetryStats::default())),
            max_events,
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&self, event: SearchEvent) {
        {
            let mut stats = lock(&self.stats);
            match &event {
                SearchEvent::Started { .. } => {
                    stats.searches += 1;
                }
                SearchEvent::Evaluated { .. } => {}
                SearchEvent::Matched { .. } => {
                    stats.matches += 1;
                }
                SearchEvent::BudgetExhausted { .. } => {
                    stats.budget_exhaustions += 1;
                }
                SearchEvent::Completed { status, evaluations, .. } => {
                    stats.evaluations += evaluations;
                    if *status != SearchStatus::Matched {
                        stats.not_found += 1;
                    }
                }
            }
        }

        let mut events = lock(&self.events);
        if self.max_events == 0 {
            return;
        }
        while events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Get current statistics
    pub fn get_stats(&self) -> TelemetryStats {
        lock(&self.stats).clone()
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get event count
    pub fn event_count(&self) -> usize {
        lock(&self.events).len()
    }

    /// Get recent events (last n)
    pub fn recent_events(&self, n: usize) -> Vec<SearchEvent> {
        let events = lock(&self.events);
        let start = events.len().saturating_sub(n);
        events.iter().skip(start).cloned().collect()
    }

    /// Fraction of searches that found a match
    pub fn match_rate(&self) -> f64 {
        let stats = lock(&self.stats);
        if stats.searches == 0 {
            0.0
        } else {
            stats.matches as f64 / stats.searches as f64
        }
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple telemetry display
pub struct TelemetryDisplay {
    collector: TelemetryCollector,
    verbosity: crate::cli::Verbosity,
}

impl TelemetryDisplay {
    /// Create a new display
    pub fn new(collector: TelemetryCollector, verbosity: crate::cli::Verbosity) -> Self {
        Self {
            collector,
            verbosity,
        }
    }

    /// Display summary statistics
    pub fn display_summary(&self) {
        if !self.verbosity.show_summary() {
            return;
        }
        let stats = self.collector.get_stats();
        let elapsed = self.collector.elapsed();

        eprintln!();
        eprintln!("Search Summary");
        eprintln!("─────────────────────────────────────");
        eprintln!("Duration:            {:?}", elapsed);
        eprintln!("Searches:            {}", stats.searches);
        eprintln!("Evaluations:         {}", stats.evaluations);
        eprintln!("Match rate:          {:.1}%", self.collector.match_rate() * 100.0);
        eprintln!("Budget exhaustions:  {}", stats.budget_exhaustions);
        eprintln!();
    }

    /// Check if should show detailed output
    pub fn should_show_details(&self) -> bool {
        self.verbosity.show_events()
    }
}
