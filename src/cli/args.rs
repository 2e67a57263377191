//! Command-line argument parsing for subseqfind
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::errors::{Result, SearchError};

/// Default number of candidates printed by `enumerate`
pub const DEFAULT_ENUMERATE_LIMIT: usize = 1024;

/// subseqfind - Find the closest subsequence matching a target within a budget
#[derive(Parser, Debug)]
#[command(name = "subseqfind")]
#[command(version)]
#[command(about = "Budgeted search for the closest order-preserving subsequence", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except final result)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search ITEMS for the closest subsequence equal to the target
    Find {
        /// Items of the input sequence, in order
        #[arg(value_name = "ITEMS")]
        items: Vec<String>,

        /// Expected subsequence as a comma separated list
        #[arg(short, long, default_value = "")]
        target: String,

        /// Max. number of predicate evaluations (overrides configuration)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        max_evaluations: Option<i64>,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print candidates in the order they would be evaluated
    Enumerate {
        /// Items of the input sequence, in order
        #[arg(value_name = "ITEMS")]
        items: Vec<String>,

        /// Stop after this many candidates
        #[arg(short, long, default_value_t = DEFAULT_ENUMERATE_LIMIT)]
        limit: usize,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Reject argument combinations clap cannot express
    pub fn validate(&self) -> Result<()> {
        if self.quiet && self.verbose > 0 {
            return Err(SearchError::InvalidArgument(
                "Cannot combine --quiet with --verbose.".to_string(),
            ));
        }

        if let Commands::Enumerate { limit: 0, .. } = self.command {
            return Err(SearchError::InvalidArgument(
                "--limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Split a comma separated list, trimming items; the empty string is the empty list
pub fn parse_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|item| item.trim().to_string()).collect()
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse the configuration file representation
    pub fn from_config_str(value: &str) -> Option<Self> {
        match value {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Check if should show the telemetry summary
    pub fn show_summary(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }

    /// Check if should show detailed events
    pub fn show_events(&self) -> bool {
        matches!(self, Verbosity::VeryVerbose)
    }

    /// Most detailed log level emitted at this verbosity
    pub fn tracing_level(&self) -> tracing::Level {
        match self {
            Verbosity::Quiet => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::WARN,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::VeryVerbose => tracing::Level::TRACE,
        }
    }
}
