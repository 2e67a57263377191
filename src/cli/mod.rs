//! CLI module for subseqfind
//!
//! Handles command-line argument parsing and configuration management.

pub mod config;
pub mod args;

pub use config::{Config, TelemetryConfig};
pub use args::{parse_list, Args, Commands, Verbosity};
