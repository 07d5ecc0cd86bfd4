//! Command-line argument parsing for studykit
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use crate::config::{Config, MAX_ID_LENGTH};
use crate::errors::Result;
use crate::format::Locale;
use crate::logging::level_for_verbosity;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// studykit - formatting and collection utilities for study-group data
#[derive(Parser, Debug)]
#[command(name = "studykit")]
#[command(version)]
#[command(about = "Format, validate and reshape study-group records", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Display locale (th, en); overrides the config file
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format a byte count (e.g. 1536 -> 1.5 KB)
    Size {
        /// Number of bytes
        bytes: u64,
    },

    /// Check whether an address looks like an email
    Email {
        /// Address to check
        address: String,
    },

    /// Generate short client-side ids
    Id {
        /// How many ids to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Characters per id (1-64); overrides the config file
        #[arg(
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
                .range(1..=MAX_ID_LENGTH as u64)
        )]
        length: Option<usize>,
    },

    /// Shorten text with an ellipsis
    Truncate {
        /// Text to shorten
        text: String,

        /// Maximum characters kept
        #[arg(short, long)]
        max: usize,
    },

    /// Uppercase the first letter
    Capitalize {
        /// Text to capitalize
        text: String,
    },

    /// Render an instant as date and time (now by default)
    Date {
        /// RFC 3339 timestamp, YYYY-MM-DD, or epoch milliseconds
        instant: Option<String>,
    },

    /// Render how long ago an instant was
    Ago {
        /// RFC 3339 timestamp, YYYY-MM-DD, or epoch milliseconds
        instant: String,
    },

    /// Sort a JSON collection by a date field (newest first)
    Sort {
        /// JSON array file, or - for stdin
        input: PathBuf,

        /// Date field name
        #[arg(short, long)]
        field: String,

        /// Oldest first
        #[arg(long)]
        ascending: bool,
    },

    /// Group a JSON collection by a field
    Group {
        /// JSON array file, or - for stdin
        input: PathBuf,

        /// Grouping field name
        #[arg(short, long)]
        field: String,
    },

    /// Drop records repeating an earlier value of a field
    Dedup {
        /// JSON array file, or - for stdin
        input: PathBuf,

        /// Identity field name
        #[arg(short, long)]
        field: String,
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

    /// Log level: explicit flags win over the config file
    pub fn log_level(&self, config: &Config) -> LevelFilter {
        match self.verbosity() {
            Verbosity::Normal => config
                .logging
                .level
                .parse()
                .unwrap_or(LevelFilter::Warn),
            _ => level_for_verbosity(self.quiet, self.verbose),
        }
    }

    /// Locale from the flag, falling back to the config file
    pub fn resolve_locale(&self, config: &Config) -> Result<Locale> {
        match &self.locale {
            Some(tag) => tag.parse(),
            None => Ok(config.display.locale),
        }
    }
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
}
