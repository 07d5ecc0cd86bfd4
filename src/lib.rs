//! studykit - utilities for a study-collaboration app
//!
//! Pages of the app fetch records (ideas, notes, chat messages, mood
//! boards) from a hosted document store and reshape them locally. This
//! crate holds that local logic:
//!
//! - **format**: localized dates, byte counts, text truncation
//! - **validation**: loose email check for forms
//! - **ids**: short ephemeral keys
//! - **collections**: date sorting, grouping, deduplication, tag editing
//! - **timing**: debounce and throttle wrappers on the tokio timer

pub mod errors;

// Re-export commonly used types
pub use errors::{Result, UtilError};

pub mod collections;
pub mod format;
pub mod ids;
pub mod timing;
pub mod validation;

// Ambient layer
pub mod cli;
pub mod config;
pub mod logging;
