//! Logger bootstrap for the CLI and embedding hosts.
//!
//! # Invariants
//! - The logger is started at most once per process.
//! - Re-initialization with the same level is a no-op.
//! - Re-initialization with a different level is rejected.
//! - Initialization never panics.

use crate::errors::{Result, UtilError};
use flexi_logger::{Logger, LoggerHandle};
use log::{debug, LevelFilter};
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: LevelFilter,
    _logger: LoggerHandle,
}

/// Start stderr logging at `level` (`error`, `warn`, `info`, `debug`, `trace`)
pub fn init_logging(level: &str) -> Result<()> {
    let requested = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level != requested {
            return Err(switch_refused(state.level, requested));
        }
        return Ok(());
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        let logger = Logger::try_with_str(requested.as_str())
            .map_err(|err| UtilError::ConfigError(format!("invalid log level `{requested}`: {err}")))?
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start()
            .map_err(|err| UtilError::ConfigError(format!("failed to start logger: {err}")))?;

        debug!(
            "event=logging_init level={} version={}",
            requested,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: requested,
            _logger: logger,
        })
    })?;

    // Another thread may have won the race with a different level
    if state.level != requested {
        return Err(switch_refused(state.level, requested));
    }
    Ok(())
}

fn switch_refused(current: LevelFilter, requested: LevelFilter) -> UtilError {
    UtilError::ConfigError(format!(
        "logging already initialized at `{}`; refusing to switch to `{}`",
        current, requested
    ))
}

/// Level for a CLI verbosity: quiet, normal, verbose, very verbose
pub fn level_for_verbosity(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn normalize_level(level: &str) -> Result<LevelFilter> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| UtilError::ConfigError(format!("unsupported log level `{}`", level)))
}
