//! Logging bootstrap.
//!
//! Library code logs through the `log` macros using an `event=... key=value`
//! register. The binary starts a `flexi_logger` backend writing to stderr
//! so that diagnostics never mix with command output on stdout.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Starts the stderr logger at `level`.
///
/// Calling again with the same level is a no-op. Never panics.
///
/// # Errors
///
/// Returns an error when `level` is unsupported, when logging is already
/// running at a different level, or when the backend fails to start.
pub fn init_logging(level: &str) -> Result<(), String> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let logger = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        debug!("event=logging_init level={level} version={}", env!("CARGO_PKG_VERSION"));
        Ok(LoggingState { level, _logger: logger })
    })?;

    if state.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{level}`",
            state.level
        ));
    }
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "error" => Ok("error"),
        "warn" | "warning" => Ok("warn"),
        "info" => Ok("info"),
        "debug" => Ok("debug"),
        "trace" => Ok("trace"),
        other => Err(format!(
            "unsupported log level `{other}`; expected one of off, error, warn, info, debug, trace"
        )),
    }
}
