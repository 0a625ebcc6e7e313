//! The `log` module defines an interface to the model's logging facilities.
//! It (re)exports the five logging macros: `error!`, `warn!`, `info!`,
//! `debug!` and `trace!` where `error!` represents the highest-priority log
//! messages and `trace!` the lowest. To emit a log message, simply use one of
//! these macros in your code:
//!
//! ```rust
//! use contagion::info;
//!
//! pub fn do_a_thing() {
//!     info!("A thing is being done.");
//! }
//! ```
//!
//! Logging is _disabled_ by default. Log messages are enabled/disabled using
//! the functions:
//!
//!  - `enable_logging()`: turns on all log messages
//!  - `disable_logging()`: turns off all log messages
//!  - `set_log_level(level: LevelFilter)`: enables only log messages with
//!    priority at least `level`

use env_logger::{Builder, Logger, WriteStyle};
pub use log::{debug, error, info, trace, warn, LevelFilter};
use log_reload::{ReloadHandle, ReloadLog};

use std::sync::{Mutex, OnceLock};

// Logging disabled.
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Off;
// Automatically determine if output supports color.
const DEFAULT_LOG_STYLE: WriteStyle = WriteStyle::Auto;

/// A global instance of the logging configuration.
static LOG_CONFIGURATION: OnceLock<Mutex<LogConfiguration>> = OnceLock::new();

/// Holds logging configuration so the configuration can persist across
/// reinitialization of the global logger.
///
/// The global logger cannot be installed more than once, so the installed
/// logger is a `log_reload::ReloadLog` wrapper whose inner `env_logger`
/// logger is swapped out whenever the level filter changes.
struct LogConfiguration {
    /// A global filter level of `LevelFilter::Off` disables logging.
    global_log_level: LevelFilter,
    /// A handle to the logger that can reload or modify its inner wrapped logger.
    log_handle: Option<ReloadHandle<Logger>>,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        LogConfiguration {
            global_log_level: DEFAULT_LOG_LEVEL,
            log_handle: None,
        }
    }
}

impl LogConfiguration {
    /// Constructs an `env_logger::Logger` with the current configuration.
    /// This method does not install the logger.
    fn build(&self) -> Logger {
        let mut builder = Builder::new();
        builder
            .filter_level(self.global_log_level)
            .write_style(DEFAULT_LOG_STYLE);
        builder.build()
    }
}

/// Enables the logger with no global level filter / full logging. Equivalent to
/// `set_log_level(LevelFilter::Trace)`.
pub fn enable_logging() {
    set_log_level(LevelFilter::Trace);
}

/// Disables logging completely. Equivalent to `set_log_level(LevelFilter::Off)`.
pub fn disable_logging() {
    set_log_level(LevelFilter::Off);
}

/// Sets the global log level. A global filter level of `LevelFilter::Off`
/// disables logging.
pub fn set_log_level(level: LevelFilter) {
    let mut log_configuration = LOG_CONFIGURATION
        .get_or_init(Mutex::default)
        .lock()
        .unwrap();
    log_configuration.global_log_level = level;
    set_logger(&mut log_configuration);
}

/// Initializes or replaces the existing global logger with a logger described
/// by the global log configuration.
fn set_logger(log_configuration: &mut LogConfiguration) {
    let logger = log_configuration.build();

    match &log_configuration.log_handle {
        None => {
            // Logger has not been installed yet.
            let wrapping_logger = ReloadLog::new(logger);
            log_configuration.log_handle = Some(wrapping_logger.handle());
            let result = log::set_boxed_logger(Box::new(wrapping_logger));
            if let Err(error) = result {
                error!(
                    "tried to initialize a global logger that has already been set: {}",
                    error
                );
            }
        }

        Some(handle) => {
            // Replace the existing logger.
            if let Err(error) = handle.replace(logger) {
                error!("failed to set logger: {}", error);
            }
        }
    }
    log::set_max_level(log_configuration.global_log_level);
}
