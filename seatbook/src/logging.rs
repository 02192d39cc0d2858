//! Stderr logging for seatbook.
//!
//! Two channels share stderr: user-facing status lines (confirmations,
//! warnings, errors) go through [`Logger`], while internal tracing in the
//! library goes through the `log` facade and is only visible when the host
//! installs a backend.

use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "SEATBOOK_LOG_MODE";

/// Verbosity of user-facing output, ordered from least to most chatty.
///
/// # Examples
///
/// ```
/// use seatbook::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Only errors.
    Quiet,
    /// Errors, warnings and status lines.
    Normal,
    /// Everything, including debug detail.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a level name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `quiet`, `normal` or `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// Writes user-facing messages to stderr according to a [`LogLevel`].
///
/// Errors are printed at every level so that a failing command never exits
/// silently.
///
/// # Examples
///
/// ```
/// use seatbook::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.status("Ticket booked successfully for Alice | Seat: 5");
/// logger.debug("not printed below Verbose");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger with the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns `true` if status lines are printed.
    #[must_use]
    pub fn shows_status(&self) -> bool {
        self.level >= LogLevel::Normal
    }

    /// Prints an error message.
    pub fn error(&self, message: &str) {
        eprintln!("ERROR: {message}");
    }

    /// Prints a warning message unless quiet.
    pub fn warn(&self, message: &str) {
        if self.shows_status() {
            eprintln!("WARN: {message}");
        }
    }

    /// Prints an unprefixed status line unless quiet.
    pub fn status(&self, message: &str) {
        if self.shows_status() {
            eprintln!("{message}");
        }
    }

    /// Prints an informational message when verbose.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Prints a debug message when verbose.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds a logger from CLI flags and `SEATBOOK_LOG_MODE`.
///
/// `verbose` wins over `quiet`, and either flag wins over the environment.
/// An unrecognized environment value falls back to [`LogLevel::Normal`].
///
/// # Examples
///
/// ```
/// use seatbook::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let level = env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal);
    Logger::new(level)
}
