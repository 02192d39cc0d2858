//! Configuration schema definitions.
//!
//! This module defines the configuration structure for seatbook. Every field
//! is optional so that sources can be layered; the `effective_*` accessors
//! fill in the built-in defaults.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::state::{DEFAULT_TOTAL_SEATS, DEFAULT_TRANSPORT_NAME};
use crate::store::StoreConfig;

/// Complete configuration structure.
///
/// The vehicle settings only shape the state of a store that does not exist
/// yet. Once a store has been written, its own transport name and seat count
/// are authoritative.
///
/// # Examples
///
/// ```
/// use seatbook::config::Config;
///
/// let config = Config {
///     transport_name: Some("Night Coach".to_string()),
///     total_seats: Some(40),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_total_seats(), 40);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Display name of the vehicle for a new store.
    pub transport_name: Option<String>,

    /// Seat count for a new store.
    pub total_seats: Option<u32>,

    /// Default output format for listing commands.
    pub output_format: Option<OutputFormat>,

    /// Refuse to create a missing data directory on save.
    pub disable_auto_create: Option<bool>,
}

impl Config {
    /// Returns the configured transport name or `"ExpressLine Bus"`.
    #[must_use]
    pub fn effective_transport_name(&self) -> &str {
        self.transport_name
            .as_deref()
            .unwrap_or(DEFAULT_TRANSPORT_NAME)
    }

    /// Returns the configured seat count or 20.
    #[must_use]
    pub fn effective_total_seats(&self) -> u32 {
        self.total_seats.unwrap_or(DEFAULT_TOTAL_SEATS)
    }

    /// Returns the configured output format or [`OutputFormat::Table`].
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Builds the store configuration for the store file at `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::config::Config;
    ///
    /// let config = Config {
    ///     total_seats: Some(12),
    ///     disable_auto_create: Some(true),
    ///     ..Default::default()
    /// };
    /// let store_config = config.store_config("/tmp/reservations.json");
    /// assert_eq!(store_config.default_total_seats, 12);
    /// assert!(!store_config.auto_create);
    /// ```
    #[must_use]
    pub fn store_config(&self, path: impl AsRef<Path>) -> StoreConfig {
        let config = StoreConfig::new(path)
            .with_defaults(self.effective_transport_name(), self.effective_total_seats());
        if self.disable_auto_create.unwrap_or(false) {
            config.without_auto_create()
        } else {
            config
        }
    }
}

/// Output format for listing commands.
///
/// # Examples
///
/// ```
/// use seatbook::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!(OutputFormat::default(), OutputFormat::Table);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| format!("invalid output format: {s}"))
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}
