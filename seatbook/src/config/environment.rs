//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SEATBOOK_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// Recognized variables:
/// - `SEATBOOK_TRANSPORT_NAME`
/// - `SEATBOOK_TOTAL_SEATS`
/// - `SEATBOOK_OUTPUT_FORMAT`
/// - `SEATBOOK_DISABLE_AUTO_CREATE`
///
/// # Examples
///
/// ```no_run
/// use seatbook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric seat count, unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(name) = env::var("SEATBOOK_TRANSPORT_NAME") {
            config.transport_name = Some(name);
        }

        if let Ok(seats) = env::var("SEATBOOK_TOTAL_SEATS") {
            config.total_seats = Some(seats.trim().parse().map_err(|_| Error::Validation {
                field: "SEATBOOK_TOTAL_SEATS".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(format) = env::var("SEATBOOK_OUTPUT_FORMAT") {
            config.output_format =
                Some(OutputFormat::parse(&format).map_err(|message| Error::Validation {
                    field: "SEATBOOK_OUTPUT_FORMAT".into(),
                    message,
                })?);
        }

        if let Ok(val) = env::var("SEATBOOK_DISABLE_AUTO_CREATE") {
            config.disable_auto_create =
                Some(Self::parse_bool("SEATBOOK_DISABLE_AUTO_CREATE", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
