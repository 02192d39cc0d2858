//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::state::MAX_TOTAL_SEATS;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use seatbook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let config = Config { total_seats: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank transport name or a seat count
    /// outside `1..=MAX_TOTAL_SEATS`.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref name) = config.transport_name {
            if name.trim().is_empty() {
                return Err(Error::Validation {
                    field: "transport_name".into(),
                    message: "Transport name cannot be empty".into(),
                });
            }
        }

        match config.total_seats {
            Some(0) => {
                return Err(Error::Validation {
                    field: "total_seats".into(),
                    message: "A vehicle needs at least one seat".into(),
                })
            }
            Some(seats) if seats > MAX_TOTAL_SEATS => {
                return Err(Error::Validation {
                    field: "total_seats".into(),
                    message: format!("At most {MAX_TOTAL_SEATS} seats are supported"),
                })
            }
            _ => {}
        }

        Ok(())
    }
}
