//! Store configuration and the default data directory.
//!
//! This module provides the configuration passed into a [`JsonFileStore`],
//! including the file location and the default state used when the file does
//! not exist yet.
//!
//! [`JsonFileStore`]: super::JsonFileStore

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::state::{ReservationState, DEFAULT_TOTAL_SEATS, DEFAULT_TRANSPORT_NAME};

/// File name of the store inside the data directory.
pub const STORE_FILE_NAME: &str = "reservations.json";

/// Configuration for a JSON file store.
///
/// # Examples
///
/// ```
/// use seatbook::store::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/reservations.json")
///     .with_defaults("Night Coach", 40);
///
/// let state = config.default_state();
/// assert_eq!(state.transport_name, "Night Coach");
/// assert_eq!(state.total_seats, 40);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the store file.
    pub path: PathBuf,
    /// Whether to create missing parent directories on save.
    pub auto_create: bool,
    /// Transport name of the state returned when the file is absent.
    pub default_transport_name: String,
    /// Seat count of the state returned when the file is absent.
    pub default_total_seats: u32,
}

impl StoreConfig {
    /// Creates a new store configuration with default settings.
    ///
    /// Default settings:
    /// - `auto_create`: true
    /// - `default_transport_name`: `"ExpressLine Bus"`
    /// - `default_total_seats`: 20
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::store::StoreConfig;
    ///
    /// let config = StoreConfig::new("/tmp/reservations.json");
    /// assert_eq!(config.path.to_str().unwrap(), "/tmp/reservations.json");
    /// assert!(config.auto_create);
    /// ```
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            auto_create: true,
            default_transport_name: DEFAULT_TRANSPORT_NAME.to_string(),
            default_total_seats: DEFAULT_TOTAL_SEATS,
        }
    }

    /// Sets the vehicle used for a store that does not exist yet.
    #[must_use]
    pub fn with_defaults(mut self, transport_name: impl Into<String>, total_seats: u32) -> Self {
        self.default_transport_name = transport_name.into();
        self.default_total_seats = total_seats;
        self
    }

    /// Disables creation of missing parent directories.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Returns the empty state for a store that does not exist yet.
    #[must_use]
    pub fn default_state(&self) -> ReservationState {
        ReservationState::new(
            self.default_transport_name.clone(),
            self.default_total_seats,
        )
    }
}

/// Returns the default data directory for seatbook.
///
/// The default directory is `~/.seatbook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use seatbook::store::default_data_dir;
///
/// let data_dir = default_data_dir().unwrap();
/// println!("Data directory: {}", data_dir.display());
/// ```
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".seatbook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = StoreConfig::new("/tmp/test.json");
        assert_eq!(config.path, PathBuf::from("/tmp/test.json"));
        assert!(config.auto_create);
        assert_eq!(config.default_transport_name, "ExpressLine Bus");
        assert_eq!(config.default_total_seats, 20);
    }

    #[test]
    fn test_config_without_auto_create() {
        let config = StoreConfig::new("/tmp/test.json").without_auto_create();
        assert!(!config.auto_create);
    }

    #[test]
    fn test_default_state_uses_configured_vehicle() {
        let state = StoreConfig::new("/tmp/test.json")
            .with_defaults("Ferry", 3)
            .default_state();
        assert_eq!(state, ReservationState::new("Ferry", 3));
    }

    #[test]
    fn test_default_data_dir() {
        if let Some(home) = home::home_dir() {
            let dir = default_data_dir().unwrap();
            assert!(dir.starts_with(home));
            assert!(dir.ends_with(".seatbook"));
        }
    }
}
