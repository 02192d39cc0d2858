//! Error types for the seatbook library.
//!
//! This module provides the error hierarchy for every operation in the
//! seatbook library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a seatbook error.
///
/// # Examples
///
/// ```
/// use seatbook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(20)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the seatbook library.
///
/// The first four variants are expected, user-facing failures that a caller
/// reports before carrying on. The rest indicate a corrupted or unwritable
/// store, or a broken configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The seat number lies outside `1..=total_seats`.
    #[error("invalid seat number {seat}: seats are numbered 1 to {total_seats}")]
    InvalidSeat {
        /// The rejected seat number.
        seat: i64,
        /// The number of seats on the vehicle.
        total_seats: u32,
    },

    /// The seat already has a booking.
    #[error("seat {seat} is already booked")]
    SeatTaken {
        /// The seat that was requested.
        seat: crate::seat::Seat,
    },

    /// No booking exists for the seat.
    #[error("no booking found for seat {seat}")]
    NotFound {
        /// The seat that was looked up.
        seat: i64,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The store exists but does not contain valid reservation JSON.
    #[error("malformed reservation store {}: {source}", path.display())]
    Parse {
        /// Path of the store file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The store parsed but breaks the reservation invariants.
    #[error("corrupt reservation store {}: {details}", path.display())]
    CorruptState {
        /// Path of the store file.
        path: PathBuf,
        /// Details about the violated invariant.
        details: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),
}

impl From<crate::booking::ValidationError> for Error {
    fn from(err: crate::booking::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error is an expected, user-facing failure.
    ///
    /// Recoverable errors leave the reservation state untouched; the caller
    /// reports them and continues.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::Error;
    ///
    /// let err = Error::NotFound { seat: 3 };
    /// assert!(err.is_recoverable());
    ///
    /// let err = Error::Io(std::io::Error::other("disk full"));
    /// assert!(!err.is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidSeat { .. }
                | Self::SeatTaken { .. }
                | Self::NotFound { .. }
                | Self::Validation { .. }
        )
    }

    /// Check if the error comes from reading or writing the store.
    #[must_use]
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::CorruptState { .. } | Self::Io(_)
        )
    }
}
