//! Booking records and their timestamps.
//!
//! A booking binds one seat to a passenger name and the moment the booking
//! was made. Bookings are immutable once created.

use std::fmt;

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::seat::Seat;

/// The fixed timestamp layout used on disk and in output.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A local date-time with whole-second precision.
///
/// Serialized as `YYYY-MM-DD HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use seatbook::BookingTime;
///
/// let time = BookingTime::parse("2024-01-15 10:30:45").unwrap();
/// assert_eq!(time.to_string(), "2024-01-15 10:30:45");
///
/// assert!(BookingTime::parse("15/01/2024").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingTime(NaiveDateTime);

impl BookingTime {
    /// Returns the current local time, truncated to the second.
    #[must_use]
    pub fn now() -> Self {
        Self(Local::now().naive_local().trunc_subsecs(0))
    }

    /// Parses a timestamp in the `YYYY-MM-DD HH:MM:SS` layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match the layout.
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(s, TIME_FORMAT).map(Self)
    }

    /// Returns the underlying date-time.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for BookingTime {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.trunc_subsecs(0))
    }
}

impl TryFrom<String> for BookingTime {
    type Error = chrono::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BookingTime> for String {
    fn from(value: BookingTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for BookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

/// A seat booked by a named passenger.
///
/// # Examples
///
/// ```
/// use seatbook::{Booking, BookingTime, Seat};
///
/// let seat = Seat::try_from(5u32).unwrap();
/// let time = BookingTime::parse("2024-01-15 10:30:45").unwrap();
/// let booking = Booking::new("  Alice ", seat, time).unwrap();
///
/// assert_eq!(booking.name(), "Alice");
/// assert_eq!(booking.seat(), seat);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    name: String,
    seat: Seat,
    time: BookingTime,
}

impl Booking {
    /// Creates a booking, trimming whitespace around the name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn new(
        name: impl AsRef<str>,
        seat: Seat,
        time: BookingTime,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name.as_ref())?;
        Ok(Self { name, seat, time })
    }

    /// Returns the passenger name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the booked seat.
    #[must_use]
    pub const fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns when the booking was made.
    #[must_use]
    pub const fn time(&self) -> BookingTime {
        self.time
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seat {} | Name: {} | Time: {}",
            self.seat, self.name, self.time
        )
    }
}

fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: "name".into(),
            message: "name must be non-empty after trimming whitespace".into(),
        });
    }
    Ok(trimmed.to_string())
}

/// Validation error for booking fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
