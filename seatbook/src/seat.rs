//! Seat identifiers and seat status.
//!
//! Seats are numbered contiguously from 1. Whether a given seat exists on a
//! vehicle depends on its seat count, which is checked by the reservation
//! state rather than by [`Seat`] itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A seat number (1 or greater).
///
/// Seat 0 and negative numbers are never valid.
///
/// # Examples
///
/// ```
/// use seatbook::Seat;
///
/// let seat = Seat::try_from(5u32).unwrap();
/// assert_eq!(seat.value(), 5);
///
/// assert!(Seat::try_from(0u32).is_err());
/// assert!(Seat::try_from(-3i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Seat(u32);

impl Seat {
    /// The lowest seat number.
    pub const MIN: u32 = 1;

    /// Returns the underlying seat number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` if the seat exists on a vehicle with `total_seats` seats.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::Seat;
    ///
    /// let seat = Seat::try_from(20u32).unwrap();
    /// assert!(seat.fits(20));
    /// assert!(!seat.fits(19));
    /// ```
    #[must_use]
    pub const fn fits(self, total_seats: u32) -> bool {
        self.0 <= total_seats
    }

    /// Iterates over every seat of a vehicle with `total_seats` seats, ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use seatbook::Seat;
    ///
    /// let seats: Vec<u32> = Seat::all(3).map(Seat::value).collect();
    /// assert_eq!(seats, vec![1, 2, 3]);
    /// ```
    pub fn all(total_seats: u32) -> impl Iterator<Item = Seat> {
        (Self::MIN..=total_seats).map(Seat)
    }
}

impl TryFrom<u32> for Seat {
    type Error = InvalidSeatError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value < Self::MIN {
            Err(InvalidSeatError {
                value: i64::from(value),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<i64> for Seat {
    type Error = InvalidSeatError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v >= Self::MIN)
            .map(Self)
            .ok_or(InvalidSeatError { value })
    }
}

impl From<Seat> for u32 {
    fn from(seat: Seat) -> Self {
        seat.0
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for seat numbers below 1 or beyond `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSeatError {
    /// The rejected value.
    pub value: i64,
}

impl fmt::Display for InvalidSeatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat number {} must be a positive integer", self.value)
    }
}

impl std::error::Error for InvalidSeatError {}

/// Whether a seat currently has a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatStatus {
    /// No booking holds the seat.
    Available,
    /// A booking holds the seat.
    Booked,
}

impl SeatStatus {
    /// Returns `true` for [`SeatStatus::Booked`].
    #[must_use]
    pub const fn is_booked(self) -> bool {
        matches!(self, Self::Booked)
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Booked => write!(f, "Booked"),
        }
    }
}
