//! The full reservation state of one vehicle.
//!
//! This is the exact shape written to and read from the store.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::seat::{Seat, SeatStatus};

/// Transport name used when no store exists yet.
pub const DEFAULT_TRANSPORT_NAME: &str = "ExpressLine Bus";

/// Seat count used when no store exists yet.
pub const DEFAULT_TOTAL_SEATS: u32 = 20;

/// Largest seat count a vehicle may have.
pub const MAX_TOTAL_SEATS: u32 = 10_000;

/// Vehicle details and its bookings in insertion order.
///
/// # Examples
///
/// ```
/// use seatbook::ReservationState;
///
/// let state = ReservationState::default();
/// assert_eq!(state.transport_name, "ExpressLine Bus");
/// assert_eq!(state.total_seats, 20);
/// assert!(state.bookings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationState {
    /// Display name of the vehicle.
    pub transport_name: String,
    /// Number of seats, numbered `1..=total_seats`.
    pub total_seats: u32,
    /// Bookings in the order they were made.
    pub bookings: Vec<Booking>,
}

impl ReservationState {
    /// Creates an empty state for a vehicle.
    #[must_use]
    pub fn new(transport_name: impl Into<String>, total_seats: u32) -> Self {
        Self {
            transport_name: transport_name.into(),
            total_seats,
            bookings: Vec::new(),
        }
    }

    /// Returns the booking holding `seat`, if any.
    #[must_use]
    pub fn booking_for(&self, seat: Seat) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.seat() == seat)
    }

    /// Returns the status of `seat`.
    #[must_use]
    pub fn status_of(&self, seat: Seat) -> SeatStatus {
        if self.booking_for(seat).is_some() {
            SeatStatus::Booked
        } else {
            SeatStatus::Available
        }
    }

    /// Checks the invariants a loaded state must satisfy.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violation found: a seat count of
    /// zero or above [`MAX_TOTAL_SEATS`], a blank passenger name, a seat
    /// beyond the seat count, or a seat booked more than once.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.total_seats == 0 {
            return Err("total_seats must be at least 1".into());
        }
        if self.total_seats > MAX_TOTAL_SEATS {
            return Err(format!(
                "total_seats {} exceeds the limit of {MAX_TOTAL_SEATS}",
                self.total_seats
            ));
        }

        let mut seen = HashSet::with_capacity(self.bookings.len());
        for booking in &self.bookings {
            if !booking.seat().fits(self.total_seats) {
                return Err(format!(
                    "seat {} is outside 1-{}",
                    booking.seat(),
                    self.total_seats
                ));
            }
            if booking.name().trim().is_empty() {
                return Err(format!("booking for seat {} has no name", booking.seat()));
            }
            if !seen.insert(booking.seat()) {
                return Err(format!("seat {} is booked more than once", booking.seat()));
            }
        }

        Ok(())
    }
}

impl Default for ReservationState {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSPORT_NAME, DEFAULT_TOTAL_SEATS)
    }
}
