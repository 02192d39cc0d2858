//! The reservation manager.
//!
//! [`ReservationManager`] owns the in-memory [`ReservationState`] for the
//! lifetime of the process and is the only thing that mutates it. Every
//! successful `book` or `cancel` is written through to the [`Store`] before
//! the call returns.

use crate::booking::{Booking, BookingTime};
use crate::error::{Error, Result};
use crate::seat::{Seat, SeatStatus};
use crate::state::ReservationState;
use crate::store::Store;

/// Books and cancels seats on one vehicle.
///
/// # Examples
///
/// ```
/// use seatbook::store::MemoryStore;
/// use seatbook::{ReservationManager, SeatStatus};
///
/// let mut manager = ReservationManager::open(MemoryStore::new()).unwrap();
///
/// let booking = manager.book("Alice", 5).unwrap();
/// assert_eq!(booking.name(), "Alice");
///
/// let seats = manager.view_seats();
/// assert_eq!(seats[4].1, SeatStatus::Booked);
///
/// let removed = manager.cancel(5).unwrap();
/// assert_eq!(removed, booking);
/// assert!(manager.list_bookings().is_empty());
/// ```
#[derive(Debug)]
pub struct ReservationManager<S: Store> {
    store: S,
    state: ReservationState,
}

impl<S: Store> ReservationManager<S> {
    /// Loads the state from `store` and takes ownership of both.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the state cannot be loaded.
    pub fn open(store: S) -> Result<Self> {
        let state = store.load()?;
        log::debug!(
            "Opened {} with {} of {} seat(s) booked",
            state.transport_name,
            state.bookings.len(),
            state.total_seats
        );
        Ok(Self { store, state })
    }

    /// Returns every seat with its status, in ascending seat order.
    #[must_use]
    pub fn view_seats(&self) -> Vec<(Seat, SeatStatus)> {
        Seat::all(self.state.total_seats)
            .map(|seat| (seat, self.state.status_of(seat)))
            .collect()
    }

    /// Books `seat` for `name`, stamped with the current local time.
    ///
    /// # Errors
    ///
    /// See [`ReservationManager::book_at`].
    pub fn book(&mut self, name: &str, seat: i64) -> Result<Booking> {
        self.book_at(name, seat, BookingTime::now())
    }

    /// Books `seat` for `name` with an explicit timestamp.
    ///
    /// The state is only touched once every check has passed. If the write to
    /// the store fails, the new booking is taken back out before the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`Error::InvalidSeat`] if `seat` is outside `1..=total_seats`
    /// - [`Error::SeatTaken`] if the seat already has a booking
    /// - [`Error::Validation`] if `name` is blank
    /// - the store's error if the new state cannot be saved
    pub fn book_at(&mut self, name: &str, seat: i64, time: BookingTime) -> Result<Booking> {
        let seat = self.checked_seat(seat)?;

        if self.state.booking_for(seat).is_some() {
            return Err(Error::SeatTaken { seat });
        }

        let booking = Booking::new(name, seat, time)?;

        self.state.bookings.push(booking.clone());
        if let Err(e) = self.store.save(&self.state) {
            self.state.bookings.pop();
            return Err(e);
        }

        log::debug!("Booked seat {seat} for {}", booking.name());
        Ok(booking)
    }

    /// Cancels the booking holding `seat` and returns it.
    ///
    /// If the write to the store fails, the booking is put back at its
    /// original position before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no booking holds `seat`, or the store's
    /// error if the new state cannot be saved.
    pub fn cancel(&mut self, seat: i64) -> Result<Booking> {
        let index = Seat::try_from(seat)
            .ok()
            .and_then(|s| self.state.bookings.iter().position(|b| b.seat() == s))
            .ok_or(Error::NotFound { seat })?;

        let removed = self.state.bookings.remove(index);
        if let Err(e) = self.store.save(&self.state) {
            self.state.bookings.insert(index, removed);
            return Err(e);
        }

        log::debug!("Cancelled seat {seat} held by {}", removed.name());
        Ok(removed)
    }

    /// Returns all bookings in the order they were made.
    #[must_use]
    pub fn list_bookings(&self) -> &[Booking] {
        &self.state.bookings
    }

    /// Returns the booking holding `seat`, if any.
    #[must_use]
    pub fn booking_for(&self, seat: i64) -> Option<&Booking> {
        Seat::try_from(seat)
            .ok()
            .and_then(|s| self.state.booking_for(s))
    }

    /// Returns the number of seats without a booking.
    #[must_use]
    pub fn available_seats(&self) -> usize {
        (self.state.total_seats as usize).saturating_sub(self.state.bookings.len())
    }

    /// Returns the vehicle's display name.
    #[must_use]
    pub fn transport_name(&self) -> &str {
        &self.state.transport_name
    }

    /// Returns the number of seats on the vehicle.
    #[must_use]
    pub const fn total_seats(&self) -> u32 {
        self.state.total_seats
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &ReservationState {
        &self.state
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn checked_seat(&self, seat: i64) -> Result<Seat> {
        let invalid = || Error::InvalidSeat {
            seat,
            total_seats: self.state.total_seats,
        };
        let seat = Seat::try_from(seat).map_err(|_| invalid())?;
        if seat.fits(self.state.total_seats) {
            Ok(seat)
        } else {
            Err(invalid())
        }
    }
}

#[cfg(test)]
mod proptests;
