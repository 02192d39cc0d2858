#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # seatbook
//!
//! A library for booking seats on a single vehicle.
//!
//! The reservation state (vehicle name, seat count and the list of bookings)
//! lives in a JSON file. A [`ReservationManager`] loads it once, applies
//! bookings and cancellations, and writes the whole state back after every
//! change.
//!
//! ## Core Types
//!
//! - [`Seat`] and [`SeatStatus`]: Seat numbers and their availability
//! - [`Booking`] and [`BookingTime`]: A passenger's claim on a seat
//! - [`ReservationState`]: The persisted document
//! - [`ReservationManager`]: Booking rules on top of a [`store::Store`]
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use seatbook::store::MemoryStore;
//! use seatbook::{Error, ReservationManager};
//!
//! let mut manager = ReservationManager::open(MemoryStore::new()).unwrap();
//! manager.book("Alice", 5).unwrap();
//!
//! assert!(matches!(manager.book("Bob", 5), Err(Error::SeatTaken { .. })));
//! assert!(matches!(manager.book("Bob", 21), Err(Error::InvalidSeat { .. })));
//! assert_eq!(manager.list_bookings().len(), 1);
//! ```

pub mod booking;
pub mod config;
pub mod error;
pub mod logging;
pub mod manager;
pub mod seat;
pub mod state;
pub mod store;

// Re-export key types at crate root for convenience
pub use booking::{Booking, BookingTime, TIME_FORMAT};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use manager::ReservationManager;
pub use seat::{Seat, SeatStatus};
pub use state::{ReservationState, DEFAULT_TOTAL_SEATS, DEFAULT_TRANSPORT_NAME, MAX_TOTAL_SEATS};
pub use store::{JsonFileStore, MemoryStore, Store, StoreConfig};
