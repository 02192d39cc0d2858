//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the seatbook library.

use std::fs;
use std::path::{Path, PathBuf};

use seatbook::{
    Booking, BookingTime, JsonFileStore, ReservationManager, ReservationState, Seat, StoreConfig,
};
use tempfile::TempDir;

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A temporary directory holding a `reservations.json` store.
///
/// The directory is removed when the value is dropped.
#[allow(dead_code)]
pub struct TestStore {
    pub dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    /// Creates an empty directory; the store file does not exist yet.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reservations.json");
        Self { dir, path }
    }

    /// Creates a store file with the given raw contents.
    pub fn with_contents(contents: &str) -> Self {
        let store = Self::new();
        fs::write(&store.path, contents).unwrap();
        store
    }

    /// Returns a file store over this directory's store file.
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(StoreConfig::new(&self.path))
    }

    /// Opens a manager over this directory's store file.
    pub fn manager(&self) -> ReservationManager<JsonFileStore> {
        ReservationManager::open(self.store()).unwrap()
    }

    /// Reads the store file as untyped JSON.
    pub fn raw_json(&self) -> serde_json::Value {
        read_json(&self.path)
    }
}

/// Reads a file as untyped JSON.
#[allow(dead_code)]
pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Builder for reservation states with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::StateFixture;
/// let state = StateFixture::new()
///     .with_seats(8)
///     .with_booking("Alice", 3)
///     .build();
/// ```
#[allow(dead_code)]
pub struct StateFixture {
    state: ReservationState,
    next_minute: u32,
}

#[allow(dead_code)]
impl StateFixture {
    /// Starts from an empty "ExpressLine Bus" with 20 seats.
    pub fn new() -> Self {
        Self {
            state: ReservationState::default(),
            next_minute: 0,
        }
    }

    pub fn with_transport(mut self, name: &str) -> Self {
        self.state.transport_name = name.to_string();
        self
    }

    pub fn with_seats(mut self, total_seats: u32) -> Self {
        self.state.total_seats = total_seats;
        self
    }

    /// Appends a booking, one minute after the previous one.
    pub fn with_booking(mut self, name: &str, seat: u32) -> Self {
        let time =
            BookingTime::parse(&format!("2024-01-15 10:{:02}:00", self.next_minute % 60)).unwrap();
        self.next_minute += 1;
        self.state
            .bookings
            .push(Booking::new(name, Seat::try_from(seat).unwrap(), time).unwrap());
        self
    }

    pub fn build(self) -> ReservationState {
        self.state
    }
}
