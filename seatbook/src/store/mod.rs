//! Persistence layer for the reservation state.
//!
//! A [`Store`] hands out snapshots of the [`ReservationState`] and accepts
//! full replacements of it. It never keeps a reference to the state it was
//! given. Two implementations ship with the library: [`JsonFileStore`], which
//! writes the state to a JSON file, and [`MemoryStore`], which keeps it in
//! process.
//!
//! # Examples
//!
//! ```no_run
//! use seatbook::store::{JsonFileStore, Store, StoreConfig};
//!
//! let store = JsonFileStore::new(StoreConfig::new("/tmp/reservations.json"));
//!
//! // A missing file yields the default state
//! let mut state = store.load().unwrap();
//! state.transport_name = "Night Coach".to_string();
//! store.save(&state).unwrap();
//!
//! assert_eq!(store.load().unwrap(), state);
//! ```

mod config;
mod json;
mod memory;

pub use config::{default_data_dir, StoreConfig, STORE_FILE_NAME};
pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::state::ReservationState;

/// Loads and saves whole reservation-state snapshots.
#[cfg_attr(test, mockall::automock)]
pub trait Store {
    /// Reads the current state.
    ///
    /// A store with nothing saved yet returns its default state rather than
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored content is malformed or cannot be read.
    fn load(&self) -> Result<ReservationState>;

    /// Replaces the stored state with `state`.
    ///
    /// A later [`Store::load`] never observes a partially written state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be written.
    fn save(&self, state: &ReservationState) -> Result<()>;
}

impl<S: Store + ?Sized> Store for &S {
    fn load(&self) -> Result<ReservationState> {
        (**self).load()
    }

    fn save(&self, state: &ReservationState) -> Result<()> {
        (**self).save(state)
    }
}
