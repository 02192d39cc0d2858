//! In-process store.

use std::cell::{Cell, RefCell};
use std::io;

use super::Store;
use crate::error::{Error, Result};
use crate::state::ReservationState;

/// A store that keeps its snapshot in memory.
///
/// Saves can be made to fail on demand, which makes it handy for exercising
/// error paths without touching the filesystem.
///
/// # Examples
///
/// ```
/// use seatbook::store::{MemoryStore, Store};
/// use seatbook::ReservationState;
///
/// let store = MemoryStore::new();
/// assert_eq!(store.load().unwrap(), ReservationState::default());
///
/// store.save(&ReservationState::new("Tram", 8)).unwrap();
/// assert_eq!(store.save_count(), 1);
/// assert_eq!(store.snapshot().unwrap().total_seats, 8);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RefCell<Option<ReservationState>>,
    default_state: ReservationState,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    /// Creates an empty store whose default is [`ReservationState::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `state`.
    #[must_use]
    pub fn with_state(state: ReservationState) -> Self {
        Self {
            snapshot: RefCell::new(Some(state)),
            ..Self::default()
        }
    }

    /// Makes subsequent saves fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Returns a copy of the last saved state.
    #[must_use]
    pub fn snapshot(&self) -> Option<ReservationState> {
        self.snapshot.borrow().clone()
    }

    /// Returns the number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<ReservationState> {
        Ok(self
            .snapshot
            .borrow()
            .clone()
            .unwrap_or_else(|| self.default_state.clone()))
    }

    fn save(&self, state: &ReservationState) -> Result<()> {
        if self.fail_saves.get() {
            return Err(Error::Io(io::Error::other("memory store is failing saves")));
        }
        *self.snapshot.borrow_mut() = Some(state.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
