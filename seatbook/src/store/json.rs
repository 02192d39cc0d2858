//! JSON file store.
//!
//! The state is written as pretty-printed JSON with four-space indentation.
//! Saves go through a temporary file in the same directory that is synced and
//! then renamed over the target, so readers see either the old or the new
//! content and never a truncated file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use super::{Store, StoreConfig};
use crate::error::{Error, Result};
use crate::state::ReservationState;

/// A store backed by a single JSON file.
///
/// # Examples
///
/// ```
/// use seatbook::store::{JsonFileStore, Store, StoreConfig};
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = JsonFileStore::new(StoreConfig::new(dir.path().join("reservations.json")));
///
/// assert!(!store.exists());
/// assert!(store.read().unwrap().is_none());
///
/// let state = store.load().unwrap();
/// store.save(&state).unwrap();
/// assert!(store.exists());
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    /// Creates a store for the configured file. Nothing is read or written yet.
    #[must_use]
    pub const fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Returns the path of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Returns `true` if the store file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.config.path.is_file()
    }

    /// Reads the stored state, distinguishing an absent file from a bad one.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the file is not valid reservation JSON,
    /// [`Error::CorruptState`] if it breaks the reservation invariants, and
    /// [`Error::Io`] if it cannot be read.
    pub fn read(&self) -> Result<Option<ReservationState>> {
        let path = &self.config.path;
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No store at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let state: ReservationState =
            serde_json::from_str(&contents).map_err(|source| Error::Parse {
                path: path.clone(),
                source,
            })?;

        state
            .check_invariants()
            .map_err(|details| Error::CorruptState {
                path: path.clone(),
                details,
            })?;

        log::debug!(
            "Loaded {} booking(s) from {}",
            state.bookings.len(),
            path.display()
        );
        Ok(Some(state))
    }

    /// Directory that holds the store file and its temporary siblings.
    fn parent_dir(&self) -> PathBuf {
        match self.config.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Result<ReservationState> {
        Ok(self
            .read()?
            .unwrap_or_else(|| self.config.default_state()))
    }

    fn save(&self, state: &ReservationState) -> Result<()> {
        let dir = self.parent_dir();
        if !dir.exists() {
            if !self.config.auto_create {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("store directory {} does not exist", dir.display()),
                )));
            }
            fs::create_dir_all(&dir)?;
        }

        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        state
            .serialize(&mut serializer)
            .map_err(io::Error::from)?;
        buffer.push(b'\n');

        let mut tmp = NamedTempFile::new_in(&dir)?;
        // The temporary file is created 0600; keep the mode of the file it replaces.
        match fs::metadata(&self.config.path) {
            Ok(existing) => tmp.as_file().set_permissions(existing.permissions())?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        tmp.write_all(&buffer)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.config.path).map_err(|e| e.error)?;

        log::debug!(
            "Saved {} booking(s) to {}",
            state.bookings.len(),
            self.config.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{Booking, BookingTime};
    use crate::seat::Seat;
    use tempfile::tempdir;

    fn sample_state() -> ReservationState {
        let mut state = ReservationState::new("ExpressLine Bus", 20);
        for (name, seat, time) in [
            ("Alice", 5u32, "2024-01-15 10:30:45"),
            ("Bob", 2, "2024-01-15 10:31:02"),
        ] {
            state.bookings.push(
                Booking::new(
                    name,
                    Seat::try_from(seat).unwrap(),
                    BookingTime::parse(time).unwrap(),
                )
                .unwrap(),
            );
        }
        state
    }

    #[test]
    fn test_missing_file_reads_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(StoreConfig::new(dir.path().join("none.json")));
        assert!(store.read().unwrap().is_none());
        assert_eq!(store.load().unwrap(), ReservationState::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(StoreConfig::new(dir.path().join("r.json")));
        let state = sample_state();
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), state);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.json");
        let store = JsonFileStore::new(StoreConfig::new(&path));
        store.save(&sample_state()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("{\n    \"transport_name\": \"ExpressLine Bus\""));
        assert!(contents.contains("\n        {\n            \"name\": \"Alice\""));
        assert!(contents.ends_with("}\n"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("r.json");
        let store = JsonFileStore::new(StoreConfig::new(&path));
        store.save(&ReservationState::default()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_save_without_auto_create_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("r.json");
        let store = JsonFileStore::new(StoreConfig::new(&path).without_auto_create());
        let err = store.save(&ReservationState::default()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_leaves_no_temporary_files() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(StoreConfig::new(dir.path().join("r.json")));
        store.save(&sample_state()).unwrap();
        store.save(&ReservationState::default()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(StoreConfig::new(&path));
        assert!(matches!(store.load(), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_invariant_violation_is_corrupt_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("r.json");
        fs::write(
            &path,
            r#"{"transport_name": "Bus", "total_seats": 3, "bookings": [
                {"name": "A", "seat": 1, "time": "2024-01-01 00:00:00"},
                {"name": "B", "seat": 1, "time": "2024-01-01 00:00:01"}
            ]}"#,
        )
        .unwrap();
        let store = JsonFileStore::new(StoreConfig::new(&path));
        assert!(matches!(store.load(), Err(Error::CorruptState { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("r.json");
        let store = JsonFileStore::new(StoreConfig::new(&path));
        store.save(&ReservationState::default()).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        store.save(&sample_state()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert_eq!(store.load().unwrap(), sample_state());
    }

    #[test]
    fn test_relative_path_parent_dir() {
        let store = JsonFileStore::new(StoreConfig::new("reservations.json"));
        assert_eq!(store.parent_dir(), PathBuf::from("."));
    }
}
