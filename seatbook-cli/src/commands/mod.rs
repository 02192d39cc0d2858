//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `seats`: Show seat availability
//! - `book`: Book a seat
//! - `cancel`: Cancel the booking on a seat
//! - `list`: List all bookings
//! - `menu`: Interactive menu
//! - `show_store`: Show the resolved store file path
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod cancel;
pub mod completions;
pub mod list;
pub mod menu;
pub mod seats;
pub mod show_store;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use list::ListCommand;
pub use menu::{run_menu, MenuCommand};
pub use seats::SeatsCommand;
pub use show_store::ShowStoreCommand;
