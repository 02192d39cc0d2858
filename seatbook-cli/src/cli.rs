//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookCommand, CancelCommand, CompletionsCommand, ListCommand, MenuCommand, SeatsCommand,
    ShowStoreCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking seats on a single vehicle.
///
/// Without a subcommand, the interactive menu is started.
#[derive(Parser)]
#[command(name = "seatbook")]
#[command(version, about = "Book and cancel seats on a single vehicle", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "SEATBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use this reservation store instead of <data-dir>/reservations.json
    #[arg(long, value_name = "FILE", global = true, env = "SEATBOOK_STORE")]
    pub store: Option<PathBuf>,

    /// Read additional configuration from this YAML file
    #[arg(long, value_name = "FILE", global = true, env = "SEATBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the availability of every seat
    Seats(SeatsCommand),

    /// Book a seat
    Book(BookCommand),

    /// Cancel the booking on a seat
    Cancel(CancelCommand),

    /// List all bookings
    List(ListCommand),

    /// Start the interactive menu
    Menu(MenuCommand),

    /// Show the resolved store file path
    ShowStore(ShowStoreCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
