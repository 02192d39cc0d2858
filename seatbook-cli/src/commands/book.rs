//! Book command implementation.
//!
//! This module implements the `book` command, which books one seat for a
//! passenger and prints the new booking.

use crate::error::CliError;
use crate::utils::{load_configuration, open_manager, GlobalOptions};
use clap::Args;

/// Book a seat.
#[derive(Args)]
pub struct BookCommand {
    /// Passenger name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Seat number
    #[arg(long, value_name = "SEAT", allow_negative_numbers = true)]
    pub seat: i64,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut manager = open_manager(global, &config)?;

        let booking = manager.book(&self.name, self.seat)?;

        println!("{booking}");
        global.logger.status(&format!(
            "Ticket booked successfully for {} | Seat: {}",
            booking.name(),
            booking.seat()
        ));
        Ok(())
    }
}
