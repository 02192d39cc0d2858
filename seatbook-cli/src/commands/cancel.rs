//! Cancel command implementation.
//!
//! This module implements the `cancel` command, which removes the booking
//! holding a seat and prints it.

use crate::error::CliError;
use crate::utils::{load_configuration, open_manager, GlobalOptions};
use clap::Args;

/// Cancel the booking on a seat.
#[derive(Args)]
pub struct CancelCommand {
    /// Seat number
    #[arg(long, value_name = "SEAT", allow_negative_numbers = true)]
    pub seat: i64,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut manager = open_manager(global, &config)?;

        let removed = manager.cancel(self.seat)?;

        println!("{removed}");
        global.logger.status(&format!(
            "Ticket for Seat {} has been cancelled.",
            removed.seat()
        ));
        Ok(())
    }
}
