//! Interactive menu implementation.
//!
//! This module implements the `menu` command, a numbered text menu over the
//! reservation manager. It is also what runs when no subcommand is given.
//! Rejected bookings and cancellations are reported and the loop carries on;
//! end of input ends the session like choosing "Exit".

use crate::commands::list::{write_bookings_table, NO_BOOKINGS};
use crate::commands::seats::write_seats_table;
use crate::error::CliError;
use crate::utils::{load_configuration, open_manager, GlobalOptions};
use clap::Args;
use seatbook::store::Store;
use seatbook::{Error, ReservationManager};
use std::io::{self, BufRead, Write};

/// Start the interactive menu.
#[derive(Args)]
pub struct MenuCommand {}

impl MenuCommand {
    /// Execute the menu command on stdin and stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut manager = open_manager(global, &config)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        run_menu(&mut manager, stdin.lock(), stdout.lock())
    }
}

/// Menu entries, in display order.
const CHOICES: [&str; 5] = [
    "View Seat Availability",
    "Book a Ticket",
    "Cancel a Ticket",
    "View All Bookings",
    "Exit",
];

const INVALID_SEAT_INPUT: &str = "Please enter a valid seat number.";

/// Run the menu loop until the user exits or input ends.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails. Errors
/// from the manager are printed and the loop continues.
pub fn run_menu<S, R, W>(
    manager: &mut ReservationManager<S>,
    mut input: R,
    mut out: W,
) -> Result<(), CliError>
where
    S: Store,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(out, "\n=== Ticket Reservation System ===")?;
        for (i, choice) in CHOICES.iter().enumerate() {
            writeln!(out, "{}. {choice}", i + 1)?;
        }

        let Some(choice) = prompt(&mut input, &mut out, "Enter your choice: ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                writeln!(out, "\n--- Seat Availability ---")?;
                write_seats_table(&mut out, &manager.view_seats())?;
            }
            "2" => {
                let Some(name) = prompt(&mut input, &mut out, "Enter your name: ")? else {
                    break;
                };
                let Some(seat) = prompt(&mut input, &mut out, "Enter seat number: ")? else {
                    break;
                };
                match seat.trim().parse::<i64>() {
                    Ok(seat) => match manager.book(&name, seat) {
                        Ok(booking) => writeln!(
                            out,
                            "Ticket booked successfully for {} | Seat: {}",
                            booking.name(),
                            booking.seat()
                        )?,
                        Err(e) => writeln!(out, "{}", describe(&e))?,
                    },
                    Err(_) => writeln!(out, "{INVALID_SEAT_INPUT}")?,
                }
            }
            "3" => {
                let Some(seat) = prompt(&mut input, &mut out, "Enter seat number to cancel: ")?
                else {
                    break;
                };
                match seat.trim().parse::<i64>() {
                    Ok(seat) => match manager.cancel(seat) {
                        Ok(removed) => writeln!(
                            out,
                            "Ticket for Seat {} has been cancelled.",
                            removed.seat()
                        )?,
                        Err(e) => writeln!(out, "{}", describe(&e))?,
                    },
                    Err(_) => writeln!(out, "{INVALID_SEAT_INPUT}")?,
                }
            }
            "4" => {
                writeln!(out, "\n--- All Bookings ---")?;
                if manager.list_bookings().is_empty() {
                    writeln!(out, "{NO_BOOKINGS}")?;
                } else {
                    write_bookings_table(&mut out, manager.list_bookings())?;
                }
            }
            "5" => break,
            _ => writeln!(out, "Invalid choice. Try again.")?,
        }
    }

    writeln!(out, "Exiting... Thank you!")?;
    out.flush()?;
    Ok(())
}

/// Print `text` and read one line. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// User-facing text for a failed menu action.
fn describe(err: &Error) -> String {
    match err {
        Error::InvalidSeat { .. } => "Invalid seat number.".to_string(),
        Error::SeatTaken { .. } => "Seat already booked.".to_string(),
        Error::NotFound { .. } => "No booking found for that seat.".to_string(),
        Error::Validation { message, .. } => format!("Invalid input: {message}"),
        other => format!("Error: {other}"),
    }
}
