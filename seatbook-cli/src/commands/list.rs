//! List command implementation.
//!
//! This module implements the `list` command, which displays all bookings
//! in the order they were made, in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_configuration, open_manager, GlobalOptions};
use clap::Args;
use seatbook::{Booking, OutputFormat};
use std::io::{self, Write};

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 3] = ["seat", "name", "time"];

/// Message shown instead of an empty table.
pub const NO_BOOKINGS: &str = "No bookings yet.";

/// List all bookings.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let manager = open_manager(global, &config)?;
        let bookings = manager.list_bookings();

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match self.format.unwrap_or(config.effective_output_format()) {
            OutputFormat::Table => {
                if bookings.is_empty() {
                    global.logger.status(NO_BOOKINGS);
                } else {
                    write_bookings_table(&mut handle, bookings)?;
                }
            }
            OutputFormat::Json => write_bookings_json(&mut handle, bookings)?,
            OutputFormat::Csv => write_bookings_delimited(&mut handle, bookings, b',')?,
            OutputFormat::Tsv => write_bookings_delimited(&mut handle, bookings, b'\t')?,
        }
        Ok(())
    }
}

/// Write one `Seat N | Name: X | Time: T` line per booking.
pub fn write_bookings_table<W: Write>(out: &mut W, bookings: &[Booking]) -> io::Result<()> {
    for booking in bookings {
        writeln!(out, "{booking}")?;
    }
    Ok(())
}

/// Write bookings as a JSON array in the store's booking shape.
fn write_bookings_json<W: Write>(out: &mut W, bookings: &[Booking]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, bookings)?;
    writeln!(out)?;
    Ok(())
}

/// Write bookings as delimited output (CSV or TSV).
fn write_bookings_delimited<W: Write>(
    out: &mut W,
    bookings: &[Booking],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS)?;
    for booking in bookings {
        writer.write_record([
            booking.seat().to_string(),
            booking.name().to_string(),
            booking.time().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
