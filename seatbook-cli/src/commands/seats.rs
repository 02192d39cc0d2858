//! Seats command implementation.
//!
//! This module implements the `seats` command, which shows every seat on the
//! vehicle with its availability.

use crate::error::CliError;
use crate::utils::{load_configuration, open_manager, GlobalOptions};
use clap::Args;
use seatbook::{OutputFormat, Seat, SeatStatus};
use std::io::{self, Write};

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 2] = ["seat", "status"];

/// Show the availability of every seat.
#[derive(Args)]
pub struct SeatsCommand {
    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl SeatsCommand {
    /// Execute the seats command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let manager = open_manager(global, &config)?;
        let seats = manager.view_seats();

        global.logger.info(&format!(
            "{}: {} of {} seat(s) available",
            manager.transport_name(),
            manager.available_seats(),
            manager.total_seats()
        ));

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        match self.format.unwrap_or(config.effective_output_format()) {
            OutputFormat::Table => write_seats_table(&mut handle, &seats)?,
            OutputFormat::Json => write_seats_json(&mut handle, &seats)?,
            OutputFormat::Csv => write_seats_delimited(&mut handle, &seats, b',')?,
            OutputFormat::Tsv => write_seats_delimited(&mut handle, &seats, b'\t')?,
        }
        Ok(())
    }
}

/// Write one `Seat N: Status` line per seat.
pub fn write_seats_table<W: Write>(out: &mut W, seats: &[(Seat, SeatStatus)]) -> io::Result<()> {
    for (seat, status) in seats {
        writeln!(out, "Seat {seat}: {status}")?;
    }
    Ok(())
}

/// Write seats as a JSON array of `{seat, status}` objects.
fn write_seats_json<W: Write>(out: &mut W, seats: &[(Seat, SeatStatus)]) -> Result<(), CliError> {
    let json_data: Vec<serde_json::Value> = seats
        .iter()
        .map(|(seat, status)| {
            serde_json::json!({
                "seat": seat,
                "status": status,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &json_data)?;
    writeln!(out)?;
    Ok(())
}

/// Write seats as delimited output (CSV or TSV).
fn write_seats_delimited<W: Write>(
    out: &mut W,
    seats: &[(Seat, SeatStatus)],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS)?;
    for (seat, status) in seats {
        writer.write_record([seat.to_string(), status.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
