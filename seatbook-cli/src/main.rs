//! Main entry point for the seatbook CLI.
//!
//! This is the command-line interface for the seatbook reservation system.
//! It provides commands for managing the seats of one vehicle:
//! - `seats`: Show seat availability
//! - `book`: Book a seat
//! - `cancel`: Cancel a booking
//! - `list`: List bookings
//! - `menu`: Interactive menu (the default)

use clap::Parser;
use seatbook_cli::cli::{Cli, Command};
use seatbook_cli::commands::MenuCommand;
use seatbook_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = seatbook::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        store: cli.store,
        config_file: cli.config,
        logger,
    };

    let result = match cli.command.unwrap_or(Command::Menu(MenuCommand {})) {
        Command::Seats(cmd) => cmd.execute(&global),
        Command::Book(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::Menu(cmd) => cmd.execute(&global),
        Command::ShowStore(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
