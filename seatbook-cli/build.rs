//! Build script for seatbook-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here a second time.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    let format = || {
        Arg::new("format")
            .long("format")
            .help("Output format (defaults to the configured format)")
            .value_parser(["table", "json", "csv", "tsv"])
    };
    let seat = || {
        Arg::new("seat")
            .long("seat")
            .help("Seat number")
            .value_name("SEAT")
            .required(true)
    };

    Command::new("seatbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book and cancel seats on a single vehicle")
        .long_about(
            "Command-line tool for booking and cancelling seats on a single vehicle. \
             Without a subcommand, the interactive menu is started.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("SEATBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Use this reservation store instead of <data-dir>/reservations.json")
                .value_name("FILE")
                .global(true)
                .env("SEATBOOK_STORE"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read additional configuration from this YAML file")
                .value_name("FILE")
                .global(true)
                .env("SEATBOOK_CONFIG"),
        )
        .subcommands(vec![
            Command::new("seats")
                .about("Show the availability of every seat")
                .arg(format()),
            Command::new("book")
                .about("Book a seat")
                .long_about("Book a seat for a passenger and print the new booking")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Passenger name")
                        .value_name("NAME")
                        .required(true),
                )
                .arg(seat()),
            Command::new("cancel")
                .about("Cancel the booking on a seat")
                .long_about("Remove the booking holding a seat and print it")
                .arg(seat()),
            Command::new("list")
                .about("List all bookings")
                .long_about("Display all bookings in the order they were made")
                .arg(format()),
            Command::new("menu")
                .about("Start the interactive menu")
                .long_about("Run the numbered text menu on standard input and output"),
            Command::new("show-store")
                .about("Show the resolved store file path"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("seatbook.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
