//! Utility functions for CLI operations.
//!
//! This module provides the helpers shared by every command: locating the
//! data directory and store file, loading configuration, and opening a
//! reservation manager over the store.

use crate::error::CliError;
use seatbook::store::{default_data_dir, STORE_FILE_NAME};
use seatbook::{Config, ConfigBuilder, JsonFileStore, Logger, ReservationManager};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the store file location.
    pub store: Option<PathBuf>,

    /// Additional configuration file.
    pub config_file: Option<PathBuf>,

    /// Logger built from the verbosity flags.
    pub logger: Logger,
}

/// Resolve the data directory: `--data-dir` if given, `~/.seatbook` otherwise.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Resolve the store file: `--store` if given, else `reservations.json`
/// inside the data directory.
///
/// # Errors
///
/// Returns `InvalidArguments` if `--store` names an existing directory.
pub fn resolve_store_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref store) = global.store {
        if store.is_dir() {
            return Err(CliError::InvalidArguments(format!(
                "--store must name a file, but {} is a directory",
                store.display()
            )));
        }
        return Ok(store.clone());
    }
    Ok(resolve_data_dir(global)?.join(STORE_FILE_NAME))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. `--config` file
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_data_dir(resolve_data_dir(global)?);
    if let Some(ref file) = global.config_file {
        builder = builder.with_config_file(file);
    }

    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    global.logger.debug(&format!("Configuration: {config:?}"));
    Ok(config)
}

/// Open the reservation manager over the resolved store file.
pub fn open_manager(
    global: &GlobalOptions,
    config: &Config,
) -> Result<ReservationManager<JsonFileStore>, CliError> {
    let path = resolve_store_path(global)?;
    global
        .logger
        .debug(&format!("Using store {}", path.display()));

    let store = JsonFileStore::new(config.store_config(&path));
    ReservationManager::open(store).map_err(CliError::from)
}
