//! Command to show the resolved store file path.

use crate::error::CliError;
use crate::utils::{resolve_store_path, GlobalOptions};
use clap::Args;

/// Show the resolved store file path.
#[derive(Args)]
pub struct ShowStoreCommand {}

impl ShowStoreCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_store_path(global)?;
        if !path.exists() {
            global
                .logger
                .info("Store does not exist yet; it is created on the first booking");
        }
        println!("{}", path.display());
        Ok(())
    }
}
