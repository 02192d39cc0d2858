//! Configuration system for seatbook.
//!
//! Configuration is layered from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SEATBOOK_*`)
//! 3. An explicit config file (`--config`)
//! 4. User config (`~/.seatbook/config.yaml`)
//! 5. Built-in defaults
//!
//! The vehicle settings only matter for a store that does not exist yet.
//!
//! # Examples
//!
//! ```no_run
//! use seatbook::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir("/home/me/.seatbook")
//!     .build()
//!     .unwrap();
//!
//! println!("{} seats", config.effective_total_seats());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
