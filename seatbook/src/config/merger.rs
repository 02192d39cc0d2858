//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use seatbook::config::{Config, ConfigMerger};
///
/// let low = Config { total_seats: Some(10), ..Default::default() };
/// let high = Config { total_seats: Some(30), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.total_seats, Some(30));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources into a final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target. Fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.transport_name.is_some() {
            target.transport_name.clone_from(&source.transport_name);
        }

        if source.total_seats.is_some() {
            target.total_seats = source.total_seats;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.disable_auto_create.is_some() {
            target.disable_auto_create = source.disable_auto_create;
        }
    }
}
