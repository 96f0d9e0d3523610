//! Life configuration and validation.
//!
//! A [`LifeConfig`] decides where and when every new life begins, and
//! optionally seeds the random source. Validation collects every problem
//! instead of stopping at the first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eras;

/// Earliest and latest start years accepted.
pub const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1400..=1900;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Where every life is born.
    pub location: String,
    /// Birth year of the first life.
    pub start_year: u32,
    /// Seed for the random source; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            location: "England".to_string(),
            start_year: 1500,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("location is empty")]
    EmptyLocation,
    #[error("no eras are known for location {0:?}")]
    UnknownLocation(String),
    #[error("start year {0} is outside 1400..=1900")]
    YearOutOfRange(u32),
    #[error("start year {year} is not covered by any era of {location}")]
    YearWithoutEra { location: String, year: u32 },
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &LifeConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let location = config.location.trim();
    if location.is_empty() {
        errors.push(ConfigError::EmptyLocation);
    } else if !eras::is_known_location(location) {
        errors.push(ConfigError::UnknownLocation(config.location.clone()));
    }

    if !YEAR_RANGE.contains(&config.start_year) {
        errors.push(ConfigError::YearOutOfRange(config.start_year));
    } else if eras::is_known_location(location)
        && eras::era_for(location, config.start_year).is_none()
    {
        errors.push(ConfigError::YearWithoutEra {
            location: config.location.clone(),
            year: config.start_year,
        });
    }

    errors
}
