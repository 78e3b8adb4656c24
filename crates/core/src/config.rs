//! Calculator configuration.

use std::fs;
use std::path::Path;

use chrono_tz::Tz;
use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DISPLAY_TIMEZONE, DEFAULT_YIELD_RATE, HISTORY_STORAGE_KEY, MAX_HISTORY_ITEMS,
};
use crate::errors::{Error, Result};

/// Settings shared by the history store, the calculator and the export.
///
/// Every field is optional in the JSON form; missing fields take their
/// defaults from `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorConfig {
    pub storage_key: String,
    pub max_history_items: usize,
    pub default_yield_rate: Decimal,
    pub display_timezone: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            storage_key: HISTORY_STORAGE_KEY.to_string(),
            max_history_items: MAX_HISTORY_ITEMS,
            default_yield_rate: DEFAULT_YIELD_RATE,
            display_timezone: DEFAULT_DISPLAY_TIMEZONE.to_string(),
        }
    }
}

impl CalculatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfigValue(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading calculator configuration from {}", path.display());
        let json = fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "storageKey must not be empty".to_string(),
            ));
        }
        if self.max_history_items == 0 {
            return Err(Error::InvalidConfigValue(
                "maxHistoryItems must be at least 1".to_string(),
            ));
        }
        if self.default_yield_rate <= Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "defaultYieldRate must be greater than 0, got {}",
                self.default_yield_rate
            )));
        }
        self.timezone()?;
        Ok(())
    }

    /// Parsed display timezone.
    pub fn timezone(&self) -> Result<Tz> {
        self.display_timezone.parse::<Tz>().map_err(|e| {
            Error::InvalidConfigValue(format!(
                "displayTimezone '{}' is not a known timezone: {}",
                self.display_timezone, e
            ))
        })
    }
}
