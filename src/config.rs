use crate::convert::{Category, ConversionCategory, ConversionTable, ConvertError};
use crate::history::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub gst: GstConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    // Whole-category overrides of the built-in conversion table
    #[serde(default)]
    pub conversions: BTreeMap<String, ConversionCategory>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GstConfig {
    #[serde(default = "default_gst_rate")]
    pub default_rate: f64,

    // Rates offered as quick keys on the calculator
    #[serde(default = "default_quick_rates")]
    pub quick_rates: Vec<f64>,
}

impl Default for GstConfig {
    fn default() -> Self {
        Self {
            default_rate: default_gst_rate(),
            quick_rates: default_quick_rates(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,

    // Where the CLI persists history; none means no persistence
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
            path: None,
        }
    }
}

fn default_gst_rate() -> f64 {
    18.0
}

fn default_quick_rates() -> Vec<f64> {
    vec![5.0, 12.0, 18.0, 28.0]
}

fn default_history_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::load_from_str(&content)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        if !(0.0..=100.0).contains(&config.gst.default_rate) {
            return Err(format!(
                "gst.default_rate must be between 0 and 100, got {}",
                config.gst.default_rate
            )
            .into());
        }
        if config.history.capacity == 0 {
            return Err("history.capacity must be at least 1".into());
        }
        // Fail early on a broken table rather than at the first conversion.
        config.conversion_table()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in table with this configuration's overrides applied.
    pub fn conversion_table(&self) -> Result<ConversionTable, ConvertError> {
        let mut table = ConversionTable::default();
        for (name, units) in &self.conversions {
            let category: Category = name.parse()?;
            table.set(category, units.clone())?;
        }
        Ok(table)
    }
}
