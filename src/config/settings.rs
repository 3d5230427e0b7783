//! User settings for leftover-cli
//!
//! Display preferences, the default spending-window mode, and CSV defaults.
//! Every field has a default so older or partial files still load.

use serde::{Deserialize, Serialize};

use super::paths::LeftoverPaths;
use crate::error::BudgetError;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::models::money::DEFAULT_SYMBOL;
use crate::models::{DaysMode, Money};
use crate::services::ImportOptions;

/// User settings for leftover-cli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for input and display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How remaining days are counted for new sessions
    #[serde(default)]
    pub days_mode: DaysMode,

    /// Safety threshold for new sessions
    #[serde(default)]
    pub default_threshold: Money,

    /// File name used by `export` when no path is given
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Whether `import` also reads variable expense rows
    #[serde(default)]
    pub import_variable_rows: bool,

    /// Width of the bars in the dashboard chart, in characters
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_chart_width() -> usize {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            days_mode: DaysMode::default(),
            default_threshold: Money::zero(),
            export_file_name: default_export_file_name(),
            import_variable_rows: false,
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LeftoverPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LeftoverPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Import options implied by these settings
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            with_variable: self.import_variable_rows,
        }
    }

    /// Format an amount with the configured symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
