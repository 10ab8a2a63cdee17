//! # Configuration State
//!
//! Display and startup settings for the terminal front end.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     WESPLIT_CURRENCY_CODE=EUR                                          │
//! │     WESPLIT_CURRENCY_SYMBOL=€                                          │
//! │     WESPLIT_TIP=15                                                     │
//! │     WESPLIT_OUTPUT=json                                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $WESPLIT_CONFIG, or the platform config dir:                       │
//! │     ~/.config/wesplit/wesplit.toml (Linux)                             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     USD, $, 2 decimals, 20% tip, text output                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! currency_code = "EUR"
//! currency_symbol = "€"
//! currency_decimals = 2
//! default_tip_percentage = 15
//! output = "json"
//! ```
//!
//! Read-only after startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};
use wesplit_core::money::MAX_CURRENCY_DECIMALS;
use wesplit_core::{Money, SplitInputs, TipPercentage};

use crate::error::{AppError, AppResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "WESPLIT_CONFIG";

/// How snapshots are written to stdout.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable block per update
    #[default]
    Text,

    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::config(format!(
                "unknown output format '{}', expected text or json",
                other
            ))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Currency code (ISO 4217), shown in JSON output
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Tip selected when the form opens or is reset
    pub default_tip_percentage: u32,

    /// Output format
    pub output: OutputFormat,
}

impl Default for AppConfig {
    /// Returns the configuration used when nothing is set.
    ///
    /// ## Default Values
    /// - Currency: USD ($), 2 decimals
    /// - Tip: 20%
    /// - Output: text
    fn default() -> Self {
        AppConfig {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            default_tip_percentage: TipPercentage::DEFAULT.percent(),
            output: OutputFormat::Text,
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`wesplit.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`], reading variables through `lookup`.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(&lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reads a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::config(format!("cannot read {}: {}", path.display(), e)))?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `WESPLIT_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup("WESPLIT_CURRENCY_CODE") {
            debug!(currency_code = %code, "Overriding currency code from environment");
            self.currency_code = code;
        }

        if let Some(symbol) = lookup("WESPLIT_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(tip) = lookup("WESPLIT_TIP") {
            self.default_tip_percentage = tip.trim().parse().map_err(|_| {
                AppError::config(format!("WESPLIT_TIP must be a whole number, got '{}'", tip))
            })?;
        }

        if let Some(output) = lookup("WESPLIT_OUTPUT") {
            self.output = output.parse()?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.currency_code.len() != 3
            || !self.currency_code.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(AppError::config(format!(
                "currency_code must be a three-letter ISO 4217 code, got '{}'",
                self.currency_code
            )));
        }

        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(AppError::config(format!(
                "currency_decimals must be at most {}",
                MAX_CURRENCY_DECIMALS
            )));
        }

        TipPercentage::new(self.default_tip_percentage)
            .map_err(|e| AppError::config(format!("default_tip_percentage: {}", e)))?;

        Ok(())
    }

    /// Inputs shown when the form opens: empty check, two people, configured tip.
    pub fn initial_inputs(&self) -> AppResult<SplitInputs> {
        Ok(SplitInputs {
            tip_percentage: TipPercentage::new(self.default_tip_percentage)?,
            ..SplitInputs::default()
        })
    }

    /// Rounds an unrounded amount and formats it in the configured currency.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_terminal::state::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_amount(28.75).unwrap(), "$28.75");
    /// ```
    pub fn format_amount(&self, amount: f64) -> AppResult<String> {
        let money = Money::from_major_rounded(amount, self.currency_decimals)?;
        Ok(self.format_currency(money))
    }

    /// Formats a minor-unit amount as a currency string.
    pub fn format_currency(&self, money: Money) -> String {
        let minor = money.cents();
        let divisor = 10_i64.pow(u32::from(self.currency_decimals));
        let whole = minor / divisor;
        let frac = (minor % divisor).abs();

        format!(
            "{}{}{}",
            if minor < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "wesplit", "wesplit")
            .map(|dirs| dirs.config_dir().join("wesplit.toml"))
    }
}
