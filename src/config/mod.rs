use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::PathResolver,
    currency::{CurrencyCode, CurrencyFormatter, LocaleConfig, NegativeStyle},
    domain::BucketOrder,
    errors::{ExpenseError, Result},
    utils::persistence::write_atomic,
};

/// User preferences for the expense list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub negative_style: NegativeStyle,
    pub bucket_order: BucketOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            negative_style: NegativeStyle::Sign,
            bucket_order: BucketOrder::NewestFirst,
            store_path: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let code = self.currency.trim();
        if code.len() != 3 || !code.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(ExpenseError::Config(format!(
                "currency `{}` is not a three-letter ISO code",
                self.currency
            )));
        }
        if self.decimal_separator == self.grouping_separator {
            return Err(ExpenseError::Config(
                "decimal and grouping separators must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(CurrencyCode::new(self.currency.trim()))
            .with_locale(LocaleConfig {
                decimal_separator: self.decimal_separator,
                grouping_separator: self.grouping_separator,
            })
            .with_negative_style(self.negative_style)
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(PathResolver::base_dir())
    }

    /// Directories are only created when the configuration is saved.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: PathResolver::config_file_in(&base),
            base,
        }
    }

    /// Loads the saved configuration, falling back to defaults when absent.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|err| ExpenseError::Config(format!("{}: {}", self.path.display(), err)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    /// Store file named by the config, else `<base>/expenses.json`.
    pub fn store_path(&self, config: &Config) -> PathBuf {
        config
            .store_path
            .clone()
            .unwrap_or_else(|| PathResolver::store_file_in(&self.base))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
