//! Report settings loaded from a TOML file.
//!
//! ```toml
//! strategy = "Snowball"
//! extra_override = 300
//!
//! [engine]
//! max_months = 480
//! scenario_bumps = [0, 100, 500]
//! ```
//!
//! Every key is optional. The preferred strategy and the extra-payment
//! override are plain values here and are passed explicitly to each engine
//! call; nothing is kept between runs.

use std::fs;
use std::path::{Path, PathBuf};

use payoff_core::{EngineConfig, EngineConfigError, Strategy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid engine settings: {0}")]
    Engine(#[from] EngineConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Strategy highlighted as the household's chosen plan.
    pub strategy: Strategy,

    /// Fixed extra monthly payment. When absent, positive cashflow is used.
    pub extra_override: Option<Decimal>,

    pub engine: EngineConfig,
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(text)?;
        settings.engine.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Applies command-line overrides on top of the file values and
    /// re-validates the result.
    pub fn with_overrides(
        mut self,
        strategy: Option<Strategy>,
        extra_override: Option<Decimal>,
        scenario_bumps: Option<Vec<Decimal>>,
    ) -> Result<Self, SettingsError> {
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if extra_override.is_some() {
            self.extra_override = extra_override;
        }
        if let Some(bumps) = scenario_bumps {
            self.engine.scenario_bumps = bumps;
        }
        self.engine.validate()?;
        Ok(self)
    }
}
