//! TOML configuration loading and validation.

use std::path::Path;

use riskbook::format::{DisplayStyle, Grouping};
use riskbook::{PositionRiskCalculator, Rounding};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub calc: CalcConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Values used when the matching flag is omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    pub capital: Option<f64>,
    pub risk_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub rounding: Rounding,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub grouping: Grouping,
}

fn default_currency() -> String {
    "₹".into()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            grouping: Grouping::default(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }

    /// Load from `path` if given, else use built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config invariants.
    fn validate(&self) -> Result<()> {
        if let Some(capital) = self.defaults.capital {
            if !capital.is_finite() || capital < 0.0 {
                return Err(Error::Config(format!(
                    "defaults.capital must be >= 0 and finite, got {capital}"
                )));
            }
        }
        if let Some(risk) = self.defaults.risk_pct {
            if !risk.is_finite() || !(0.0..=100.0).contains(&risk) {
                return Err(Error::Config(format!(
                    "defaults.risk_pct must be in [0, 100], got {risk}"
                )));
            }
        }
        if self.display.currency.trim().is_empty() {
            return Err(Error::Config("display.currency must not be empty".into()));
        }
        Ok(())
    }

    /// Calculator using the configured rounding rule.
    pub fn calculator(&self) -> PositionRiskCalculator {
        PositionRiskCalculator::with_rounding(self.calc.rounding)
    }

    /// Display style from the `[display]` section.
    pub fn style(&self) -> DisplayStyle {
        DisplayStyle::new(self.display.currency.clone(), self.display.grouping)
    }
}
