//! Tunable constants and starting balances.
//!
//! Resolution order:
//! 1. `--config <path>` when given
//! 2. `config.toml` in the platform config dir
//! 3. Built-in defaults
//!
//! Every key is optional; missing keys keep their default.

use anyhow::{Context, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::BudgetState;

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Config {
    pub(crate) budget: BudgetState,
    pub(crate) forecast: ForecastConfig,
    pub(crate) advice: AdviceConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ForecastConfig {
    /// Share of a positive remaining budget assumed to be saved each month.
    pub(crate) savings_rate: Decimal,
    /// Amount moved into savings by one top-up.
    pub(crate) savings_increment: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AdviceConfig {
    /// Remaining budget above this share of income earns praise.
    pub(crate) praise_ratio: Decimal,
    /// One category above this share of income is flagged.
    pub(crate) concentration_ratio: Decimal,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            savings_rate: Decimal::new(30, 2),
            savings_increment: Decimal::new(100, 0),
        }
    }
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            praise_ratio: Decimal::new(2, 1),
            concentration_ratio: Decimal::new(3, 1),
        }
    }
}

impl Config {
    /// Load from an explicit path, the default location, or fall back to defaults.
    pub(crate) fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(p) => {
                if !p.exists() {
                    anyhow::bail!("Config file not found: {}", p.display());
                }
                Some(p.to_path_buf())
            }
            None => default_config_path().filter(|p| p.exists()),
        };

        match path {
            Some(p) => {
                tracing::info!(path = %p.display(), "loading config");
                let content = std::fs::read_to_string(&p)
                    .with_context(|| format!("Failed to read config: {}", p.display()))?;
                Self::parse(&content)
                    .with_context(|| format!("Invalid config file: {}", p.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub(crate) fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content).context("Invalid config TOML")?;
        let mut config = Self::default();

        if let Some(budget) = raw.budget {
            if let Some(v) = budget.income {
                config.budget.income = to_decimal(v, "budget.income")?;
            }
            if let Some(v) = budget.savings_goal {
                config.budget.savings_goal = to_non_negative(v, "budget.savings_goal")?;
            }
            if let Some(v) = budget.saved_amount {
                config.budget.saved_amount = to_non_negative(v, "budget.saved_amount")?;
            }
        }

        if let Some(forecast) = raw.forecast {
            if let Some(v) = forecast.savings_rate {
                config.forecast.savings_rate = to_ratio(v, "forecast.savings_rate")?;
            }
            if let Some(v) = forecast.savings_increment {
                let inc = to_decimal(v, "forecast.savings_increment")?;
                if inc <= Decimal::ZERO {
                    anyhow::bail!("forecast.savings_increment must be positive");
                }
                config.forecast.savings_increment = inc;
            }
        }

        if let Some(advice) = raw.advice {
            if let Some(v) = advice.praise_ratio {
                config.advice.praise_ratio = to_ratio(v, "advice.praise_ratio")?;
            }
            if let Some(v) = advice.concentration_ratio {
                config.advice.concentration_ratio = to_ratio(v, "advice.concentration_ratio")?;
            }
        }

        Ok(config)
    }
}

pub(crate) fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "budgetdash", "BudgetDash")
        .map(|d| d.config_dir().join("config.toml"))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    budget: Option<RawBudget>,
    forecast: Option<RawForecast>,
    advice: Option<RawAdvice>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBudget {
    income: Option<f64>,
    savings_goal: Option<f64>,
    saved_amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawForecast {
    savings_rate: Option<f64>,
    savings_increment: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAdvice {
    praise_ratio: Option<f64>,
    concentration_ratio: Option<f64>,
}

// TOML has no decimal type.
fn to_decimal(v: f64, key: &str) -> Result<Decimal> {
    Decimal::from_f64(v)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| anyhow::anyhow!("{key}: {v} is not a finite number"))
}

fn to_non_negative(v: f64, key: &str) -> Result<Decimal> {
    let d = to_decimal(v, key)?;
    if d < Decimal::ZERO {
        anyhow::bail!("{key} must not be negative, got {v}");
    }
    Ok(d)
}

fn to_ratio(v: f64, key: &str) -> Result<Decimal> {
    let d = Decimal::from_f64(v)
        .map(|d| d.round_dp(4))
        .ok_or_else(|| anyhow::anyhow!("{key}: {v} is not a finite number"))?;
    if d < Decimal::ZERO || d > Decimal::ONE {
        anyhow::bail!("{key} must be between 0 and 1, got {v}");
    }
    Ok(d)
}
