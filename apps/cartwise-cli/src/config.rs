//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                           | Default |
//! |------------------------------------|---------|
//! | `CARTWISE_COST_PER_DELIVERY_CENTS` | `100`   |
//! | `CARTWISE_COST_PER_PRODUCT_CENTS`  | `100`   |
//! | `CARTWISE_REPORT_FORMAT`           | `text`  |

use std::env;
use std::str::FromStr;

use cartwise_core::{DeliveryCostCalculator, Money};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Delivery cost per distinct category, in cents
    pub cost_per_delivery_cents: i64,

    /// Delivery cost per distinct product, in cents
    pub cost_per_product_cents: i64,

    /// How the report is printed
    pub report_format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidValue("CARTWISE_REPORT_FORMAT".to_string())),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CliConfig {
            cost_per_delivery_cents: parse_cents(&lookup, "CARTWISE_COST_PER_DELIVERY_CENTS", 100)?,
            cost_per_product_cents: parse_cents(&lookup, "CARTWISE_COST_PER_PRODUCT_CENTS", 100)?,
            report_format: lookup("CARTWISE_REPORT_FORMAT")
                .map(|v| v.parse::<ReportFormat>())
                .transpose()?
                .unwrap_or_default(),
        };

        Ok(config)
    }

    pub fn delivery_calculator(&self) -> DeliveryCostCalculator {
        DeliveryCostCalculator::new(
            Money::from_cents(self.cost_per_delivery_cents),
            Money::from_cents(self.cost_per_product_cents),
        )
    }
}

fn parse_cents<F>(lookup: &F, key: &str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let cents = match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string()))?,
        None => default,
    };

    if cents < 0 {
        return Err(ConfigError::NegativeCost(key.to_string()));
    }

    Ok(cents)
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("{0} must not be negative")]
    NegativeCost(String),
}
