//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `ORDERS_TICK_INTERVAL_SECS` | 60 |
//! | `ORDERS_TICK_DELTA_MINUTES` | 1 |
//! | `ORDERS_TAX_RATE_BPS` | 750 |
//! | `ORDERS_ACTOR_BUFFER` | 32 |
//! | `ORDERS_EVENT_CAPACITY` | 64 |
//!
//! Unset variables fall back to the default; set but unparsable ones are an error.

use crate::model::TaxRate;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// How often the countdown runs.
    pub tick_interval: Duration,
    /// Minutes subtracted from every order per countdown tick.
    pub tick_delta_minutes: u32,
    pub tax_rate: TaxRate,
    /// Capacity of the order actor's request channel.
    pub actor_buffer: usize,
    /// Capacity of the order update broadcast.
    pub event_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(60),
            tick_delta_minutes: 1,
            tax_rate: TaxRate::VAT,
            actor_buffer: 32,
            event_capacity: 64,
        }
    }
}

impl TrackerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let tick_secs: u64 = parse(&lookup, "ORDERS_TICK_INTERVAL_SECS", defaults.tick_interval.as_secs())?;
        if tick_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "ORDERS_TICK_INTERVAL_SECS",
                value: "0".into(),
                reason: "interval must be positive".into(),
            });
        }

        Ok(Self {
            tick_interval: Duration::from_secs(tick_secs),
            tick_delta_minutes: parse(&lookup, "ORDERS_TICK_DELTA_MINUTES", defaults.tick_delta_minutes)?,
            tax_rate: TaxRate::from_basis_points(parse(
                &lookup,
                "ORDERS_TAX_RATE_BPS",
                defaults.tax_rate.basis_points(),
            )?),
            actor_buffer: parse(&lookup, "ORDERS_ACTOR_BUFFER", defaults.actor_buffer)?.max(1),
            event_capacity: parse(&lookup, "ORDERS_EVENT_CAPACITY", defaults.event_capacity)?.max(1),
        })
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            })
        }
    }
}
