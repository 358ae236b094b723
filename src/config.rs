//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `QUICKBITE_BACKEND_URL` | `http://localhost:8000` |
//! | `QUICKBITE_DELIVERY_FEE` | `30` |
//! | `QUICKBITE_CUSTOMER_NAME` | `Guest` |
//! | `QUICKBITE_ADDRESS` | `Demo Address` |
//! | `QUICKBITE_REQUEST_TIMEOUT_SECS` | unset (no timeout) |
//! | `QUICKBITE_SESSION_BUFFER` | `32` |

use crate::model::CustomerDetails;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const BACKEND_URL: &str = "QUICKBITE_BACKEND_URL";
pub const DELIVERY_FEE: &str = "QUICKBITE_DELIVERY_FEE";
pub const CUSTOMER_NAME: &str = "QUICKBITE_CUSTOMER_NAME";
pub const ADDRESS: &str = "QUICKBITE_ADDRESS";
pub const REQUEST_TIMEOUT_SECS: &str = "QUICKBITE_REQUEST_TIMEOUT_SECS";
pub const SESSION_BUFFER: &str = "QUICKBITE_SESSION_BUFFER";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend_url: String,
    /// Flat fee added to every non-empty cart.
    pub delivery_fee: f64,
    pub customer: CustomerDetails,
    pub request_timeout: Option<Duration>,
    /// Capacity of the session actor's channel.
    pub session_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            delivery_fee: 30.0,
            customer: CustomerDetails::default(),
            request_timeout: None,
            session_buffer: 32,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from any key/value source, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let delivery_fee: f64 = try_load(&lookup, DELIVERY_FEE, defaults.delivery_fee)?;
        if !delivery_fee.is_finite() || delivery_fee < 0.0 {
            return Err(invalid(DELIVERY_FEE, delivery_fee, "must be a non-negative amount"));
        }

        let session_buffer: usize = try_load(&lookup, SESSION_BUFFER, defaults.session_buffer)?;
        if session_buffer == 0 {
            return Err(invalid(SESSION_BUFFER, session_buffer, "must be at least 1"));
        }

        let request_timeout = match lookup(REQUEST_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = parse(REQUEST_TIMEOUT_SECS, &raw)?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            backend_url: try_load(&lookup, BACKEND_URL, defaults.backend_url)?,
            delivery_fee,
            customer: CustomerDetails {
                name: try_load(&lookup, CUSTOMER_NAME, defaults.customer.name)?,
                address: try_load(&lookup, ADDRESS, defaults.customer.address)?,
            },
            request_timeout,
            session_buffer,
        })
    }
}

fn try_load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => {
            debug!(key, "Loaded from environment");
            parse(key, &raw)
        }
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
            reason: e.to_string(),
        }
    })
}

fn invalid(key: &'static str, value: impl Display, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
