//! Environment-driven configuration.
//!
//! | Variable         | Default          |
//! |------------------|------------------|
//! | `SERVER_ADDRESS` | `0.0.0.0:3000`   |
//! | `APP_NAME`       | `User CRUD API`  |
//! | `DOCS_URL`       | unset            |
//! | `APP_ENV`        | `development`    |

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_APP_NAME: &str = "User CRUD API";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse environment variable '{key}': {details}")]
    Parse { key: String, details: String },
}

/// Selects the log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env_or_default("APP_ENV", "development");
        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub address: SocketAddr,
    pub app_name: String,
    pub docs_url: Option<String>,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("SERVER_ADDRESS", &Self::default().address.to_string());
        let address = parse_address(&raw).map_err(|details| ConfigError::Parse {
            key: "SERVER_ADDRESS".to_string(),
            details,
        })?;

        Ok(Self {
            address,
            app_name: env_or_default("APP_NAME", DEFAULT_APP_NAME),
            docs_url: env_non_empty("DOCS_URL"),
            environment: Environment::from_env(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            app_name: DEFAULT_APP_NAME.to_string(),
            docs_url: None,
            environment: Environment::Development,
        }
    }
}

/// Parses `host:port`, or `:port` meaning all interfaces.
fn parse_address(raw: &str) -> Result<SocketAddr, String> {
    let raw = raw.trim();
    if let Some(port) = raw.strip_prefix(':') {
        let port: u16 = port.parse().map_err(|e| format!("{e}"))?;
        return Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)));
    }
    raw.parse().map_err(|e| format!("{e}"))
}

fn env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Empty values fall back to the default, like unset ones.
pub fn env_or_default(key: &str, default: &str) -> String {
    env_non_empty(key).unwrap_or_else(|| default.to_string())
}
