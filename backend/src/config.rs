//! Launcher configuration, read from the environment.
//!
//! | variable                   | default                          |
//! |----------------------------|----------------------------------|
//! | `DRIVEMATCH_API_ENDPOINT`  | `http://127.0.0.1:8000/api/v2/`  |
//! | `DRIVEMATCH_HOST`          | `127.0.0.1`                      |
//! | `DRIVEMATCH_PORT`          | `8080`                           |
//! | `DRIVEMATCH_OPEN_BROWSER`  | `true` (`0`, `false`, `no` disable) |

use common::model::config::{AppConfig, DEFAULT_API_ENDPOINT};
use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_endpoint: String,
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as
    /// unset; an unparseable port falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Config {
            api_endpoint: get("DRIVEMATCH_API_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            host: get("DRIVEMATCH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: get("DRIVEMATCH_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            open_browser: get("DRIVEMATCH_OPEN_BROWSER")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The part of the configuration the frontend gets to see.
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            api_endpoint: self.api_endpoint.clone(),
        }
    }
}
