use serde::{Deserialize, Serialize};

/// Base endpoint used when the launcher does not provide one.
pub const DEFAULT_API_ENDPOINT: &str = "http://127.0.0.1:8000/api/v2/";

/// Path under which the launcher serves `AppConfig`.
pub const APP_CONFIG_PATH: &str = "/app-config";

/// Runtime configuration handed from the launcher to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the DriveMatch API, e.g. `http://127.0.0.1:8000/api/v2/`.
    pub api_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
        }
    }
}
