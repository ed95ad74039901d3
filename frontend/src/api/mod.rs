//! HTTP client for the DriveMatch API.
//!
//! Every operation is a single `GET` against `{endpoint}{path}` built by
//! `common::endpoint::Endpoint`. Failures are logged to the browser console
//! and returned as `ClientError`; there is no retry, backoff or timeout.

use common::endpoint::Endpoint;
use common::error::ClientError;
use common::model::car::ScoredAndGroupedCars;
use common::model::config::{AppConfig, APP_CONFIG_PATH};
use common::model::search::SearchInfo;
use common::requests::{AnalyzeRequest, ApiRequest, ScrapeRequest, SearchesRequest};
use gloo_console::{error, log};
use gloo_net::http::{Request, Response};

#[derive(Clone, Debug, PartialEq)]
pub struct DriveMatchClient {
    endpoint: Endpoint,
}

impl DriveMatchClient {
    pub fn new(api_endpoint: &str) -> Self {
        Self {
            endpoint: Endpoint::new(api_endpoint),
        }
    }

    /// Asks the service to scrape `url` and store the listings as `name`.
    pub async fn scrape(&self, name: &str, url: &str) -> Result<Option<String>, ClientError> {
        let request = ScrapeRequest {
            name: name.to_string(),
            url: url.to_string(),
        };
        self.fetch_api(&request).await
    }

    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<ScoredAndGroupedCars, ClientError> {
        self.fetch_api(request).await
    }

    pub async fn get_searches(&self) -> Result<Vec<SearchInfo>, ClientError> {
        self.fetch_api(&SearchesRequest).await
    }

    async fn fetch_api<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ClientError> {
        let result = self.send(request).await;
        if let Err(e) = &result {
            error!(format!("Error calling {}{}: {}", self.endpoint.as_str(), R::PATH, e));
        }
        result
    }

    async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ClientError> {
        let url = self.endpoint.url_for(request)?;
        let response = Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(response).await
    }
}

/// Rejects non-2xx responses, then parses the body as `T`.
async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

/// Fetches the launcher's `AppConfig`.
///
/// When the page is not served by the launcher (e.g. `trunk serve`), the
/// request fails and the compiled-in default endpoint is used.
pub async fn load_app_config() -> AppConfig {
    let result = match Request::get(APP_CONFIG_PATH).send().await {
        Ok(response) => decode::<AppConfig>(response).await,
        Err(e) => Err(ClientError::Network(e.to_string())),
    };

    match result {
        Ok(config) => {
            log!(format!("Using DriveMatch API at {}", config.api_endpoint));
            config
        }
        Err(e) => {
            let config = AppConfig::default();
            error!(format!(
                "Could not load {}: {}. Falling back to {}",
                APP_CONFIG_PATH, e, config.api_endpoint
            ));
            config
        }
    }
}
