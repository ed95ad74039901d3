//! One request type per DriveMatch API operation.
//!
//! Each type implements `ApiRequest`, which ties together the path segment
//! under the base endpoint, the query-string parameters (with the exact names
//! the service expects) and the JSON shape of the response. The frontend's
//! client is generic over this trait, so adding an operation means adding a
//! type here.

use serde::de::DeserializeOwned;

use crate::model::car::ScoredAndGroupedCars;
use crate::model::search::SearchInfo;

/// An operation of the DriveMatch API.
pub trait ApiRequest {
    /// Path segment appended to the base endpoint, without leading slash.
    const PATH: &'static str;

    /// Parsed body of a successful response.
    type Response: DeserializeOwned;

    /// Query-string parameters in the order they are sent.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Scrapes a listings page and stores the result under `name`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapeRequest {
    pub name: String,
    pub url: String,
}

impl ApiRequest for ScrapeRequest {
    const PATH: &'static str = "scrape";
    /// The service acknowledges with a JSON string or `null`.
    type Response = Option<String>;

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("name", self.name.clone()), ("url", self.url.clone())]
    }
}

/// Scores and groups the cars of a stored search.
///
/// Weights are sent exactly as entered; range checks happen on the service.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub search_id: String,
    pub weight_hp: f64,
    pub weight_price: f64,
    pub weight_mileage: f64,
    pub weight_age: f64,
    /// Preferred car age in days.
    pub preferred_age: f64,
    pub filter_by_manufacturer: String,
    pub filter_by_model: String,
}

impl Default for AnalyzeRequest {
    fn default() -> Self {
        Self {
            search_id: String::new(),
            weight_hp: 1.0,
            weight_price: -1.0,
            weight_mileage: -1.0,
            weight_age: -1.0,
            preferred_age: 0.0,
            filter_by_manufacturer: String::new(),
            filter_by_model: String::new(),
        }
    }
}

impl ApiRequest for AnalyzeRequest {
    const PATH: &'static str = "analyze";
    type Response = ScoredAndGroupedCars;

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("search_id", self.search_id.clone()),
            ("weight_hp", self.weight_hp.to_string()),
            ("weight_price", self.weight_price.to_string()),
            ("weight_mileage", self.weight_mileage.to_string()),
            ("weight_age", self.weight_age.to_string()),
            ("preferred_age", self.preferred_age.to_string()),
            ("filter_by_manufacturer", self.filter_by_manufacturer.clone()),
            ("filter_by_model", self.filter_by_model.clone()),
        ]
    }
}

/// Lists every stored search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchesRequest;

impl ApiRequest for SearchesRequest {
    const PATH: &'static str = "searches";
    type Response = Vec<SearchInfo>;

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
