//! Runtime state of the `DriveMatchComponent`.
//!
//! The result columns are stored already converted to `ListEntry`s: a
//! successful response replaces a column wholesale, a failed one leaves it
//! untouched.

use common::error::ClientError;
use common::model::car::ScoredAndGroupedCars;
use common::model::config::AppConfig;
use common::model::search::SearchInfo;
use common::view::{analysis_entries, ListEntry};

use crate::api::DriveMatchClient;

pub struct DriveMatchComponent {
    /// Client bound to the current endpoint; replaced once `/app-config` is
    /// known.
    pub client: DriveMatchClient,

    /// Searches as last listed by the service. Used for the searches column
    /// and for search-id prefix expansion.
    pub searches: Vec<SearchInfo>,

    /// Contents of the scored cars container.
    pub scored_entries: Vec<ListEntry>,

    /// Contents of the grouped cars container.
    pub grouped_entries: Vec<ListEntry>,

    /// Whether any analysis has completed; before that the result columns
    /// stay blank instead of showing "No results".
    pub analyzed: bool,

    /// Requests currently awaiting a response. The loading message is shown
    /// while this is non-zero.
    pub in_flight: u32,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl DriveMatchComponent {
    pub fn new(api_endpoint: Option<&str>) -> Self {
        let endpoint = api_endpoint
            .map(str::to_string)
            .unwrap_or_else(|| AppConfig::default().api_endpoint);
        Self {
            client: DriveMatchClient::new(&endpoint),
            searches: Vec::new(),
            scored_entries: Vec::new(),
            grouped_entries: Vec::new(),
            analyzed: false,
            in_flight: 0,
            loaded: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn request_started(&mut self) {
        self.in_flight += 1;
    }

    pub fn request_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Applies the outcome of a searches request. A failure empties the list
    /// and is handed back for reporting.
    pub fn apply_searches(&mut self, result: Result<Vec<SearchInfo>, ClientError>) -> Option<ClientError> {
        self.request_finished();
        match result {
            Ok(searches) => {
                self.searches = searches;
                None
            }
            Err(e) => {
                self.searches = Vec::new();
                Some(e)
            }
        }
    }

    /// Applies the outcome of an analyze request. Both result containers are
    /// replaced on success; on failure they keep what they showed before.
    pub fn apply_analysis(&mut self, result: Result<ScoredAndGroupedCars, ClientError>) -> Option<ClientError> {
        self.request_finished();
        match result {
            Ok(data) => {
                let (scored, grouped) = analysis_entries(&data);
                self.scored_entries = scored;
                self.grouped_entries = grouped;
                self.analyzed = true;
                None
            }
            Err(e) => Some(e),
        }
    }
}
