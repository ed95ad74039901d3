use common::error::ClientError;
use common::model::car::ScoredAndGroupedCars;
use common::model::config::AppConfig;
use common::model::search::SearchInfo;

pub enum Msg {
    ConfigLoaded(AppConfig),
    LoadSearches,
    SearchesLoaded(Result<Vec<SearchInfo>, ClientError>),
    Scrape,
    ScrapeFinished(Result<Option<String>, ClientError>),
    Analyze,
    AnalyzeFinished(Result<ScoredAndGroupedCars, ClientError>),
    /// A listed search was clicked; copy its id into the analyze form.
    SelectSearch(String),
}
