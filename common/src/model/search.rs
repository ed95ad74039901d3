use serde::{Deserialize, Serialize};

/// Metadata about a previously run scrape, as listed by the `searches`
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchInfo {
    pub id: String,
    pub name: String,
    /// The listings page that was scraped.
    pub url: String,
    pub amount_of_cars: u64,
    /// When the scrape ran. Newer services send this as `timestamp`.
    #[serde(alias = "timestamp")]
    pub date: String,
}

/// Expands a search id prefix to the full id of a known search.
///
/// Users usually type only the first few characters of an id. The first
/// search whose id starts with `input` wins; if none matches (or `input` is
/// blank) the input is returned unchanged and the service decides.
pub fn resolve_search_id<'a>(input: &'a str, searches: &'a [SearchInfo]) -> &'a str {
    let prefix = input.trim();
    if prefix.is_empty() {
        return input;
    }
    searches
        .iter()
        .find(|search| search.id.starts_with(prefix))
        .map(|search| search.id.as_str())
        .unwrap_or(input)
}
