use url::Url;

use crate::error::ClientError;
use crate::requests::ApiRequest;

/// Base URL of the DriveMatch API, normalised to end with exactly one `/`.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        Self {
            base: format!("{}/", trimmed),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Builds `{base}{R::PATH}?{query}` with percent-encoded parameters.
    ///
    /// Operations without parameters get no `?` at all.
    pub fn url_for<R: ApiRequest>(&self, request: &R) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base)?.join(R::PATH)?;
        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}
