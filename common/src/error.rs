use thiserror::Error;

/// Failure of a single DriveMatch API call.
///
/// Every variant renders with the same `Failed to fetch api` prefix, which is
/// what the UI shows the user; the variant only matters for logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("Failed to fetch api, error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("Failed to fetch api, error: HTTP status {0}")]
    Status(u16),

    /// The body was not the JSON shape the operation expects.
    #[error("Failed to fetch api, error: invalid response body: {0}")]
    Decode(String),

    /// The configured endpoint could not be turned into a request URL.
    #[error("Failed to fetch api, error: invalid endpoint: {0}")]
    Url(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(e: url::ParseError) -> Self {
        ClientError::Url(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_share_generic_prefix() {
        let errors = [
            ClientError::Network("connection refused".into()),
            ClientError::Status(502),
            ClientError::Decode("expected value".into()),
            ClientError::Url("relative URL without a base".into()),
        ];
        for error in errors {
            assert!(error.to_string().starts_with("Failed to fetch api, error: "));
        }
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(ClientError::from(err), ClientError::Decode(_)));
    }
}
