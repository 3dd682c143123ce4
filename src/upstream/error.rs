use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Request to {0} timed out")]
    Timeout(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON body from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    // The body is JSON but not the shape the endpoint promises
    #[error("Unexpected response shape from {url}: {reason}")]
    Schema { url: String, reason: String },
}

impl UpstreamError {
    pub(crate) fn from_reqwest(url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout(url.to_string(), e)
        } else if let Some(status) = e.status() {
            UpstreamError::HttpStatus {
                url: url.to_string(),
                status,
                source: e,
            }
        } else {
            UpstreamError::NetworkRequest(url.to_string(), e)
        }
    }

    pub(crate) fn schema(url: &str, reason: impl Into<String>) -> Self {
        UpstreamError::Schema {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    /// The error followed by its sources, joined with `": "`.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        message
    }
}
