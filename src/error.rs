use crate::upstream::error::UpstreamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InmetError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build the HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}
