use bon::Builder;
use std::time::Duration;

/// Base URL of the official INMET forecast API.
pub const DEFAULT_BASE_URL: &str = "https://apiprevmet3.inmet.gov.br";
/// The catalog changes rarely; keep it for a day.
pub const DEFAULT_CATALOG_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const DEFAULT_FORECAST_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(8);
pub const DEFAULT_USER_AGENT: &str = concat!("inmet-rs/", env!("CARGO_PKG_VERSION"));

/// Settings for an [`Inmet`](crate::Inmet) client.
///
/// Every field has a default, so `InmetConfig::default()` and
/// `InmetConfig::builder().build()` are equivalent.
///
/// # Examples
///
/// ```
/// use inmet::InmetConfig;
/// use std::time::Duration;
///
/// let config = InmetConfig::builder()
///     .base_url("http://localhost:8080")
///     .request_timeout(Duration::from_secs(2))
///     .fallback(false)
///     .build();
/// assert_eq!(config.base_url, "http://localhost:8080");
/// assert_eq!(config.forecast_ttl, Duration::from_secs(3600));
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct InmetConfig {
    /// Upstream base URL, without a trailing path.
    #[builder(into, default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    /// Cache horizon for the municipality catalog.
    #[builder(default = DEFAULT_CATALOG_TTL)]
    pub catalog_ttl: Duration,
    /// Cache horizon for each forecast endpoint response.
    #[builder(default = DEFAULT_FORECAST_TTL)]
    pub forecast_ttl: Duration,
    /// Upper bound for a single upstream attempt, connection included.
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
    /// Value of the `User-Agent` header sent upstream.
    #[builder(into, default = DEFAULT_USER_AGENT.to_string())]
    pub user_agent: String,
    /// Return synthetic data when every upstream source fails. When `false`, such
    /// calls return [`Fetched::Unavailable`](crate::Fetched::Unavailable).
    #[builder(default = true)]
    pub fallback: bool,
}

impl Default for InmetConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl InmetConfig {
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}
