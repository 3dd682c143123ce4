//! The client that acquires the municipality catalog and forecasts.
//!
//! Every acquisition has the same shape: try the upstream sources in order, return
//! the first usable answer as [`Fetched::Live`], and otherwise fall back to the
//! deterministic data in [`crate::fallback`] (or [`Fetched::Unavailable`] when the
//! fallback is disabled). Public acquisition methods never return an error; what
//! happened along the way is reported to the client's [`EventSink`].

use crate::config::InmetConfig;
use crate::error::InmetError;
use crate::events::{AcquisitionEvent, EventSink, LogSink, Resource};
use crate::fallback::{synthetic_catalog, synthetic_forecast};
use crate::forecast::endpoints::{ForecastEndpoint, CATALOG_PATH};
use crate::forecast::normalize::parse_forecast;
use crate::municipalities::locate_municipality::nearby;
use crate::municipalities::search::is_numeric_code;
use crate::types::fetched::Fetched;
use crate::types::forecast::ForecastCatalog;
use crate::types::municipality::{LatLon, Municipality};
use crate::upstream::error::UpstreamError;
use crate::upstream::fetcher::UpstreamFetcher;
use bon::bon;
use reqwest::Url;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Client for the INMET forecast API with caching and offline fallback.
///
/// One instance can serve many concurrent requests; the response cache is shared
/// between them.
///
/// # Examples
///
/// ```rust
/// # use inmet::{Inmet, InmetConfig, InmetError};
/// # use std::time::Duration;
/// # fn run() -> Result<(), InmetError> {
/// // Official API with default settings
/// let client = Inmet::new()?;
///
/// // A local mirror with a tighter timeout
/// let config = InmetConfig::builder()
///     .base_url("http://localhost:8080")
///     .request_timeout(Duration::from_secs(2))
///     .build();
/// let mirror = Inmet::builder().config(config).build()?;
/// assert_eq!(mirror.config().base_url, "http://localhost:8080");
/// # Ok(())
/// # }
/// ```
pub struct Inmet {
    config: InmetConfig,
    fetcher: UpstreamFetcher,
    sink: Arc<dyn EventSink>,
}

#[bon]
impl Inmet {
    /// Builds a client from a configuration and an event sink.
    ///
    /// Both are optional: the configuration defaults to [`InmetConfig::default()`]
    /// and events go to [`LogSink`] unless another sink is given.
    ///
    /// # Errors
    ///
    /// Returns [`InmetError::InvalidBaseUrl`] if `config.base_url` is not an absolute
    /// `http` or `https` URL, and [`InmetError::ClientBuild`] if the HTTP client
    /// cannot be created.
    #[builder(start_fn = builder, finish_fn = build)]
    #[doc(hidden)]
    pub fn from_parts(
        #[builder(default)] config: InmetConfig,
        sink: Option<Arc<dyn EventSink>>,
    ) -> Result<Self, InmetError> {
        let url = Url::parse(&config.base_url).map_err(|e| InmetError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(InmetError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        let fetcher = UpstreamFetcher::new(&config).map_err(InmetError::ClientBuild)?;
        Ok(Self {
            config,
            fetcher,
            sink: sink.unwrap_or_else(|| Arc::new(LogSink)),
        })
    }

    /// Creates a client for the official API with default settings.
    pub fn new() -> Result<Self, InmetError> {
        Self::builder().build()
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &InmetConfig {
        &self.config
    }

    /// Returns the municipality catalog.
    ///
    /// A live catalog is cached for [`InmetConfig::catalog_ttl`]. When the catalog
    /// endpoint fails (transport error, timeout, non-2xx status, invalid JSON, or a
    /// body that is not a list of municipalities) the ten-entry
    /// [`synthetic_catalog`] is returned instead.
    pub async fn municipalities(&self) -> Fetched<Vec<Municipality>> {
        let url = self.config.endpoint(CATALOG_PATH);
        self.emit(AcquisitionEvent::Attempt {
            resource: Resource::Catalog,
            url: url.clone(),
            attempt: 1,
            total: 1,
        });

        match self.load_catalog(&url).await {
            Ok((catalog, cached)) => {
                self.emit(AcquisitionEvent::Succeeded {
                    resource: Resource::Catalog,
                    url,
                    attempt: 1,
                    cached,
                    items: catalog.len(),
                });
                Fetched::Live(catalog)
            }
            Err(e) => {
                self.emit(AcquisitionEvent::SourceFailed {
                    resource: Resource::Catalog,
                    url,
                    attempt: 1,
                    error: e.describe(),
                });
                if !self.config.fallback {
                    self.emit(AcquisitionEvent::Unavailable {
                        resource: Resource::Catalog,
                    });
                    return Fetched::Unavailable;
                }
                let catalog = synthetic_catalog();
                self.emit(AcquisitionEvent::FallbackUsed {
                    resource: Resource::Catalog,
                    items: catalog.len(),
                });
                Fetched::Fallback(catalog)
            }
        }
    }

    /// Returns the daily forecast for the municipality with the given code.
    ///
    /// Equivalent to [`Inmet::forecast_with_cancellation`] with a token that is
    /// never cancelled.
    pub async fn forecast(&self, code: &str) -> Fetched<ForecastCatalog> {
        self.forecast_with_cancellation(code, &CancellationToken::new())
            .await
    }

    /// Returns the daily forecast for `code`, giving up early when `cancel` fires.
    ///
    /// The candidates in [`ForecastEndpoint::PRIORITY`] are tried strictly one after
    /// the other; the first that yields at least one complete day wins and later
    /// candidates are not contacted. Each candidate is bounded by
    /// [`InmetConfig::request_timeout`] on its own.
    ///
    /// `code` must be non-empty ASCII digits; anything else returns
    /// [`Fetched::Unavailable`] without contacting the network. Cancellation also
    /// returns [`Fetched::Unavailable`], and never synthetic data.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use inmet::Inmet;
    /// # use tokio_util::sync::CancellationToken;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), inmet::InmetError> {
    /// let client = Inmet::new()?;
    /// let cancel = CancellationToken::new();
    /// let forecast = client.forecast_with_cancellation("3550308", &cancel).await;
    /// if let Some(days) = forecast.data().and_then(|f| f.days("3550308")) {
    ///     for (date, day) in days {
    ///         println!("{date}: {} / {}", day.afternoon.temp_max, day.afternoon.temp_min);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn forecast_with_cancellation(
        &self,
        code: &str,
        cancel: &CancellationToken,
    ) -> Fetched<ForecastCatalog> {
        if !is_numeric_code(code) {
            self.emit(AcquisitionEvent::InvalidCode {
                code: code.to_string(),
            });
            return Fetched::Unavailable;
        }

        let total = ForecastEndpoint::PRIORITY.len();
        for (index, endpoint) in ForecastEndpoint::PRIORITY.iter().enumerate() {
            let attempt = index + 1;
            if cancel.is_cancelled() {
                return self.cancelled(code, attempt);
            }

            let url = self.config.endpoint(&endpoint.path(code));
            self.emit(AcquisitionEvent::Attempt {
                resource: Resource::Forecast,
                url: url.clone(),
                attempt,
                total,
            });

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return self.cancelled(code, attempt),
                result = self.load_forecast(&url) => result,
            };

            match result {
                Ok((forecast, cached)) => {
                    self.emit(AcquisitionEvent::Succeeded {
                        resource: Resource::Forecast,
                        url,
                        attempt,
                        cached,
                        items: forecast.day_count(),
                    });
                    return Fetched::Live(forecast);
                }
                Err(e) => self.emit(AcquisitionEvent::SourceFailed {
                    resource: Resource::Forecast,
                    url,
                    attempt,
                    error: e.describe(),
                }),
            }
        }

        if !self.config.fallback {
            self.emit(AcquisitionEvent::Unavailable {
                resource: Resource::Forecast,
            });
            return Fetched::Unavailable;
        }
        let forecast = synthetic_forecast(code, chrono::Local::now().date_naive());
        self.emit(AcquisitionEvent::FallbackUsed {
            resource: Resource::Forecast,
            items: forecast.day_count(),
        });
        Fetched::Fallback(forecast)
    }

    /// Finds catalog municipalities near `location`, closest first.
    ///
    /// The catalog is acquired through [`Inmet::municipalities`], so the outcome
    /// carries the same tag. Defaults are 5 results within 50 km.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use inmet::{Inmet, LatLon};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), inmet::InmetError> {
    /// let client = Inmet::new()?;
    /// let found = client
    ///     .nearby_municipalities()
    ///     .location(LatLon(-23.56, -46.64))
    ///     .max_distance_km(30.0)
    ///     .call()
    ///     .await;
    /// for (municipality, km) in found.data().into_iter().flatten() {
    ///     println!("{} ({:.1} km)", municipality.name, km);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn nearby_municipalities(
        &self,
        location: LatLon,
        limit: Option<usize>,
        max_distance_km: Option<f64>,
    ) -> Fetched<Vec<(Municipality, f64)>> {
        self.municipalities().await.map(|catalog| {
            nearby()
                .catalog(&catalog)
                .location(location)
                .maybe_limit(limit)
                .maybe_max_distance_km(max_distance_km)
                .call()
                .into_iter()
                .map(|(municipality, km)| (municipality.clone(), km))
                .collect()
        })
    }

    /// Fetches the catalog from the network or cache without falling back.
    pub async fn try_municipalities(&self) -> Result<Vec<Municipality>, InmetError> {
        let url = self.config.endpoint(CATALOG_PATH);
        let (catalog, _) = self.load_catalog(&url).await?;
        Ok(catalog)
    }

    /// Fetches a forecast from a single endpoint without falling back.
    ///
    /// Useful for checking which API generation a deployment still serves.
    pub async fn try_forecast(
        &self,
        endpoint: ForecastEndpoint,
        code: &str,
    ) -> Result<ForecastCatalog, InmetError> {
        let url = self.config.endpoint(&endpoint.path(code));
        let (forecast, _) = self.load_forecast(&url).await?;
        Ok(forecast)
    }

    /// Drops every cached upstream response.
    pub async fn clear_cache(&self) {
        self.fetcher.clear_cache().await;
    }

    async fn load_catalog(&self, url: &str) -> Result<(Vec<Municipality>, bool), UpstreamError> {
        let parsed = self
            .fetcher
            .get_parsed(url, self.config.catalog_ttl, |body| {
                serde_json::from_value::<Vec<Municipality>>(body)
                    .map_err(|e| UpstreamError::schema(url, e.to_string()))
            })
            .await?;
        Ok((parsed.data, parsed.cached))
    }

    async fn load_forecast(&self, url: &str) -> Result<(ForecastCatalog, bool), UpstreamError> {
        let parsed = self
            .fetcher
            .get_parsed(url, self.config.forecast_ttl, |body| {
                parse_forecast(url, body, self.sink.as_ref())
            })
            .await?;
        Ok((parsed.data, parsed.cached))
    }

    fn cancelled(&self, code: &str, attempt: usize) -> Fetched<ForecastCatalog> {
        self.emit(AcquisitionEvent::Cancelled {
            code: code.to_string(),
            attempt,
        });
        Fetched::Unavailable
    }

    fn emit(&self, event: AcquisitionEvent) {
        self.sink.record(&event);
    }
}
