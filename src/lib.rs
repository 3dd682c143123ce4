mod config;
mod error;
mod events;
mod fallback;
mod forecast;
mod inmet;
mod municipalities;
mod types;
mod upstream;

pub use config::*;
pub use error::InmetError;
pub use inmet::*;

pub use events::{AcquisitionEvent, EventSink, LogEntry, LogSink, Resource, RingBufferSink};
pub use fallback::{synthetic_catalog, synthetic_forecast, weekday_name, SYNTHETIC_DATE_FORMAT};

pub use forecast::endpoints::ForecastEndpoint;
pub use forecast::normalize::{normalize_period, FIELD_ALIASES};

pub use municipalities::distance::{distance_km, EARTH_RADIUS_KM};
pub use municipalities::locate_municipality::{nearby, nearest};
pub use municipalities::search::{
    is_valid_code, lookup_by_code, search, BROWSE_LIMIT, MIN_TERM_CHARS, SEARCH_LIMIT,
};

pub use types::fetched::Fetched;
pub use types::forecast::{DayForecast, ForecastCatalog, Period, PeriodOfDay};
pub use types::municipality::{LatLon, Municipality};

pub use upstream::error::UpstreamError;

pub use tokio_util::sync::CancellationToken;
