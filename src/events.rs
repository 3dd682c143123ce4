//! Structured acquisition events and the sinks that receive them.
//!
//! The client never writes to a global logger directly. Every notable step is
//! described by an [`AcquisitionEvent`] and handed to the [`EventSink`] the client
//! was built with. [`LogSink`] (the default) forwards to the `log` facade;
//! [`RingBufferSink`] keeps the most recent entries in memory for display.

use chrono::{DateTime, Utc};
use log::Level;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Which upstream resource an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Catalog,
    Forecast,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Catalog => f.write_str("catalog"),
            Resource::Forecast => f.write_str("forecast"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AcquisitionEvent {
    /// A request is about to be served, from the cache or the network.
    Attempt {
        resource: Resource,
        url: String,
        attempt: usize,
        total: usize,
    },
    /// A source answered with usable data.
    Succeeded {
        resource: Resource,
        url: String,
        attempt: usize,
        cached: bool,
        items: usize,
    },
    /// A source could not be used; the next one (or the fallback) follows.
    SourceFailed {
        resource: Resource,
        url: String,
        attempt: usize,
        error: String,
    },
    /// Alias keys were copied into canonical fields.
    FieldsNormalized { code: String, fields: usize },
    /// A day was dropped because it does not parse into three periods.
    MalformedDay {
        code: String,
        date: String,
        reason: String,
    },
    /// Every source failed and synthetic data was returned.
    FallbackUsed { resource: Resource, items: usize },
    /// Every source failed and fallback is disabled.
    Unavailable { resource: Resource },
    /// The forecast code was rejected before any request.
    InvalidCode { code: String },
    /// The caller cancelled a forecast request.
    Cancelled { code: String, attempt: usize },
}

impl AcquisitionEvent {
    pub fn level(&self) -> Level {
        match self {
            AcquisitionEvent::Attempt { .. } | AcquisitionEvent::FieldsNormalized { .. } => {
                Level::Debug
            }
            AcquisitionEvent::Succeeded { .. } | AcquisitionEvent::Cancelled { .. } => Level::Info,
            AcquisitionEvent::SourceFailed { .. }
            | AcquisitionEvent::MalformedDay { .. }
            | AcquisitionEvent::FallbackUsed { .. }
            | AcquisitionEvent::InvalidCode { .. } => Level::Warn,
            AcquisitionEvent::Unavailable { .. } => Level::Error,
        }
    }
}

impl fmt::Display for AcquisitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquisitionEvent::Attempt {
                resource,
                url,
                attempt,
                total,
            } => write!(f, "{resource}: attempt {attempt}/{total}: {url}"),
            AcquisitionEvent::Succeeded {
                resource,
                url,
                attempt,
                cached,
                items,
            } => {
                let origin = if *cached { "cache" } else { "network" };
                write!(
                    f,
                    "{resource}: {items} items from {url} (attempt {attempt}, {origin})"
                )
            }
            AcquisitionEvent::SourceFailed {
                resource,
                url,
                attempt,
                error,
            } => write!(f, "{resource}: attempt {attempt} failed for {url}: {error}"),
            AcquisitionEvent::FieldsNormalized { code, fields } => {
                write!(f, "forecast {code}: backfilled {fields} fields from aliases")
            }
            AcquisitionEvent::MalformedDay { code, date, reason } => {
                write!(f, "forecast {code}: dropped malformed day '{date}': {reason}")
            }
            AcquisitionEvent::FallbackUsed { resource, items } => {
                write!(f, "{resource}: all sources failed, using {items} synthetic items")
            }
            AcquisitionEvent::Unavailable { resource } => {
                write!(f, "{resource}: all sources failed and fallback is disabled")
            }
            AcquisitionEvent::InvalidCode { code } => {
                write!(f, "forecast: rejected municipality code {code:?}")
            }
            AcquisitionEvent::Cancelled { code, attempt } => {
                write!(f, "forecast {code}: cancelled during attempt {attempt}")
            }
        }
    }
}

/// Receives acquisition events. Implementations must be cheap and must not block.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &AcquisitionEvent);
}

/// Forwards every event to the `log` facade under the `inmet` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &AcquisitionEvent) {
        log::log!(target: "inmet", event.level(), "{event}");
    }
}

/// A recorded event, rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub level: Level,
    pub message: String,
}

/// Keeps the last `capacity` events in memory, oldest first.
#[derive(Debug)]
pub struct RingBufferSink {
    capacity: usize,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl RingBufferSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// A snapshot of the buffered entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<LogEntry>> {
        // A panic while holding the lock cannot leave the deque half-written.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventSink for RingBufferSink {
    fn record(&self, event: &AcquisitionEvent) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(LogEntry {
            at: Utc::now(),
            level: event.level(),
            message: event.to_string(),
        });
    }
}
