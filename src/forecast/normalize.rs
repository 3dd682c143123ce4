//! Turns a raw forecast body into a [`ForecastCatalog`].
//!
//! Different API generations name a few fields differently. Before typed parsing,
//! every period is run through [`FIELD_ALIASES`]: when the canonical key is absent
//! or blank, the first non-blank alias is copied into it. Days that still do not
//! parse into three periods are dropped and reported.

use crate::events::{AcquisitionEvent, EventSink};
use crate::types::forecast::{DayForecast, ForecastCatalog, PeriodOfDay};
use crate::upstream::error::UpstreamError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Canonical period key → alternate keys, in priority order.
pub const FIELD_ALIASES: &[(&str, &[&str])] = &[
    ("indice_uv", &["uv"]),
    ("vento_int", &["wind_speed", "velocidade_vento"]),
];

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// Applies [`FIELD_ALIASES`] to one period object and returns how many canonical
/// fields were filled in. Alias keys are left in place.
pub fn normalize_period(period: &mut Map<String, Value>) -> usize {
    let mut filled = 0;
    for (canonical, aliases) in FIELD_ALIASES {
        if !is_blank(period.get(*canonical)) {
            continue;
        }
        let replacement = aliases
            .iter()
            .map(|alias| period.get(*alias))
            .find(|value| !is_blank(*value))
            .flatten()
            .cloned();
        if let Some(value) = replacement {
            period.insert((*canonical).to_string(), value);
            filled += 1;
        }
    }
    filled
}

fn normalize_day(day: &mut Value) -> usize {
    let Some(day) = day.as_object_mut() else {
        return 0;
    };
    let mut filled = 0;
    for period in PeriodOfDay::ALL {
        if let Some(period) = day.get_mut(period.key()).and_then(Value::as_object_mut) {
            filled += normalize_period(period);
        }
    }
    filled
}

/// Normalizes and validates the body fetched from `url`.
///
/// The body must be an object keyed by municipality code, each holding an object
/// keyed by date. Malformed days are excluded; a body with no usable day at all is
/// a [`UpstreamError::Schema`] error.
pub(crate) fn parse_forecast(
    url: &str,
    body: Value,
    sink: &dyn EventSink,
) -> Result<ForecastCatalog, UpstreamError> {
    let Value::Object(codes) = body else {
        return Err(UpstreamError::schema(url, "expected an object keyed by municipality code"));
    };

    let mut catalog = BTreeMap::new();
    for (code, days) in codes {
        let Value::Object(days) = days else {
            sink.record(&AcquisitionEvent::MalformedDay {
                code: code.clone(),
                date: String::new(),
                reason: "expected an object keyed by date".to_string(),
            });
            continue;
        };

        let mut parsed = BTreeMap::new();
        let mut filled = 0;
        for (date, mut day) in days {
            filled += normalize_day(&mut day);
            match serde_json::from_value::<DayForecast>(day) {
                Ok(day) => {
                    parsed.insert(date, day);
                }
                Err(e) => sink.record(&AcquisitionEvent::MalformedDay {
                    code: code.clone(),
                    date,
                    reason: e.to_string(),
                }),
            }
        }

        if filled > 0 {
            sink.record(&AcquisitionEvent::FieldsNormalized {
                code: code.clone(),
                fields: filled,
            });
        }
        if !parsed.is_empty() {
            catalog.insert(code, parsed);
        }
    }

    if catalog.is_empty() {
        return Err(UpstreamError::schema(url, "no day with all three periods"));
    }
    Ok(ForecastCatalog(catalog))
}
