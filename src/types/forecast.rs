//! Forecast wire types: a [`ForecastCatalog`] maps municipality codes to dated
//! [`DayForecast`]s, each split into three [`Period`]s.
//!
//! Field names follow the INMET JSON contract through `serde` renames. Every value
//! is carried as text, exactly as the upstream sends it.

use crate::types::text::{optional_text, text};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// One of the three fixed daily segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodOfDay {
    /// `manha`, 06:00 to 12:00.
    Morning,
    /// `tarde`, 12:00 to 18:00.
    Afternoon,
    /// `noite`, 18:00 to 06:00.
    Evening,
}

impl PeriodOfDay {
    /// All periods in chronological order.
    pub const ALL: [PeriodOfDay; 3] = [
        PeriodOfDay::Morning,
        PeriodOfDay::Afternoon,
        PeriodOfDay::Evening,
    ];

    /// The key used for this period in the upstream JSON.
    pub fn key(&self) -> &'static str {
        match self {
            PeriodOfDay::Morning => "manha",
            PeriodOfDay::Afternoon => "tarde",
            PeriodOfDay::Evening => "noite",
        }
    }
}

impl fmt::Display for PeriodOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A full weather snapshot for one period of one day.
///
/// The first block of fields is always present in a valid period. Optional
/// fields depend on the municipality and the upstream API generation. Keys that
/// are not part of the canonical schema are kept in [`Period::extra`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Period {
    /// Entity responsible for the data, e.g. "INMET".
    #[serde(rename = "entidade", deserialize_with = "text")]
    pub entity: String,
    /// State abbreviation.
    #[serde(rename = "uf", deserialize_with = "text")]
    pub state: String,
    /// City name.
    #[serde(rename = "cidade", deserialize_with = "text")]
    pub city: String,
    /// Weekday name, e.g. "Segunda-feira".
    #[serde(rename = "dia_semana", deserialize_with = "text")]
    pub weekday: String,
    /// Alphanumeric weather icon code, e.g. "ps".
    #[serde(rename = "ico", deserialize_with = "text")]
    pub icon_code: String,
    /// Textual summary, e.g. "Sol entre nuvens".
    #[serde(rename = "resumo", deserialize_with = "text")]
    pub summary: String,
    /// Maximum temperature in °C.
    #[serde(deserialize_with = "text")]
    pub temp_max: String,
    /// Minimum temperature in °C.
    #[serde(deserialize_with = "text")]
    pub temp_min: String,
    /// Maximum relative humidity in %.
    #[serde(rename = "umidade_max", deserialize_with = "text")]
    pub humidity_max: String,
    /// Minimum relative humidity in %.
    #[serde(rename = "umidade_min", deserialize_with = "text")]
    pub humidity_min: String,
    /// Prevailing wind direction, e.g. "Nordeste".
    #[serde(rename = "vento_dir", deserialize_with = "text")]
    pub wind_direction: String,
    /// Wind intensity.
    #[serde(rename = "vento_int", deserialize_with = "text")]
    pub wind_intensity: String,
    /// Full URL of the forecast icon.
    #[serde(rename = "icone", deserialize_with = "text")]
    pub icon_url: String,

    /// Atmospheric pressure in hPa.
    #[serde(
        rename = "pressao_atmosferica",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub pressure: Option<String>,
    /// Visibility in km.
    #[serde(
        rename = "visibilidade",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility: Option<String>,
    /// Dew point in °C.
    #[serde(
        rename = "ponto_orvalho",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dew_point: Option<String>,
    /// UV index.
    #[serde(
        rename = "indice_uv",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub uv_index: Option<String>,
    /// Solar radiation in W/m².
    #[serde(
        rename = "radiacao_solar",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub solar_radiation: Option<String>,
    /// Peak wind gust in km/h.
    #[serde(
        rename = "rajada_vento",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub wind_gust: Option<String>,
    /// Maximum perceived temperature in °C.
    #[serde(
        rename = "sensacao_termica_max",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub feels_like_max: Option<String>,
    /// Minimum perceived temperature in °C.
    #[serde(
        rename = "sensacao_termica_min",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub feels_like_min: Option<String>,
    /// Probability of precipitation in %.
    #[serde(
        rename = "probabilidade_chuva",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub rain_probability: Option<String>,
    /// Expected rain volume in mm.
    #[serde(
        rename = "volume_chuva",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub rain_volume: Option<String>,
    /// Sunrise time, e.g. "06:30".
    #[serde(
        rename = "nascer_sol",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub sunrise: Option<String>,
    /// Sunset time, e.g. "18:45".
    #[serde(
        rename = "por_sol",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub sunset: Option<String>,
    /// Moon phase, e.g. "Crescente".
    #[serde(
        rename = "fase_lua",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub moon_phase: Option<String>,
    /// Wind direction in degrees (0-360).
    #[serde(
        rename = "direcao_vento_graus",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub wind_direction_degrees: Option<String>,
    /// Cloud cover in %.
    #[serde(
        rename = "cobertura_nuvens",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub cloud_cover: Option<String>,
    /// Numeric weather icon code, e.g. "36".
    #[serde(
        rename = "cod_icone",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_numeric_code: Option<String>,
    /// Trend of the maximum temperature, e.g. "Estável".
    #[serde(
        rename = "temp_max_tende",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub temp_max_trend: Option<String>,
    /// Trend of the minimum temperature.
    #[serde(
        rename = "temp_min_tende",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub temp_min_trend: Option<String>,
    /// Season of the year, e.g. "Inverno".
    #[serde(
        rename = "estacao",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub season: Option<String>,
    /// Upstream system the data came from, e.g. "prevmet".
    #[serde(
        rename = "fonte",
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<String>,

    /// Any key outside the canonical schema, kept as raw JSON.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The forecast for one date: exactly one [`Period`] per [`PeriodOfDay`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayForecast {
    #[serde(rename = "manha")]
    pub morning: Period,
    #[serde(rename = "tarde")]
    pub afternoon: Period,
    #[serde(rename = "noite")]
    pub evening: Period,
}

impl DayForecast {
    pub fn period(&self, period: PeriodOfDay) -> &Period {
        match period {
            PeriodOfDay::Morning => &self.morning,
            PeriodOfDay::Afternoon => &self.afternoon,
            PeriodOfDay::Evening => &self.evening,
        }
    }

    /// Iterates the periods in chronological order.
    pub fn periods(&self) -> impl Iterator<Item = (PeriodOfDay, &Period)> {
        PeriodOfDay::ALL.into_iter().map(move |p| (p, self.period(p)))
    }
}

/// A complete forecast response: municipality code → date string → [`DayForecast`].
///
/// Date strings are kept exactly as the upstream endpoint emitted them; different
/// endpoint generations use different formats.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct ForecastCatalog(pub BTreeMap<String, BTreeMap<String, DayForecast>>);

impl ForecastCatalog {
    /// The dated forecasts for a municipality code, if present.
    pub fn days(&self, code: &str) -> Option<&BTreeMap<String, DayForecast>> {
        self.0.get(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Total number of days across all codes.
    pub fn day_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.day_count() == 0
    }
}
