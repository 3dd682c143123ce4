//! Deterministic stand-in data used when every upstream source is unavailable.
//!
//! Nothing here is random: the synthetic catalog is fixed, and the synthetic forecast
//! only varies with the date it is generated for (date keys and weekday names).

use crate::municipalities::search::lookup_by_code;
use crate::types::forecast::{DayForecast, ForecastCatalog, Period, PeriodOfDay};
use crate::types::municipality::Municipality;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Date-key format of synthetic forecasts (`dd/mm/yyyy`).
pub const SYNTHETIC_DATE_FORMAT: &str = "%d/%m/%Y";

const DEFAULT_CITY: &str = "Cidade Exemplo";
const DEFAULT_STATE: &str = "BR";

/// Ten state capitals with their official geocodes and coordinates.
pub fn synthetic_catalog() -> Vec<Municipality> {
    vec![
        Municipality::new(3550308, "São Paulo", "SP", "-23.5500", "-46.6333"),
        Municipality::new(3304557, "Rio de Janeiro", "RJ", "-22.9068", "-43.1729"),
        Municipality::new(3106200, "Belo Horizonte", "MG", "-19.9208", "-43.9378"),
        Municipality::new(5300108, "Brasília", "DF", "-15.7942", "-47.8825"),
        Municipality::new(4106902, "Curitiba", "PR", "-25.4284", "-49.2731"),
        Municipality::new(4314902, "Porto Alegre", "RS", "-30.0346", "-51.2302"),
        Municipality::new(2304400, "Fortaleza", "CE", "-3.7172", "-38.5434"),
        Municipality::new(2927408, "Salvador", "BA", "-12.9714", "-38.5014"),
        Municipality::new(2611606, "Recife", "PE", "-8.0476", "-34.8805"),
        Municipality::new(1302603, "Manaus", "AM", "-3.1190", "-60.0212"),
    ]
}

struct PeriodTemplate {
    icon_code: &'static str,
    summary: &'static str,
    temp_max: i32,
    temp_min: i32,
    uv_index: &'static str,
    solar_radiation: &'static str,
}

fn template(period: PeriodOfDay) -> PeriodTemplate {
    match period {
        PeriodOfDay::Morning => PeriodTemplate {
            icon_code: "ps",
            summary: "Parcialmente nublado",
            temp_max: 25,
            temp_min: 18,
            uv_index: "5",
            solar_radiation: "850",
        },
        PeriodOfDay::Afternoon => PeriodTemplate {
            icon_code: "pn",
            summary: "Parcialmente nublado",
            temp_max: 28,
            temp_min: 22,
            uv_index: "8",
            solar_radiation: "1200",
        },
        PeriodOfDay::Evening => PeriodTemplate {
            icon_code: "ec",
            summary: "Encoberto",
            temp_max: 22,
            temp_min: 19,
            uv_index: "0",
            solar_radiation: "0",
        },
    }
}

/// Brazilian Portuguese long weekday name, as shown in INMET forecasts.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn synthetic_period(date: NaiveDate, period: PeriodOfDay, city: &str, state: &str) -> Period {
    let t = template(period);
    Period {
        entity: "INMET".to_string(),
        state: state.to_string(),
        city: city.to_string(),
        weekday: weekday_name(date.weekday()).to_string(),
        icon_code: t.icon_code.to_string(),
        summary: t.summary.to_string(),
        temp_max: t.temp_max.to_string(),
        temp_min: t.temp_min.to_string(),
        humidity_max: "85".to_string(),
        humidity_min: "55".to_string(),
        wind_direction: "NE".to_string(),
        wind_intensity: "15".to_string(),
        icon_url: format!("https://portal.inmet.gov.br/img/tempo/{}.png", t.icon_code),
        pressure: Some("1013.2".to_string()),
        visibility: Some("10".to_string()),
        dew_point: Some("16".to_string()),
        uv_index: Some(t.uv_index.to_string()),
        solar_radiation: Some(t.solar_radiation.to_string()),
        wind_gust: Some("22".to_string()),
        feels_like_max: Some((t.temp_max + 2).to_string()),
        feels_like_min: Some((t.temp_min - 2).to_string()),
        rain_probability: Some("30".to_string()),
        rain_volume: Some("0.5".to_string()),
        sunrise: Some("06:30".to_string()),
        sunset: Some("17:45".to_string()),
        moon_phase: Some("Crescente".to_string()),
        wind_direction_degrees: Some("45".to_string()),
        cloud_cover: Some("40".to_string()),
        icon_numeric_code: None,
        temp_max_trend: None,
        temp_min_trend: None,
        season: None,
        source: None,
        extra: BTreeMap::new(),
    }
}

fn synthetic_day(date: NaiveDate, city: &str, state: &str) -> DayForecast {
    DayForecast {
        morning: synthetic_period(date, PeriodOfDay::Morning, city, state),
        afternoon: synthetic_period(date, PeriodOfDay::Afternoon, city, state),
        evening: synthetic_period(date, PeriodOfDay::Evening, city, state),
    }
}

/// Builds a two-day forecast (`today` and the day after) for `code`.
///
/// City and state are taken from [`synthetic_catalog`] when `code` is one of its
/// entries; otherwise placeholder names are used.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use inmet::synthetic_forecast;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let forecast = synthetic_forecast("3550308", today);
/// let days = forecast.days("3550308").unwrap();
/// assert!(days.contains_key("15/01/2024"));
/// assert!(days.contains_key("16/01/2024"));
/// ```
pub fn synthetic_forecast(code: &str, today: NaiveDate) -> ForecastCatalog {
    let catalog = synthetic_catalog();
    let (city, state) = lookup_by_code(code, &catalog)
        .map(|m| (m.name.as_str(), m.state.as_str()))
        .unwrap_or((DEFAULT_CITY, DEFAULT_STATE));

    let mut days = BTreeMap::new();
    let tomorrow = today.checked_add_days(Days::new(1));
    for date in std::iter::once(today).chain(tomorrow) {
        days.insert(
            date.format(SYNTHETIC_DATE_FORMAT).to_string(),
            synthetic_day(date, city, state),
        );
    }

    let mut catalog = BTreeMap::new();
    catalog.insert(code.to_string(), days);
    ForecastCatalog(catalog)
}
