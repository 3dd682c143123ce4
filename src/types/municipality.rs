//! Defines the municipality record served by the INMET catalog endpoint and the
//! coordinate type used for distance queries.

use crate::types::text::text;
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1),
/// both in decimal degrees.
///
/// # Examples
///
/// ```
/// use inmet::LatLon;
///
/// let sao_paulo = LatLon(-23.55, -46.63);
/// assert_eq!(sao_paulo.0, -23.55); // Latitude
/// assert_eq!(sao_paulo.1, -46.63); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// A single municipality from the INMET catalog.
///
/// The upstream contract transmits coordinates as decimal text; they are kept
/// verbatim and parsed on demand by [`Municipality::location`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Municipality {
    /// The municipality geocode (e.g. `3550308` for São Paulo). Unique within a catalog.
    #[serde(rename = "geocode")]
    pub code: u32,
    /// The official municipality name.
    #[serde(rename = "nome")]
    pub name: String,
    /// The state abbreviation (e.g. "SP", "RJ").
    #[serde(rename = "sigla")]
    pub state: String,
    /// Longitude in decimal degrees, as text.
    #[serde(deserialize_with = "text")]
    pub longitude: String,
    /// Latitude in decimal degrees, as text.
    #[serde(deserialize_with = "text")]
    pub latitude: String,
}

impl Municipality {
    pub(crate) fn new(code: u32, name: &str, state: &str, latitude: &str, longitude: &str) -> Self {
        Self {
            code,
            name: name.to_string(),
            state: state.to_string(),
            longitude: longitude.to_string(),
            latitude: latitude.to_string(),
        }
    }

    /// Parses the textual coordinates.
    ///
    /// Returns `None` if either coordinate is not a finite decimal number.
    pub fn location(&self) -> Option<LatLon> {
        let latitude = self.latitude.trim().parse::<f64>().ok()?;
        let longitude = self.longitude.trim().parse::<f64>().ok()?;
        (latitude.is_finite() && longitude.is_finite()).then_some(LatLon(latitude, longitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_catalog_entry() {
        let value = json!({
            "geocode": 3550308,
            "nome": "São Paulo",
            "sigla": "SP",
            "longitude": "-46.6333",
            "latitude": "-23.5500"
        });
        let municipality: Municipality = serde_json::from_value(value).unwrap();
        assert_eq!(municipality.code, 3550308);
        assert_eq!(municipality.name, "São Paulo");
        assert_eq!(municipality.location(), Some(LatLon(-23.55, -46.6333)));
    }

    #[test]
    fn test_numeric_coordinates_are_accepted() {
        let value = json!({
            "geocode": 3304557,
            "nome": "Rio de Janeiro",
            "sigla": "RJ",
            "longitude": -43.1729,
            "latitude": -22.9068
        });
        let municipality: Municipality = serde_json::from_value(value).unwrap();
        assert_eq!(municipality.latitude, "-22.9068");
        assert!(municipality.location().is_some());
    }

    #[test]
    fn test_unparseable_location() {
        let municipality = Municipality::new(1, "Nowhere", "XX", "abc", "-46.0");
        assert_eq!(municipality.location(), None);
        let municipality = Municipality::new(1, "Nowhere", "XX", "NaN", "-46.0");
        assert_eq!(municipality.location(), None);
    }
}
