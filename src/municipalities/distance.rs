use crate::types::municipality::LatLon;
use haversine::{distance, Location as HaversineLocation, Units};

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers (haversine formula).
///
/// Identical points give `0.0`. Near-antipodal inputs can push the intermediate
/// term past 1 through rounding; those resolve to half the Earth's circumference.
///
/// # Examples
///
/// ```
/// use inmet::{distance_km, LatLon};
///
/// let sao_paulo = LatLon(-23.55, -46.63);
/// let rio = LatLon(-22.90, -43.17);
/// let d = distance_km(sao_paulo, rio);
/// assert!((d - 360.0).abs() < 10.0);
/// ```
pub fn distance_km(from: LatLon, to: LatLon) -> f64 {
    let d = distance(
        HaversineLocation {
            latitude: from.0,
            longitude: from.1,
        },
        HaversineLocation {
            latitude: to.0,
            longitude: to.1,
        },
        Units::Kilometers,
    );
    if d.is_nan() && !has_nan(from) && !has_nan(to) {
        std::f64::consts::PI * EARTH_RADIUS_KM
    } else {
        d
    }
}

fn has_nan(point: LatLon) -> bool {
    point.0.is_nan() || point.1.is_nan()
}
