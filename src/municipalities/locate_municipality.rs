use crate::municipalities::distance::distance_km;
use crate::types::municipality::{LatLon, Municipality};
use bon::builder;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Finds the catalog entry closest to `location`, with its distance in kilometers.
///
/// Linear scan over the catalog. On exactly equal distances the entry that comes
/// first in catalog order wins. Entries whose coordinates do not parse are skipped.
/// Returns `None` when no entry has usable coordinates (including an empty catalog).
///
/// # Examples
///
/// ```
/// use inmet::{nearest, synthetic_catalog, LatLon};
///
/// let catalog = synthetic_catalog();
/// let (municipality, km) = nearest(LatLon(-23.56, -46.64), &catalog).unwrap();
/// assert_eq!(municipality.name, "São Paulo");
/// assert!(km < 5.0);
/// ```
pub fn nearest(location: LatLon, catalog: &[Municipality]) -> Option<(&Municipality, f64)> {
    catalog
        .iter()
        .filter_map(|m| m.location().map(|at| (m, distance_km(location, at))))
        // `min_by_key` keeps the first of several equal minima.
        .min_by_key(|(_, km)| OrderedFloat(*km))
}

/// Finds up to `limit` municipalities within `max_distance_km` of `location`,
/// closest first.
///
/// This function uses a builder pattern.
///
/// # Arguments
///
/// * `.catalog(&[Municipality])`: **Required.** The catalog to search.
/// * `.location(LatLon)`: **Required.** The reference point.
/// * `.limit(usize)`: Optional. Maximum number of results. Defaults to `5`.
/// * `.max_distance_km(f64)`: Optional. Search radius in kilometers. Defaults to `50.0`.
///
/// Entries at equal distance keep their catalog order.
///
/// # Examples
///
/// ```
/// use inmet::{nearby, synthetic_catalog, LatLon};
///
/// let catalog = synthetic_catalog();
/// let around_rio = nearby()
///     .catalog(&catalog)
///     .location(LatLon(-22.9, -43.2))
///     .max_distance_km(500.0)
///     .call();
/// assert_eq!(around_rio[0].0.name, "Rio de Janeiro");
/// assert_eq!(around_rio.len(), 3); // Rio de Janeiro, Belo Horizonte, São Paulo
/// ```
#[builder]
pub fn nearby<'a>(
    catalog: &'a [Municipality],
    location: LatLon,
    limit: Option<usize>,
    max_distance_km: Option<f64>,
) -> Vec<(&'a Municipality, f64)> {
    let limit = limit.unwrap_or(5);
    let max_distance_km = max_distance_km.unwrap_or(50.0);
    if limit == 0 {
        return vec![];
    }

    let mut within: Vec<(&Municipality, f64)> = catalog
        .iter()
        .filter_map(|m| {
            let km = distance_km(location, m.location()?);
            (km <= max_distance_km).then_some((m, km))
        })
        .collect();

    // Stable sort: ties stay in catalog order.
    within.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    within.truncate(limit);
    within
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::synthetic_catalog;

    fn sp_and_rio() -> Vec<Municipality> {
        vec![
            Municipality::new(3550308, "São Paulo", "SP", "-23.55", "-46.63"),
            Municipality::new(3304557, "Rio de Janeiro", "RJ", "-22.90", "-43.17"),
        ]
    }

    #[test]
    fn test_nearest_exact_match() {
        let catalog = sp_and_rio();
        let (municipality, km) = nearest(LatLon(-23.55, -46.63), &catalog).unwrap();
        assert_eq!(municipality.code, 3550308);
        assert!(km.abs() < 1e-9, "{km}");
    }

    #[test]
    fn test_nearest_is_never_farther_than_any_entry() {
        let catalog = synthetic_catalog();
        let probes = [
            LatLon(-23.0, -45.0),
            LatLon(-10.0, -50.0),
            LatLon(-31.5, -52.0),
            LatLon(0.0, 0.0),
            LatLon(40.7, -74.0),
        ];
        for probe in probes {
            let (best, best_km) = nearest(probe, &catalog).unwrap();
            assert_eq!(best_km, distance_km(probe, best.location().unwrap()));
            for other in &catalog {
                let km = distance_km(probe, other.location().unwrap());
                assert!(best_km <= km, "{probe:?}: {} farther than {}", best.name, other.name);
            }
        }
    }

    #[test]
    fn test_nearest_tie_prefers_first_entry() {
        let catalog = vec![
            Municipality::new(1, "Norte", "XX", "1.0", "0.0"),
            Municipality::new(2, "Sul", "XX", "-1.0", "0.0"),
            Municipality::new(3, "Norte de novo", "XX", "1.0", "0.0"),
        ];
        let (municipality, _) = nearest(LatLon(0.0, 0.0), &catalog).unwrap();
        assert_eq!(municipality.code, 1);
    }

    #[test]
    fn test_nearest_empty_and_unparseable() {
        assert!(nearest(LatLon(0.0, 0.0), &[]).is_none());

        let catalog = vec![
            Municipality::new(1, "Sem coordenadas", "XX", "", "abc"),
            Municipality::new(2, "Recife", "PE", "-8.0476", "-34.8805"),
        ];
        let (municipality, _) = nearest(LatLon(-3.7, -38.5), &catalog).unwrap();
        assert_eq!(municipality.code, 2);

        assert!(nearest(LatLon(0.0, 0.0), &catalog[..1]).is_none());
    }

    #[test]
    fn test_nearby_defaults_and_radius() {
        let catalog = synthetic_catalog();
        let results = nearby().catalog(&catalog).location(LatLon(-23.55, -46.63)).call();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0.name, "São Paulo");

        let results = nearby()
            .catalog(&catalog)
            .location(LatLon(-20.0, -45.0))
            .max_distance_km(1_000.0)
            .limit(3)
            .call();
        assert_eq!(results.len(), 3);
        assert!(results.windows(2).all(|w| w[0].1 <= w[1].1));
        assert!(results.iter().all(|(_, km)| *km <= 1_000.0));
    }

    #[test]
    fn test_nearby_zero_limit() {
        let catalog = synthetic_catalog();
        let results = nearby()
            .catalog(&catalog)
            .location(LatLon(-23.55, -46.63))
            .limit(0)
            .call();
        assert!(results.is_empty());
    }
}
