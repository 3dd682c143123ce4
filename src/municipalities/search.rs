use crate::types::municipality::Municipality;

/// Number of entries returned when the search term is too short to filter on.
pub const BROWSE_LIMIT: usize = 50;
/// Maximum number of entries returned for a filtering search.
pub const SEARCH_LIMIT: usize = 100;
/// Terms shorter than this (in characters) browse instead of filtering.
pub const MIN_TERM_CHARS: usize = 2;

/// Filters the catalog by name or state abbreviation.
///
/// A term shorter than [`MIN_TERM_CHARS`] returns the first [`BROWSE_LIMIT`] entries
/// unfiltered. Otherwise the trimmed term is matched case-insensitively as a
/// substring of the name or the state, capped at [`SEARCH_LIMIT`] results. Catalog
/// order is preserved; there is no relevance ranking.
///
/// # Examples
///
/// ```
/// use inmet::{search, synthetic_catalog};
///
/// let catalog = synthetic_catalog();
/// let hits = search("rio", &catalog);
/// assert_eq!(hits[0].name, "Rio de Janeiro");
/// ```
pub fn search<'a>(term: &str, catalog: &'a [Municipality]) -> Vec<&'a Municipality> {
    if term.chars().count() < MIN_TERM_CHARS {
        return catalog.iter().take(BROWSE_LIMIT).collect();
    }

    let needle = term.trim().to_lowercase();
    catalog
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&needle) || m.state.to_lowercase().contains(&needle)
        })
        .take(SEARCH_LIMIT)
        .collect()
}

/// Exact lookup by textual geocode.
pub fn lookup_by_code<'a>(code: &str, catalog: &'a [Municipality]) -> Option<&'a Municipality> {
    catalog.iter().find(|m| m.code.to_string() == code)
}

/// Whether `code` is a non-empty run of digits that names a catalog entry.
pub fn is_valid_code(code: &str, catalog: &[Municipality]) -> bool {
    is_numeric_code(code) && lookup_by_code(code, catalog).is_some()
}

pub(crate) fn is_numeric_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::synthetic_catalog;

    fn large_catalog(n: usize) -> Vec<Municipality> {
        (0..n)
            .map(|i| {
                let state = if i % 2 == 0 { "SP" } else { "MG" };
                Municipality::new(i as u32 + 1, &format!("Cidade {i}"), state, "-20.0", "-45.0")
            })
            .collect()
    }

    fn is_ordered_subset(result: &[&Municipality], catalog: &[Municipality]) -> bool {
        let mut cursor = catalog.iter();
        result
            .iter()
            .all(|hit| cursor.any(|m| std::ptr::eq(m, *hit)))
    }

    #[test]
    fn test_short_term_browses() {
        let catalog = large_catalog(120);
        for term in ["", "a", " "] {
            let result = search(term, &catalog);
            assert_eq!(result.len(), BROWSE_LIMIT);
            assert!(std::ptr::eq(result[0], &catalog[0]));
            assert!(is_ordered_subset(&result, &catalog));
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = synthetic_catalog();
        let result = search("SÃO", &catalog);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].code, 3550308);

        let result = search("  paulo ", &catalog);
        assert_eq!(result[0].name, "São Paulo");
    }

    #[test]
    fn test_search_matches_state() {
        let catalog = synthetic_catalog();
        let result = search("rj", &catalog);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Rio de Janeiro");
    }

    #[test]
    fn test_search_caps_results_and_keeps_order() {
        let catalog = large_catalog(500);
        let result = search("cidade", &catalog);
        assert_eq!(result.len(), SEARCH_LIMIT);
        assert!(is_ordered_subset(&result, &catalog));

        let result = search("sp", &catalog);
        assert_eq!(result.len(), SEARCH_LIMIT);
        assert!(result.iter().all(|m| m.state == "SP"));
        assert!(is_ordered_subset(&result, &catalog));
    }

    #[test]
    fn test_search_without_matches() {
        let catalog = synthetic_catalog();
        assert!(search("xyz", &catalog).is_empty());
    }

    #[test]
    fn test_lookup_by_code() {
        let catalog = synthetic_catalog();
        assert_eq!(lookup_by_code("5300108", &catalog).map(|m| m.name.as_str()), Some("Brasília"));
        assert!(lookup_by_code("0000000", &catalog).is_none());
        assert!(lookup_by_code("", &catalog).is_none());
    }

    #[test]
    fn test_is_valid_code() {
        let catalog = synthetic_catalog();
        assert!(is_valid_code("1302603", &catalog));
        assert!(!is_valid_code("13026O3", &catalog));
        assert!(!is_valid_code("9999999", &catalog));
        assert!(!is_valid_code("", &catalog));
    }
}
