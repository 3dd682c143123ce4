//! Pure lookups over a municipality catalog the caller already holds: text search,
//! code lookup and nearest-point queries.

pub mod distance;
pub mod locate_municipality;
pub mod search;
