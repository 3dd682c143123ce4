//! HTTP access to the INMET API: a cached JSON fetcher and its error type.

pub(crate) mod cache;
pub mod error;
pub(crate) mod fetcher;
