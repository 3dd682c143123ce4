pub mod fetched;
pub mod forecast;
pub mod municipality;
pub(crate) mod text;
