pub mod endpoints;
pub mod normalize;
