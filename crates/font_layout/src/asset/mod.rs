pub mod font;
pub mod material;
pub mod metrics;
