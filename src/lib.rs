pub mod analysis;
pub mod dataset;
pub mod loader;
pub mod output;
pub mod render;
