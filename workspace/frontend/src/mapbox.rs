//! External map-provider boundary: JS bindings for mapbox-gl plus the
//! process-wide script/stylesheet loader.

pub mod bindings;
pub mod loader;
