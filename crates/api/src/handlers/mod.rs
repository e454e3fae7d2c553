//! HTTP request handlers, one module per resource.

pub mod birds;
pub mod hotspots;
pub mod map;
pub mod observations;
pub mod sightings;
pub mod species;
