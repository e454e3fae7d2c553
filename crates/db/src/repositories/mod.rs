//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod hotspot_repo;
pub mod observation_repo;
pub mod sighting_repo;
pub mod species_repo;

pub use hotspot_repo::HotspotRepo;
pub use observation_repo::ObservationRepo;
pub use sighting_repo::SightingRepo;
pub use species_repo::SpeciesRepo;
