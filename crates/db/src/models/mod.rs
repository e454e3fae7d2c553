//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create/upsert DTO for writes

pub mod hotspot;
pub mod observation;
pub mod sighting;
pub mod species;
