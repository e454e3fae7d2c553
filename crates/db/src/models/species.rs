//! Species reference lookup models.

use serde::{Deserialize, Serialize};
use sgbirds_core::types::DbId;
use sqlx::FromRow;

/// One species in the regional lookup table.
///
/// Treated as immutable reference data once the maintenance run has
/// populated it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Species {
    pub id: DbId,
    pub species_code: String,
    pub common_name: String,
    pub sci_name: String,
    pub family: String,
}

/// DTO for inserting a species row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSpecies {
    pub species_code: String,
    pub common_name: String,
    pub sci_name: String,
    pub family: String,
}

/// A taxonomy row selected from the `allbirds` staging table.
#[derive(Debug, Clone, FromRow)]
pub struct AllbirdsRow {
    pub species_code: String,
    pub sci_name: String,
    pub common_name: String,
    pub family: String,
}

impl From<AllbirdsRow> for CreateSpecies {
    fn from(row: AllbirdsRow) -> Self {
        Self {
            species_code: row.species_code,
            common_name: row.common_name,
            sci_name: row.sci_name,
            family: row.family,
        }
    }
}
