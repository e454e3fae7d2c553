//! User-submitted sighting models.

use serde::{Deserialize, Serialize};
use sgbirds_core::types::{DbId, SightingStatus, Timestamp};
use sqlx::FromRow;

/// A user-submitted sighting row.
///
/// Insert-only: the application never updates or deletes these.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sighting {
    pub id: DbId,
    pub species_code: String,
    pub common_name: String,
    pub sci_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub observed_at: Timestamp,
    /// Canonical status string (`seen` / `not_seen`), enforced by a
    /// database CHECK constraint.
    pub status: String,
    pub created_at: Timestamp,
}

impl Sighting {
    /// Typed view of the stored status string.
    pub fn status(&self) -> Option<SightingStatus> {
        self.status.parse().ok()
    }
}

/// DTO for inserting a new sighting.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSighting {
    pub species_code: String,
    pub common_name: String,
    pub sci_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// User-supplied observation time, UTC.
    pub observed_at: Timestamp,
    pub status: SightingStatus,
}
