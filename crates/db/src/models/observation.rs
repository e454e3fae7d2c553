//! Provider-sourced observation models.

use serde::Serialize;
use sgbirds_core::types::{DbId, Timestamp};
use sgbirds_ebird::RecentObservation;
use sqlx::FromRow;

/// An official eBird observation row.
///
/// The whole table is replaced on each refresh run; rows are never
/// individually updated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Observation {
    pub id: DbId,
    pub species_code: String,
    pub common_name: String,
    pub scientific_name: String,
    pub location_id: String,
    pub location_name: String,
    /// Date string as reported by eBird (`YYYY-MM-DD HH:MM`).
    pub observation_date: String,
    pub count: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_valid: bool,
    pub is_reviewed: bool,
    pub is_private: bool,
    pub submission_id: String,
    pub exotic_category: Option<String>,
    pub created_at: Timestamp,
}

/// Insert payload derived from a provider record.
#[derive(Debug, Clone)]
pub struct NewObservation {
    pub species_code: String,
    pub common_name: String,
    pub scientific_name: String,
    pub location_id: String,
    pub location_name: String,
    pub observation_date: String,
    pub count: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_valid: bool,
    pub is_reviewed: bool,
    pub is_private: bool,
    pub submission_id: String,
    pub exotic_category: Option<String>,
}

impl From<RecentObservation> for NewObservation {
    fn from(obs: RecentObservation) -> Self {
        Self {
            species_code: obs.species_code,
            common_name: obs.com_name,
            scientific_name: obs.sci_name,
            location_id: obs.loc_id,
            location_name: obs.loc_name,
            observation_date: obs.obs_dt,
            count: obs.how_many,
            latitude: obs.lat,
            longitude: obs.lng,
            is_valid: obs.obs_valid,
            is_reviewed: obs.obs_reviewed,
            is_private: obs.location_private,
            submission_id: obs.sub_id,
            exotic_category: obs.exotic_category,
        }
    }
}
