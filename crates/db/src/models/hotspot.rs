//! Hotspot reference lookup models.

use serde::{Deserialize, Serialize};
use sgbirds_core::types::{DbId, Timestamp};
use sgbirds_ebird::HotspotInfo;
use sqlx::FromRow;

/// A named birding location with a stable provider identifier.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hotspot {
    pub id: DbId,
    pub loc_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: String,
    pub country_name: String,
    pub updated_at: Timestamp,
}

/// DTO for upserting a hotspot, keyed on `loc_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertHotspot {
    pub loc_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: String,
    pub country_name: String,
}

impl From<HotspotInfo> for UpsertHotspot {
    fn from(info: HotspotInfo) -> Self {
        Self {
            loc_id: info.loc_id,
            name: info.name,
            latitude: info.latitude,
            longitude: info.longitude,
            country_code: info.country_code,
            country_name: info.country_name,
        }
    }
}
