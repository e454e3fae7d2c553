//! Typed payloads for the eBird API.
//!
//! Every response is decoded into one of these structs at the client
//! boundary; nothing downstream sees raw JSON or CSV text.

use serde::{Deserialize, Serialize};

/// One row from `GET /v2/data/obs/{region}/recent`.
///
/// Field names follow eBird's camelCase wire format. `howMany` and
/// `exoticCategory` are frequently absent, and the three flag fields are
/// documented-but-occasionally-missing, so all of those are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentObservation {
    pub species_code: String,
    pub com_name: String,
    pub sci_name: String,
    pub loc_id: String,
    pub loc_name: String,
    /// Observation date as reported by eBird, e.g. `2026-08-29 07:45`.
    pub obs_dt: String,
    pub how_many: Option<i32>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub obs_valid: bool,
    #[serde(default)]
    pub obs_reviewed: bool,
    #[serde(default)]
    pub location_private: bool,
    pub sub_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exotic_category: Option<String>,
}

/// One row of the hotspot reference CSV (`GET /v2/ref/hotspot/{region}`).
///
/// The feed has no header row; the column order is fixed by eBird and the
/// mapping below must match it position-for-position. See
/// [`crate::csv_feed::parse_hotspot_csv`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotspotCsvRecord {
    pub loc_id: String,
    pub country_code: String,
    pub subnational1: String,
    pub subnational2: String,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub last_visit: String,
    pub species_count: String,
}

/// Detail payload from `GET /v2/ref/hotspot/info/{locId}` (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotInfo {
    pub loc_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country_code: String,
    pub country_name: String,
}
