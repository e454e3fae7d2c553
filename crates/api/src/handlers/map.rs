//! The map feed: filtered, coordinate-grouped markers.
//!
//! One endpoint applies the filter to both record sets and groups
//! co-located records into a single marker, so clients render the map
//! straight from the response.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use sgbirds_core::filter::{apply_filter, MapFilter};
use sgbirds_core::markers::{group_markers, MapMarker};
use sgbirds_db::models::observation::Observation;
use sgbirds_db::models::sighting::Sighting;
use sgbirds_db::repositories::{ObservationRepo, SightingRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One record inside a marker popup, tagged by its source table.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum MapRecord {
    Observation(Observation),
    Sighting(Sighting),
}

impl MapRecord {
    fn coordinate(&self) -> (f64, f64) {
        match self {
            MapRecord::Observation(o) => (o.latitude, o.longitude),
            MapRecord::Sighting(s) => (s.latitude, s.longitude),
        }
    }
}

/// GET /map/markers?data_source=&common_name=&sci_name=&status=
///
/// Load the requested record sets, apply the filter, and group co-located
/// records into one marker per exact coordinate. Observations are listed
/// before sightings, and relative order within each set is preserved.
///
/// The status criterion applies to sightings only; official observations
/// carry no seen/not-seen status.
pub async fn markers(
    State(state): State<AppState>,
    Query(filter): Query<MapFilter>,
) -> AppResult<Json<DataResponse<Vec<MapMarker<MapRecord>>>>> {
    let mut records: Vec<MapRecord> = Vec::new();

    if filter.data_source.includes_observations() {
        let observations = ObservationRepo::list_all(&state.pool).await?;
        let kept = apply_filter(observations, |o: &Observation| {
            filter.matches_species(&o.common_name, &o.scientific_name)
        });
        records.extend(kept.into_iter().map(MapRecord::Observation));
    }

    if filter.data_source.includes_sightings() {
        let sightings = SightingRepo::list_all(&state.pool).await?;
        let kept = apply_filter(sightings, |s: &Sighting| {
            filter.matches_species(&s.common_name, &s.sci_name)
                && s.status().map_or(true, |st| filter.matches_status(st))
        });
        records.extend(kept.into_iter().map(MapRecord::Sighting));
    }

    let markers = group_markers(records, MapRecord::coordinate);
    Ok(Json(DataResponse { data: markers }))
}
