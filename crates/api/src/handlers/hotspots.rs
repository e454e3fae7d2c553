//! Handler for the hotspot reference feed proxy.

use axum::extract::State;
use axum::Json;
use sgbirds_core::types::REGION_CODE;
use sgbirds_ebird::csv_feed::parse_hotspot_csv;
use sgbirds_ebird::HotspotCsvRecord;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /hotspots
///
/// Fetch the provider's hotspot CSV for Singapore, return it parsed as
/// JSON, and persist the raw CSV snapshot to
/// `<snapshot_dir>/SG_hotspots.csv` as a side effect.
pub async fn get_hotspots(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<HotspotCsvRecord>>>> {
    let csv_text = state.ebird.hotspot_csv(REGION_CODE).await?;
    let records = parse_hotspot_csv(&csv_text)?;

    write_snapshot(&state, &csv_text).await?;

    Ok(Json(DataResponse { data: records }))
}

/// Persist the raw CSV payload next to the service's other local data.
async fn write_snapshot(state: &AppState, csv_text: &str) -> AppResult<()> {
    let dir = &state.config.snapshot_dir;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create snapshot dir: {e}")))?;

    let path = dir.join(format!("{REGION_CODE}_hotspots.csv"));
    tokio::fs::write(&path, csv_text)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write hotspot snapshot: {e}")))?;

    tracing::info!(path = %path.display(), "Hotspot snapshot saved");
    Ok(())
}
