//! Handlers for official observation records.

use axum::extract::State;
use axum::Json;
use sgbirds_db::models::observation::Observation;
use sgbirds_db::repositories::ObservationRepo;

use crate::error::AppResult;
use crate::refresh::refresh_observations;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /observations
///
/// Stored observations, read-only.
pub async fn list_stored(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Observation>>>> {
    let rows = ObservationRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /observations/recent
///
/// Fetch the provider's current recent-observation window, replace the
/// stored snapshot with it (transactionally), and return the fresh rows.
pub async fn refresh_recent(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Observation>>>> {
    refresh_observations(&state.pool, &state.ebird, state.config.ebird_back_days).await?;

    let rows = ObservationRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: rows }))
}
