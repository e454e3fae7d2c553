//! Handlers for user-submitted sightings.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sgbirds_core::error::CoreError;
use sgbirds_core::geo::validate_coordinate;
use sgbirds_db::models::sighting::{CreateSighting, Sighting};
use sgbirds_db::repositories::SightingRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /sightings
///
/// Stored sightings, read-only, most recent first.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Sighting>>>> {
    let rows = SightingRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /sightings
///
/// Submit a new sighting. The coordinate must fall inside the Singapore
/// bounding region and species fields must be non-empty.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSighting>,
) -> AppResult<(StatusCode, Json<DataResponse<Sighting>>)> {
    validate(&input)?;

    let created = SightingRepo::insert(&state.pool, &input).await?;

    tracing::info!(
        id = created.id,
        species_code = %created.species_code,
        status = %created.status,
        "Sighting submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

fn validate(input: &CreateSighting) -> AppResult<()> {
    if input.species_code.is_empty() || input.common_name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "species_code and common_name are required".to_string(),
        )));
    }
    validate_coordinate(input.latitude, input.longitude)?;
    Ok(())
}
