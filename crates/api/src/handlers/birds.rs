//! Handler for the provider species-code list proxy.

use axum::extract::State;
use axum::Json;
use sgbirds_core::types::REGION_CODE;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /birds
///
/// Proxy the eBird regional species-code list for Singapore. Returns an
/// array of species codes (possibly empty); a 2xx upstream response never
/// errors here.
pub async fn get_species_codes(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let codes = state.ebird.species_list(REGION_CODE).await?;
    Ok(Json(DataResponse { data: codes }))
}
