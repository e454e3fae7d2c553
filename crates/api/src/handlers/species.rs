//! Handlers for the species reference lookup.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use sgbirds_db::models::species::Species;
use sgbirds_db::repositories::SpeciesRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the species list endpoint.
#[derive(Debug, Deserialize)]
pub struct SpeciesQuery {
    /// Common-name substring for the submission form autocomplete.
    pub search: Option<String>,
}

/// GET /species?search=
///
/// The regional species lookup table, optionally narrowed by a
/// case-insensitive common-name substring.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SpeciesQuery>,
) -> AppResult<Json<DataResponse<Vec<Species>>>> {
    let rows = match query.search.as_deref() {
        Some(term) if !term.trim().is_empty() => {
            SpeciesRepo::search_common_name(&state.pool, term.trim()).await?
        }
        _ => SpeciesRepo::list_all(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: rows }))
}
