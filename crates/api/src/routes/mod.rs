pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /birds                  provider species-code list (proxy)
/// /hotspots               provider hotspot feed (proxy + CSV snapshot)
/// /observations           stored observations (read-only)
/// /observations/recent    fetch + replace snapshot, return fresh rows
/// /sightings              list (GET), submit (POST)
/// /species                species lookup, ?search= autocomplete
/// /map/markers            filtered, coordinate-grouped map feed
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/birds", get(handlers::birds::get_species_codes))
        .route("/hotspots", get(handlers::hotspots::get_hotspots))
        .route("/observations", get(handlers::observations::list_stored))
        .route(
            "/observations/recent",
            get(handlers::observations::refresh_recent),
        )
        .route(
            "/sightings",
            get(handlers::sightings::list).post(handlers::sightings::create),
        )
        .route("/species", get(handlers::species::list))
        .route("/map/markers", get(handlers::map::markers))
}
