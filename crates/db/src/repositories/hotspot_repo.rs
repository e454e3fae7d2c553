//! Repository for the `hotspots` lookup table.

use sqlx::PgPool;

use crate::models::hotspot::{Hotspot, UpsertHotspot};

/// Column list for `hotspots` SELECT queries.
const COLUMNS: &str = "\
    id, loc_id, name, latitude, longitude, \
    country_code, country_name, updated_at";

/// Provides query operations for hotspot reference data.
pub struct HotspotRepo;

impl HotspotRepo {
    /// Upsert a hotspot keyed on `loc_id`, returning the stored row.
    pub async fn upsert(pool: &PgPool, input: &UpsertHotspot) -> Result<Hotspot, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotspots \
             (loc_id, name, latitude, longitude, country_code, country_name) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (loc_id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 latitude = EXCLUDED.latitude, \
                 longitude = EXCLUDED.longitude, \
                 country_code = EXCLUDED.country_code, \
                 country_name = EXCLUDED.country_name, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotspot>(&query)
            .bind(&input.loc_id)
            .bind(&input.name)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.country_code)
            .bind(&input.country_name)
            .fetch_one(pool)
            .await
    }

    /// List all hotspots, alphabetical by name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Hotspot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotspots ORDER BY name");
        sqlx::query_as::<_, Hotspot>(&query).fetch_all(pool).await
    }
}
