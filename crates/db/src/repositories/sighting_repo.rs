//! Repository for the `sightings` table (insert-only).

use sqlx::PgPool;

use crate::models::sighting::{CreateSighting, Sighting};

/// Column list for `sightings` SELECT queries.
const COLUMNS: &str = "\
    id, species_code, common_name, sci_name, \
    latitude, longitude, observed_at, status, created_at";

/// Provides query operations for user-submitted sightings.
pub struct SightingRepo;

impl SightingRepo {
    /// Insert a new sighting and return the created row.
    pub async fn insert(pool: &PgPool, input: &CreateSighting) -> Result<Sighting, sqlx::Error> {
        let query = format!(
            "INSERT INTO sightings \
             (species_code, common_name, sci_name, latitude, longitude, observed_at, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sighting>(&query)
            .bind(&input.species_code)
            .bind(&input.common_name)
            .bind(&input.sci_name)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.observed_at)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// List all sightings, most recent observation time first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Sighting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sightings ORDER BY observed_at DESC, id DESC");
        sqlx::query_as::<_, Sighting>(&query).fetch_all(pool).await
    }

    /// Total row count (used by tests and the health surface).
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sightings")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
