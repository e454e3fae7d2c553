//! Repository for the `observations` table.
//!
//! The table holds a full snapshot of the provider's recent-observation
//! window. [`ObservationRepo::replace_all`] swaps the snapshot inside one
//! transaction: either the new window lands completely or the previous
//! contents remain untouched.

use sqlx::PgPool;

use crate::models::observation::{NewObservation, Observation};

/// Column list for `observations` SELECT queries.
const COLUMNS: &str = "\
    id, species_code, common_name, scientific_name, \
    location_id, location_name, observation_date, count, \
    latitude, longitude, is_valid, is_reviewed, is_private, \
    submission_id, exotic_category, created_at";

/// Column list for `observations` INSERT statements (excludes `id` and
/// `created_at`).
const INSERT_COLUMNS: &str = "\
    species_code, common_name, scientific_name, \
    location_id, location_name, observation_date, count, \
    latitude, longitude, is_valid, is_reviewed, is_private, \
    submission_id, exotic_category";

/// Number of bind parameters per inserted row.
const PARAMS_PER_ROW: u32 = 14;

/// Outcome of a snapshot replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// Rows removed from the previous snapshot.
    pub deleted: u64,
    /// Rows inserted from the new snapshot.
    pub inserted: u64,
}

/// Provides query operations for official observations.
pub struct ObservationRepo;

impl ObservationRepo {
    /// List all stored observations, insertion order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Observation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM observations ORDER BY id");
        sqlx::query_as::<_, Observation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete every row. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM observations").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Replace the entire table with a new snapshot, atomically.
    ///
    /// Runs the delete and a single multi-row insert inside one
    /// transaction. If any part fails the transaction rolls back and the
    /// previous snapshot survives; there is no partially-filled state.
    /// An empty snapshot is valid and leaves the table empty.
    pub async fn replace_all(
        pool: &PgPool,
        rows: &[NewObservation],
    ) -> Result<ReplaceOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM observations")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let inserted = if rows.is_empty() {
            0
        } else {
            let query = build_batch_insert(rows.len());
            let mut q = sqlx::query(&query);
            for row in rows {
                q = q
                    .bind(&row.species_code)
                    .bind(&row.common_name)
                    .bind(&row.scientific_name)
                    .bind(&row.location_id)
                    .bind(&row.location_name)
                    .bind(&row.observation_date)
                    .bind(row.count)
                    .bind(row.latitude)
                    .bind(row.longitude)
                    .bind(row.is_valid)
                    .bind(row.is_reviewed)
                    .bind(row.is_private)
                    .bind(&row.submission_id)
                    .bind(&row.exotic_category);
            }
            q.execute(&mut *tx).await?.rows_affected()
        };

        tx.commit().await?;

        Ok(ReplaceOutcome { deleted, inserted })
    }

    /// Total row count.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM observations")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}

/// Build a multi-row VALUES insert for `n` observation rows.
fn build_batch_insert(n: usize) -> String {
    let mut query = format!("INSERT INTO observations ({INSERT_COLUMNS}) VALUES ");
    let mut param_idx = 1u32;
    for i in 0..n {
        if i > 0 {
            query.push_str(", ");
        }
        query.push('(');
        for j in 0..PARAMS_PER_ROW {
            if j > 0 {
                query.push_str(", ");
            }
            query.push('$');
            query.push_str(&param_idx.to_string());
            param_idx += 1;
        }
        query.push(')');
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_insert_numbers_parameters_sequentially() {
        let query = build_batch_insert(2);
        assert!(query.starts_with("INSERT INTO observations ("));
        assert!(query.contains("($1, $2"));
        assert!(query.contains("$14)"));
        assert!(query.contains("($15, $16"));
        assert!(query.ends_with("$28)"));
    }
}
