//! Repository for the `species` lookup table and the `allbirds` staging
//! table it is populated from.

use sqlx::PgPool;

use crate::models::species::{AllbirdsRow, CreateSpecies, Species};

/// Column list for `species` SELECT queries.
const COLUMNS: &str = "id, species_code, common_name, sci_name, family";

/// Provides query operations for the species reference data.
pub struct SpeciesRepo;

impl SpeciesRepo {
    /// List the full regional species table, alphabetical by common name.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Species>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM species ORDER BY common_name");
        sqlx::query_as::<_, Species>(&query).fetch_all(pool).await
    }

    /// Case-insensitive common-name substring search, for the submission
    /// form's autocomplete.
    pub async fn search_common_name(
        pool: &PgPool,
        term: &str,
    ) -> Result<Vec<Species>, sqlx::Error> {
        let pattern = format!("%{}%", term.replace('%', "\\%").replace('_', "\\_"));
        let query = format!(
            "SELECT {COLUMNS} FROM species \
             WHERE common_name ILIKE $1 \
             ORDER BY common_name"
        );
        sqlx::query_as::<_, Species>(&query)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Insert a batch of species rows. Existing codes conflict (409 at the
    /// API boundary) rather than being silently overwritten.
    pub async fn insert_batch(pool: &PgPool, rows: &[CreateSpecies]) -> Result<u64, sqlx::Error> {
        if rows.is_empty() {
            return Ok(0);
        }

        let mut query =
            String::from("INSERT INTO species (species_code, common_name, sci_name, family) VALUES ");
        let mut param_idx = 1u32;
        for i in 0..rows.len() {
            if i > 0 {
                query.push_str(", ");
            }
            query.push('(');
            for j in 0..4 {
                if j > 0 {
                    query.push_str(", ");
                }
                query.push('$');
                query.push_str(&param_idx.to_string());
                param_idx += 1;
            }
            query.push(')');
        }

        let mut q = sqlx::query(&query);
        for row in rows {
            q = q
                .bind(&row.species_code)
                .bind(&row.common_name)
                .bind(&row.sci_name)
                .bind(&row.family);
        }

        let result = q.execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Select taxonomy rows from `allbirds` whose code is in the given
    /// list. Codes are matched lowercased, as stored.
    pub async fn codes_in_allbirds(
        pool: &PgPool,
        codes: &[String],
    ) -> Result<Vec<AllbirdsRow>, sqlx::Error> {
        sqlx::query_as::<_, AllbirdsRow>(
            "SELECT species_code, sci_name, common_name, family \
             FROM allbirds \
             WHERE species_code = ANY($1) \
             ORDER BY species_code",
        )
        .bind(codes)
        .fetch_all(pool)
        .await
    }

    /// Probe the `allbirds` staging table (used by `check-connection`).
    pub async fn allbirds_probe(pool: &PgPool) -> Result<Option<AllbirdsRow>, sqlx::Error> {
        sqlx::query_as::<_, AllbirdsRow>(
            "SELECT species_code, sci_name, common_name, family FROM allbirds LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }
}
