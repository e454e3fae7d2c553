//! Observation snapshot refresh.
//!
//! One routine shared by the `/observations/recent` handler and the
//! background job: fetch the provider's current window for Singapore and
//! swap it into the `observations` table atomically. Because the swap runs
//! in a single transaction, a mid-run failure leaves the previous snapshot
//! in place rather than an empty or partially-filled table.

use sgbirds_core::types::REGION_CODE;
use sgbirds_db::models::observation::NewObservation;
use sgbirds_db::repositories::observation_repo::ReplaceOutcome;
use sgbirds_db::repositories::ObservationRepo;
use sgbirds_db::DbPool;
use sgbirds_ebird::EbirdClient;

use crate::error::AppResult;

/// Fetch the provider's recent-observation window and replace the stored
/// snapshot with it. Returns the delete/insert counts.
///
/// A zero-record upstream response is valid: the table ends up empty.
pub async fn refresh_observations(
    pool: &DbPool,
    ebird: &EbirdClient,
    back_days: u32,
) -> AppResult<ReplaceOutcome> {
    let fetched = ebird.recent_observations(REGION_CODE, back_days).await?;

    let rows: Vec<NewObservation> = fetched.into_iter().map(NewObservation::from).collect();

    let outcome = ObservationRepo::replace_all(pool, &rows).await?;

    tracing::info!(
        deleted = outcome.deleted,
        inserted = outcome.inserted,
        back_days,
        "Observation snapshot replaced"
    );

    Ok(outcome)
}
