//! Periodic refresh of the official observation snapshot.
//!
//! Spawns a loop that replaces the `observations` table with the provider's
//! latest window on a fixed interval using `tokio::time::interval`. A failed
//! run is logged and the previous snapshot stays in place until the next
//! tick succeeds.

use std::sync::Arc;
use std::time::Duration;

use sgbirds_db::DbPool;
use sgbirds_ebird::EbirdClient;
use tokio_util::sync::CancellationToken;

use crate::refresh::refresh_observations;

/// Run the observation refresh loop.
///
/// The first tick fires immediately so a fresh deployment has data without
/// waiting a full interval. Runs until `cancel` is triggered.
pub async fn run(
    pool: DbPool,
    ebird: Arc<EbirdClient>,
    interval_secs: u64,
    back_days: u32,
    cancel: CancellationToken,
) {
    tracing::info!(
        interval_secs,
        back_days,
        "Observation refresh job started"
    );

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Observation refresh job stopping");
                break;
            }
            _ = interval.tick() => {
                match refresh_observations(&pool, &ebird, back_days).await {
                    Ok(outcome) => {
                        tracing::info!(
                            deleted = outcome.deleted,
                            inserted = outcome.inserted,
                            "Observation refresh run complete"
                        );
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Observation refresh run failed");
                    }
                }
            }
        }
    }
}
