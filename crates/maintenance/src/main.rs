//! One-shot maintenance commands for the reference tables.
//!
//! These are invoked manually, out-of-band of the request path:
//!
//! ```text
//! sgbirds-maintenance update-species --list data/singapore_species.json
//! sgbirds-maintenance update-hotspots
//! sgbirds-maintenance check-connection
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod species;

use species::update_species_table;

#[derive(Parser)]
#[command(name = "sgbirds-maintenance")]
#[command(about = "One-shot maintenance commands for the sgbirds reference tables")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Populate the species lookup table from the allbirds staging table,
    /// filtered by a regional species-code list.
    UpdateSpecies {
        /// Path to a JSON array of species codes.
        #[arg(short, long, default_value = "data/singapore_species.json")]
        list: String,
    },
    /// Fetch the Singapore hotspot list and per-hotspot details from eBird
    /// and upsert them into the hotspots table.
    UpdateHotspots,
    /// Probe the database connection and the allbirds staging table.
    CheckConnection,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sgbirds_maintenance=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = sgbirds_db::create_pool(&database_url).await?;

    match args.command {
        Command::UpdateSpecies { list } => update_species_table(&pool, &list).await?,
        Command::UpdateHotspots => update_hotspot_table(&pool).await?,
        Command::CheckConnection => check_connection(&pool).await?,
    }

    Ok(())
}

/// Fetch the regional hotspot list, then per-item details, and upsert each
/// into the hotspots table keyed on `loc_id`.
///
/// A failed detail fetch is logged and skipped so one bad hotspot does not
/// abort the whole run.
async fn update_hotspot_table(pool: &sgbirds_db::DbPool) -> anyhow::Result<()> {
    use sgbirds_core::types::REGION_CODE;
    use sgbirds_db::models::hotspot::UpsertHotspot;
    use sgbirds_db::repositories::HotspotRepo;
    use sgbirds_ebird::EbirdClient;

    let ebird = EbirdClient::from_env();

    tracing::info!("Fetching hotspot list");
    let hotspots = ebird.hotspot_records(REGION_CODE).await?;
    tracing::info!(count = hotspots.len(), "Fetched hotspot list");

    let mut upserted = 0usize;
    let mut failed = 0usize;

    for hotspot in &hotspots {
        let details = match ebird.hotspot_details(&hotspot.loc_id).await {
            Ok(details) => details,
            Err(e) => {
                tracing::warn!(loc_id = %hotspot.loc_id, error = %e, "Skipping hotspot");
                failed += 1;
                continue;
            }
        };

        HotspotRepo::upsert(pool, &UpsertHotspot::from(details)).await?;
        upserted += 1;
        tracing::debug!(loc_id = %hotspot.loc_id, "Hotspot upserted");
    }

    tracing::info!(upserted, failed, "Hotspot update complete");
    Ok(())
}

/// Probe the database and report whether the allbirds staging table has data.
async fn check_connection(pool: &sgbirds_db::DbPool) -> anyhow::Result<()> {
    use sgbirds_db::repositories::SpeciesRepo;

    sgbirds_db::health_check(pool).await?;
    tracing::info!("Database reachable");

    match SpeciesRepo::allbirds_probe(pool).await? {
        Some(row) => {
            tracing::info!(species_code = %row.species_code, "allbirds has data");
        }
        None => {
            tracing::warn!("allbirds is empty; load the eBird taxonomy before update-species");
        }
    }
    Ok(())
}
