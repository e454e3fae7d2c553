//! Integration tests for the species and hotspot reference tables.

use sgbirds_db::models::hotspot::UpsertHotspot;
use sgbirds_db::models::species::CreateSpecies;
use sgbirds_db::repositories::{HotspotRepo, SpeciesRepo};
use sqlx::PgPool;

fn species(code: &str, common: &str, sci: &str) -> CreateSpecies {
    CreateSpecies {
        species_code: code.to_string(),
        common_name: common.to_string(),
        sci_name: sci.to_string(),
        family: "Nectariniidae".to_string(),
    }
}

async fn seed_allbirds(pool: &PgPool) {
    for (code, sci, common, family) in [
        ("olbsun1", "Cinnyris jugularis", "Olive-backed Sunbird", "Nectariniidae"),
        ("javmyn1", "Acridotheres javanicus", "Javan Myna", "Sturnidae"),
        ("houspa", "Passer domesticus", "House Sparrow", "Passeridae"),
    ] {
        sqlx::query(
            "INSERT INTO allbirds (species_code, sci_name, common_name, family) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(code)
        .bind(sci)
        .bind(common)
        .bind(family)
        .execute(pool)
        .await
        .unwrap();
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn species_search_is_case_insensitive_substring(pool: PgPool) {
    SpeciesRepo::insert_batch(
        &pool,
        &[
            species("olbsun1", "Olive-backed Sunbird", "Cinnyris jugularis"),
            species("crisun2", "Crimson Sunbird", "Aethopyga siparaja"),
            species("javmyn1", "Javan Myna", "Acridotheres javanicus"),
        ],
    )
    .await
    .unwrap();

    let hits = SpeciesRepo::search_common_name(&pool, "sunbird").await.unwrap();
    assert_eq!(hits.len(), 2);
    // Alphabetical by common name.
    assert_eq!(hits[0].common_name, "Crimson Sunbird");
    assert_eq!(hits[1].common_name, "Olive-backed Sunbird");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_species_code_is_a_unique_violation(pool: PgPool) {
    SpeciesRepo::insert_batch(
        &pool,
        &[species("olbsun1", "Olive-backed Sunbird", "Cinnyris jugularis")],
    )
    .await
    .unwrap();

    let result = SpeciesRepo::insert_batch(
        &pool,
        &[species("olbsun1", "Olive-backed Sunbird", "Cinnyris jugularis")],
    )
    .await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn allbirds_filter_returns_only_requested_codes(pool: PgPool) {
    seed_allbirds(&pool).await;

    let rows = SpeciesRepo::codes_in_allbirds(
        &pool,
        &["olbsun1".to_string(), "javmyn1".to_string()],
    )
    .await
    .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].species_code, "javmyn1");
    assert_eq!(rows[1].species_code, "olbsun1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn allbirds_probe_reports_presence(pool: PgPool) {
    assert!(SpeciesRepo::allbirds_probe(&pool).await.unwrap().is_none());
    seed_allbirds(&pool).await;
    assert!(SpeciesRepo::allbirds_probe(&pool).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hotspot_upsert_updates_existing_loc_id(pool: PgPool) {
    let first = UpsertHotspot {
        loc_id: "L1234567".to_string(),
        name: "Singapore Botanic Gardens".to_string(),
        latitude: 1.3138,
        longitude: 103.8159,
        country_code: "SG".to_string(),
        country_name: "Singapore".to_string(),
    };
    let created = HotspotRepo::upsert(&pool, &first).await.unwrap();

    let mut renamed = first.clone();
    renamed.name = "SBG (Eco-Lake)".to_string();
    let updated = HotspotRepo::upsert(&pool, &renamed).await.unwrap();

    // Same row, new name.
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "SBG (Eco-Lake)");
    assert_eq!(HotspotRepo::list_all(&pool).await.unwrap().len(), 1);
}
