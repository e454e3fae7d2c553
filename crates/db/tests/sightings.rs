//! Integration tests for the sightings repository.

use chrono::{TimeZone, Utc};
use sgbirds_core::types::SightingStatus;
use sgbirds_db::models::sighting::CreateSighting;
use sgbirds_db::repositories::SightingRepo;
use sqlx::PgPool;

fn sunbird_sighting() -> CreateSighting {
    CreateSighting {
        species_code: "olbsun1".to_string(),
        common_name: "Olive-backed Sunbird".to_string(),
        sci_name: "Cinnyris jugularis".to_string(),
        latitude: 1.3000,
        longitude: 103.8000,
        observed_at: Utc.with_ymd_and_hms(2026, 8, 29, 7, 45, 0).unwrap(),
        status: SightingStatus::Seen,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_creates_exactly_one_row_with_exact_values(pool: PgPool) {
    let created = SightingRepo::insert(&pool, &sunbird_sighting()).await.unwrap();

    assert_eq!(created.species_code, "olbsun1");
    assert_eq!(created.common_name, "Olive-backed Sunbird");
    assert_eq!(created.sci_name, "Cinnyris jugularis");
    assert_eq!(created.latitude, 1.3000);
    assert_eq!(created.longitude, 103.8000);
    assert_eq!(created.status, "seen");
    assert_eq!(created.status(), Some(SightingStatus::Seen));
    assert_eq!(
        created.observed_at,
        Utc.with_ymd_and_hms(2026, 8, 29, 7, 45, 0).unwrap()
    );

    assert_eq!(SightingRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn insert_does_not_mutate_existing_rows(pool: PgPool) {
    let first = SightingRepo::insert(&pool, &sunbird_sighting()).await.unwrap();

    let mut second = sunbird_sighting();
    second.common_name = "Javan Myna".to_string();
    second.sci_name = "Acridotheres javanicus".to_string();
    second.species_code = "javmyn1".to_string();
    second.status = SightingStatus::NotSeen;
    SightingRepo::insert(&pool, &second).await.unwrap();

    let all = SightingRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);

    let stored_first = all.iter().find(|s| s.id == first.id).unwrap();
    assert_eq!(stored_first.common_name, "Olive-backed Sunbird");
    assert_eq!(stored_first.status, "seen");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_orders_by_observed_at_descending(pool: PgPool) {
    let mut early = sunbird_sighting();
    early.observed_at = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();
    let mut late = sunbird_sighting();
    late.observed_at = Utc.with_ymd_and_hms(2026, 8, 20, 9, 0, 0).unwrap();

    SightingRepo::insert(&pool, &early).await.unwrap();
    SightingRepo::insert(&pool, &late).await.unwrap();

    let all = SightingRepo::list_all(&pool).await.unwrap();
    assert_eq!(all[0].observed_at, late.observed_at);
    assert_eq!(all[1].observed_at, early.observed_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_check_constraint_rejects_legacy_spellings(pool: PgPool) {
    // Raw SQL bypassing the typed DTO: the database itself only accepts
    // the canonical vocabulary.
    let result = sqlx::query(
        "INSERT INTO sightings \
         (species_code, common_name, sci_name, latitude, longitude, observed_at, status) \
         VALUES ('olbsun1', 'Olive-backed Sunbird', 'Cinnyris jugularis', \
                 1.3, 103.8, now(), 'sighted')",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err());
}
