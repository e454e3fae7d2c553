//! Integration tests for the species lookup endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

async fn seed_species(pool: &PgPool) {
    for (code, common_name, sci, family) in [
        ("olbsun1", "Olive-backed Sunbird", "Cinnyris jugularis", "Nectariniidae"),
        ("crisun2", "Crimson Sunbird", "Aethopyga siparaja", "Nectariniidae"),
        ("javmyn1", "Javan Myna", "Acridotheres javanicus", "Sturnidae"),
    ] {
        sqlx::query(
            "INSERT INTO species (species_code, common_name, sci_name, family) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(code)
        .bind(common_name)
        .bind(sci)
        .bind(family)
        .execute(pool)
        .await
        .unwrap();
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lists_all_species_alphabetically(pool: PgPool) {
    seed_species(&pool).await;

    let response = get(common::build_test_app(pool), "/api/v1/species").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["common_name"], "Crimson Sunbird");
    assert_eq!(data[2]["common_name"], "Olive-backed Sunbird");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_narrows_by_common_name_substring(pool: PgPool) {
    seed_species(&pool).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/species?search=sunbird",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_search_returns_everything(pool: PgPool) {
    seed_species(&pool).await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/species?search=%20",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_table_returns_empty_array(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/species").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}
