use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use kaizen_core::{
    database::PostgresProductRepository, seed::reseed_demo_catalog,
};
use serde_json::Value;
use sqlx::PgPool;

mod common;
use common::build_test_server;

#[sqlx::test(migrator = "kaizen_core::MIGRATOR")]
async fn seeded_postgres_catalog_is_served(pool: PgPool) -> Result<()> {
    let repo = PostgresProductRepository::new(pool);
    let first = reseed_demo_catalog(&repo).await?;
    let second = reseed_demo_catalog(&repo).await?;
    assert_eq!(first.removed, 0);
    assert_eq!(second.removed, 3);

    let server = build_test_server(Arc::new(repo)).await?;

    let listed: Vec<Value> = server.get("/products").await.json();
    assert_eq!(listed.len(), 3);
    // Inserted in fixture order, so the last one is newest.
    assert_eq!(listed[0]["slug"], "size-5-football");

    let tent: Value = server.get("/products/slug/camping-tent-2p").await.json();
    assert_eq!(tent["price"], 2_500_000);
    assert_eq!(tent["tags"][1], "tent");

    server
        .get("/products/slug/unknown")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}
