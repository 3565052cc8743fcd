//! Integration tests for the seeding endpoint.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - The dashboard running with `HAVEN_SEED_ENDPOINT=true`
//!
//! Run with: cargo test -p handcrafted-haven-integration-tests -- --ignored --test-threads=1

use handcrafted_haven_integration_tests::{base_url, client, database_url};
use reqwest::StatusCode;
use serde_json::Value;

async fn seed() -> (StatusCode, Value) {
    let resp = client()
        .get(format!("{}/api/seed", base_url()))
        .send()
        .await
        .expect("Failed to call seed endpoint");
    let status = resp.status();
    let body = resp.json::<Value>().await.expect("Seed response is not JSON");
    (status, body)
}

#[tokio::test]
#[ignore = "Requires running dashboard and PostgreSQL"]
async fn test_seed_is_idempotent() {
    let (status, _) = seed().await;
    assert_eq!(status, StatusCode::OK);

    // Everything already exists on the second run.
    let (status, body) = seed().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Database seeded!");
    assert_eq!(body["usersInserted"], 0);
    assert_eq!(body["productsInserted"], 0);
    assert_eq!(body["reviewsInserted"], 0);
}

#[tokio::test]
#[ignore = "Requires running dashboard and PostgreSQL"]
async fn test_seed_transcript() {
    let (status, body) = seed().await;
    assert_eq!(status, StatusCode::OK);

    let logs: Vec<&str> = body["logs"]
        .as_array()
        .expect("logs is an array")
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(logs.first(), Some(&"Starting database seed..."));
    assert_eq!(logs.last(), Some(&"Seed complete!"));
    assert!(logs.contains(&"Seeding users..."));
    assert!(logs.iter().any(|l| l.starts_with("Reviews seeding complete. Inserted: ")));
}

#[tokio::test]
#[ignore = "Requires running dashboard and PostgreSQL"]
async fn test_seed_rows_are_stored() {
    let Some(url) = database_url() else {
        return;
    };
    let (status, _) = seed().await;
    assert_eq!(status, StatusCode::OK);

    let pool = sqlx::PgPool::connect(&url).await.expect("Failed to connect");

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email LIKE '%@example.com' OR email LIKE '%@handcraftedhaven.com'")
        .fetch_one(&pool)
        .await
        .expect("Failed to count users");
    assert!(users >= 6);

    // Passwords are stored hashed, never in plaintext.
    let plaintext: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE password = '123456'")
        .fetch_one(&pool)
        .await
        .expect("Failed to count plaintext passwords");
    assert_eq!(plaintext, 0);

    let orphans: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM reviews r LEFT JOIN products p ON p.id = r.product_id WHERE p.id IS NULL",
    )
    .fetch_one(&pool)
    .await
    .expect("Failed to count orphan reviews");
    assert_eq!(orphans, 0);
}

#[tokio::test]
#[ignore = "Requires running dashboard and PostgreSQL; drops the marketplace tables"]
async fn test_concurrent_seeds_on_empty_database() {
    let Some(url) = database_url() else {
        return;
    };
    let pool = sqlx::PgPool::connect(&url).await.expect("Failed to connect");
    sqlx::query("DROP TABLE IF EXISTS reviews, products, users")
        .execute(&pool)
        .await
        .expect("Failed to drop tables");
    sqlx::query(r#"DROP EXTENSION IF EXISTS "uuid-ossp""#)
        .execute(&pool)
        .await
        .expect("Failed to drop extension");

    let ((status_a, body_a), (status_b, body_b)) = tokio::join!(seed(), seed());

    assert_eq!(status_a, StatusCode::OK, "{body_a}");
    assert_eq!(status_b, StatusCode::OK, "{body_b}");

    // Every row lands exactly once across the two runs.
    let users = |body: &Value| body["usersInserted"].as_u64().unwrap_or_default();
    let products = |body: &Value| body["productsInserted"].as_u64().unwrap_or_default();
    assert_eq!(users(&body_a) + users(&body_b), 6);
    assert_eq!(products(&body_a) + products(&body_b), 9);
}
