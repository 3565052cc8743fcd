//! Database seeding endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::seed::{self, PgSeedStore, SeedData, SeedLog, SeedSummary};
use crate::state::AppState;

/// Body of a successful seed run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedResponse {
    pub message: &'static str,
    pub users_inserted: u64,
    pub products_inserted: u64,
    pub reviews_inserted: u64,
    pub logs: Vec<String>,
}

impl SeedResponse {
    #[must_use]
    pub const fn new(summary: SeedSummary, logs: Vec<String>) -> Self {
        Self {
            message: "Database seeded!",
            users_inserted: summary.users_inserted,
            products_inserted: summary.products_inserted,
            reviews_inserted: summary.reviews_inserted,
            logs,
        }
    }
}

/// Body of a failed seed run.
#[derive(Debug, Serialize)]
pub struct SeedFailure {
    pub error: String,
    pub logs: Vec<String>,
}

/// Seed the database with the built-in dataset.
#[tracing::instrument(skip(state))]
pub async fn seed(State(state): State<AppState>) -> Response {
    let store = PgSeedStore::new(state.pool());
    let data = SeedData::builtin();
    let mut log = SeedLog::new();

    match seed::run(&store, &data, &mut log).await {
        Ok(summary) => Json(SeedResponse::new(summary, log.into_lines())).into_response(),
        Err(e) => {
            sentry::capture_error(&e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SeedFailure {
                    error: e.to_string(),
                    logs: log.into_lines(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_response_field_names() {
        let summary = SeedSummary {
            users_inserted: 1,
            products_inserted: 0,
            reviews_inserted: 0,
        };
        let json = serde_json::to_value(SeedResponse::new(summary, vec!["line".into()])).unwrap();

        assert_eq!(json["message"], "Database seeded!");
        assert_eq!(json["usersInserted"], 1);
        assert_eq!(json["productsInserted"], 0);
        assert_eq!(json["reviewsInserted"], 0);
        assert_eq!(json["logs"][0], "line");
    }

    #[test]
    fn test_failure_field_names() {
        let json = serde_json::to_value(SeedFailure {
            error: "boom".into(),
            logs: vec![],
        })
        .unwrap();
        assert_eq!(json["error"], "boom");
        assert!(json["logs"].as_array().unwrap().is_empty());
    }
}
