//! Integration tests for Handcrafted Haven.
//!
//! The tests in `tests/` talk to a running dashboard over HTTP and, where
//! they check stored rows, to its database directly. They are `#[ignore]`d so
//! `cargo test` stays hermetic.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and the dashboard
//! cargo run -p handcrafted-haven-dashboard
//!
//! # Run integration tests
//! cargo test -p handcrafted-haven-integration-tests -- --ignored --test-threads=1
//! ```
//!
//! # Environment Variables
//!
//! - `HAVEN_BASE_URL` - Dashboard URL (default: `http://localhost:3000`)
//! - `HAVEN_DATABASE_URL` - Same database the dashboard uses

use reqwest::Client;
use reqwest::redirect::Policy;

/// Password shared by every seeded account.
pub const SEED_PASSWORD: &str = "123456";

/// A seeded customer account.
pub const CUSTOMER_EMAIL: &str = "jordan@example.com";

/// A seeded artisan account.
pub const ARTISAN_EMAIL: &str = "amara@handcraftedhaven.com";

/// Base URL of the dashboard under test.
#[must_use]
pub fn base_url() -> String {
    std::env::var("HAVEN_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Database URL, if configured.
#[must_use]
pub fn database_url() -> Option<String> {
    ["HAVEN_DATABASE_URL", "POSTGRES_URL", "DATABASE_URL"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok())
}

/// A client that keeps cookies and does not follow redirects, so tests can
/// assert on `Location` headers.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
#[allow(clippy::expect_used)]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Seed the database and log in as `email`.
///
/// # Panics
///
/// Panics if seeding or the login request fails.
#[allow(clippy::expect_used)]
pub async fn logged_in_client(email: &str) -> Client {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/api/seed"))
        .send()
        .await
        .expect("Failed to seed");
    assert!(resp.status().is_success(), "seed failed: {}", resp.status());

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("email", email), ("password", SEED_PASSWORD)])
        .send()
        .await
        .expect("Failed to log in");
    assert!(resp.status().is_redirection());
    assert_eq!(
        resp.headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/dashboard")
    );

    client
}
