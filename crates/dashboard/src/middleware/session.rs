//! Session middleware configuration.
//!
//! Cookie settings for tower-sessions, independent of the backing store.

use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

use crate::config::DashboardConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "hh_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Apply the dashboard's cookie settings to a session store.
///
/// Production passes the `PostgreSQL` store, whose `tower_sessions.session`
/// table is created by `hh-cli migrate`.
#[must_use]
pub fn session_layer<S>(store: S, config: &DashboardConfig) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
