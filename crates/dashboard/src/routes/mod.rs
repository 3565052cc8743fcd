//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Redirect to /dashboard
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (database)
//!
//! # Auth
//! GET  /login                       - Login page
//! POST /login                       - Login action (rate limited)
//! POST /logout                      - Logout action
//!
//! # Dashboard (requires auth)
//! GET  /dashboard                   - Role-specific overview
//! GET  /dashboard/products          - Filtered, paginated product table
//! POST /dashboard/products          - Create product (artisans only)
//! GET  /dashboard/products/create   - Create product form
//! GET  /dashboard/products/{id}     - Product detail with reviews
//!
//! # Seeding (when enabled)
//! GET  /api/seed                    - Create tables and insert reference data
//! ```

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod products;
pub mod seed;

use axum::{
    Router,
    extract::Request,
    middleware::from_fn,
    response::Redirect,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tower_sessions::SessionStore;

use crate::middleware::{auth_rate_limiter, request_id_middleware, session_layer};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(auth::login_page).merge(post(auth::login).layer(auth_rate_limiter())),
        )
        .route("/logout", post(auth::logout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/create", get(products::create_page))
        .route("/{id}", get(products::show))
}

/// Create all routes for the dashboard.
///
/// `GET /api/seed` is only mounted when the configuration enables it.
pub fn routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(auth_routes())
        .route("/dashboard", get(dashboard::index))
        .nest("/dashboard/products", product_routes());

    if state.config().seed_endpoint {
        router.route("/api/seed", get(seed::seed))
    } else {
        router
    }
}

/// The full application: routes, sessions, request IDs and tracing.
///
/// Sentry layers are added by the binary, outermost.
pub fn app<Store>(state: AppState, session_store: Store) -> Router
where
    Store: SessionStore + Clone,
{
    let sessions = session_layer(session_store, state.config());

    routes(&state)
        .layer(sessions)
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

#[cfg(test)]
mod tests;
