//! Business logic services for the dashboard.
//!
//! Services sit between route handlers and repositories. Handlers parse
//! requests and render responses; services own rules such as credential
//! checks.

pub mod auth;
