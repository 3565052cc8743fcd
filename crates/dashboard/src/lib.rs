//! Handcrafted Haven dashboard library.
//!
//! Server-rendered dashboard for an artisan marketplace: role-specific
//! overviews, a searchable product table, product detail pages, and an
//! idempotent database seeding workflow. The binary in `main.rs` wires this
//! library to a `PostgreSQL` pool, Sentry and a TCP listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
