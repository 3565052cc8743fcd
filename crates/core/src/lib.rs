//! Handcrafted Haven Core - Shared types library.
//!
//! This crate provides the domain types used across the Handcrafted Haven
//! components:
//! - `dashboard` - Server-rendered marketplace dashboard and seeding endpoint
//! - `cli` - Command-line tools for schema setup and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. Database encoding is available behind the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, emails, prices, categories, and account roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
