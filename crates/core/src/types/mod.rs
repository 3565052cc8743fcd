//! Core types for Handcrafted Haven.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod account;
pub mod category;
pub mod email;
pub mod id;
pub mod price;

pub use account::{AccountType, Role};
pub use category::Category;
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Price, PriceError};
