//! User domain types.

use handcrafted_haven_core::{Email, UserId};

/// A marketplace user (domain type).
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email address.
    pub email: Email,
    /// Raw `account_type` column value, resolved into a role at login.
    pub account_type: String,
}
