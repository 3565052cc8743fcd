//! Review domain types.

use handcrafted_haven_core::{ReviewId, UserId};

/// A customer review of a product, joined with its author.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: Option<UserId>,
    /// Author display name, if the author row exists.
    pub author_name: Option<String>,
    pub content: String,
}
