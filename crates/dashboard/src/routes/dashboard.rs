//! Dashboard overview, rendered per role.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use rand::Rng;

use handcrafted_haven_core::Role;

use crate::db::{ProductRepository, ReviewRepository};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{Product, SessionUser};
use crate::state::AppState;

/// Customer overview: a featured product and the customer's review count.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/customer.html")]
pub struct CustomerDashboardTemplate {
    pub user: SessionUser,
    pub featured: Option<Product>,
    pub review_count: i64,
}

/// Artisan overview: the artisan's own listings.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/artisan.html")]
pub struct ArtisanDashboardTemplate {
    pub user: SessionUser,
    pub products: Vec<Product>,
}

/// Shown when the session carries an unknown or missing account type.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/fallback.html")]
pub struct FallbackDashboardTemplate {
    pub user: SessionUser,
    pub account_type: String,
}

/// Display the dashboard for the logged-in user.
#[tracing::instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response> {
    match user.role.clone() {
        Role::Customer => {
            let products = ProductRepository::new(state.pool()).list_all().await?;
            let review_count = ReviewRepository::new(state.pool())
                .count_by_user(user.id)
                .await?;

            Ok(CustomerDashboardTemplate {
                featured: pick_featured(products),
                review_count,
                user,
            }
            .into_response())
        }
        Role::Artisan => {
            let products = ProductRepository::new(state.pool())
                .list_by_seller(user.id)
                .await?;

            Ok(ArtisanDashboardTemplate { user, products }.into_response())
        }
        role @ Role::Unknown(_) => Ok(FallbackDashboardTemplate {
            account_type: role.label().to_string(),
            user,
        }
        .into_response()),
    }
}

/// A uniformly random product, or `None` when there are none.
fn pick_featured(mut products: Vec<Product>) -> Option<Product> {
    if products.is_empty() {
        return None;
    }
    let index = rand::rng().random_range(0..products.len());
    Some(products.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use handcrafted_haven_core::{Price, ProductId};

    use super::*;

    fn product(n: u128) -> Product {
        Product {
            id: ProductId::from_u128(n),
            name: format!("Product {n}"),
            image_url: String::new(),
            price: Price::from_cents(100),
            description: String::new(),
            category: "art".to_owned(),
            seller: None,
        }
    }

    #[test]
    fn test_pick_featured_empty() {
        assert!(pick_featured(Vec::new()).is_none());
    }

    #[test]
    fn test_pick_featured_returns_member() {
        let ids: Vec<_> = (1..=4).map(ProductId::from_u128).collect();
        let featured = pick_featured((1..=4).map(product).collect());
        assert!(featured.is_some_and(|p| ids.contains(&p.id)));
    }
}
