//! Product route handlers: table, detail, and the create form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use handcrafted_haven_core::{Category, Price, ProductId, UserId};

use crate::components::{Breadcrumb, CategoryOption, Pagination};
use crate::db::{ProductFilter, ProductRepository, ReviewRepository};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{NewProduct, Product, Review, SessionUser};
use crate::state::AppState;

const PRODUCTS_PATH: &str = "/dashboard/products";

// =============================================================================
// Query & Form Types
// =============================================================================

/// Query parameters of the product table.
///
/// Everything arrives as text so that a malformed value degrades to "no
/// filter" instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsQuery {
    pub query: Option<String>,
    pub page: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl ProductsQuery {
    /// Requested page, 1 when missing, unparsable or below 1.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    /// Search filter with prices converted from currency units to cents.
    #[must_use]
    pub fn filter(&self) -> ProductFilter {
        let price = |raw: Option<&str>| raw.and_then(|v| Price::parse_units(v).ok());

        ProductFilter {
            query: self.query.clone().unwrap_or_default(),
            category: self
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_owned),
            min_price: price(self.min_price.as_deref()),
            max_price: price(self.max_price.as_deref()),
        }
    }
}

/// Create-product form data, kept raw so it can be re-rendered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub image_url: String,
    pub price: String,
    pub description: String,
    pub category: String,
}

impl ProductForm {
    /// Validate the form into an insertable product.
    ///
    /// # Errors
    ///
    /// Returns the message to show above the form.
    pub fn validate(&self, seller_id: UserId) -> std::result::Result<NewProduct, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required.".to_string());
        }

        let image_url = self.image_url.trim();
        if !is_image_url(image_url) {
            return Err("Image URL must be a path starting with / or an http(s) URL.".to_string());
        }

        let price = Price::parse_units(&self.price)
            .map_err(|e| format!("Invalid price: {e}."))?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err("Description is required.".to_string());
        }

        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| "Please choose a category.".to_string())?;

        Ok(NewProduct {
            name: name.to_string(),
            image_url: image_url.to_string(),
            price,
            description: description.to_string(),
            category,
            seller_id,
        })
    }
}

fn is_image_url(value: &str) -> bool {
    if value.starts_with('/') && !value.starts_with("//") {
        return true;
    }
    url::Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

// =============================================================================
// Templates
// =============================================================================

/// Product table page.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub user: SessionUser,
    pub products: Vec<Product>,
    pub query: String,
    pub min_price: String,
    pub max_price: String,
    pub categories: Vec<CategoryOption>,
    pub pagination: Pagination,
}

/// Product detail page.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub user: SessionUser,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub product: Product,
    pub reviews: Vec<Review>,
}

/// Create-product form page.
#[derive(Template, WebTemplate)]
#[template(path = "products/create.html")]
pub struct CreateProductTemplate {
    pub user: SessionUser,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub categories: Vec<CategoryOption>,
    pub form: ProductForm,
    pub error: Option<String>,
}

impl CreateProductTemplate {
    fn new(user: SessionUser, form: ProductForm, error: Option<String>) -> Self {
        Self {
            user,
            breadcrumbs: vec![
                Breadcrumb::link("Dashboard", "/dashboard"),
                Breadcrumb::link("Products", PRODUCTS_PATH),
                Breadcrumb::active("Create Product", format!("{PRODUCTS_PATH}/create")),
            ],
            categories: CategoryOption::all(&form.category),
            form,
            error,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the filtered, paginated product table.
#[tracing::instrument(skip(state, user))]
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ProductsQuery>,
) -> Result<impl IntoResponse> {
    let filter = params.filter();
    let page = params.page();
    let repo = ProductRepository::new(state.pool());

    let products = repo.search(&filter, page).await?;
    let total_pages = repo.count_pages(&filter).await?;

    let query = params.query.unwrap_or_default();
    let category = params.category.unwrap_or_default();
    let min_price = params.min_price.unwrap_or_default();
    let max_price = params.max_price.unwrap_or_default();

    let pagination = Pagination::new(
        PRODUCTS_PATH,
        &[
            ("query", query.as_str()),
            ("category", category.as_str()),
            ("minPrice", min_price.as_str()),
            ("maxPrice", max_price.as_str()),
        ],
        page,
        total_pages,
    );

    Ok(ProductsIndexTemplate {
        user,
        products,
        categories: CategoryOption::all(category.trim()),
        query,
        min_price,
        max_price,
        pagination,
    })
}

/// Display one product with its seller and reviews.
///
/// A malformed or unknown ID renders the not-found page.
#[tracing::instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = ProductId::parse(&id).map_err(|_| AppError::NotFound("product".to_string()))?;

    let product = ProductRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("product".to_string()))?;

    let reviews = ReviewRepository::new(state.pool())
        .list_for_product(id)
        .await?;

    Ok(ProductShowTemplate {
        user,
        breadcrumbs: vec![
            Breadcrumb::link("Products", PRODUCTS_PATH),
            Breadcrumb::active("Product Details", format!("{PRODUCTS_PATH}/{id}")),
        ],
        product,
        reviews,
    })
}

/// Display the create-product form.
pub async fn create_page(RequireAuth(user): RequireAuth) -> impl IntoResponse {
    CreateProductTemplate::new(user, ProductForm::default(), None)
}

/// Handle create-product form submission.
#[tracing::instrument(skip(state, user, form), fields(user_id = %user.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    if !user.role.is_artisan() {
        return Err(AppError::Forbidden(
            "only artisan accounts can list products".to_string(),
        ));
    }

    let product = match form.validate(user.id) {
        Ok(product) => product,
        Err(message) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                CreateProductTemplate::new(user, form, Some(message)),
            )
                .into_response());
        }
    };

    let id = ProductRepository::new(state.pool()).create(&product).await?;
    tracing::info!(product_id = %id, "Product created");

    Ok(Redirect::to(&format!("{PRODUCTS_PATH}/{id}")).into_response())
}
