//! Product repository for database operations.
//!
//! Search, pagination and the page count share one filter clause so the
//! pagination control always agrees with the table.

use sqlx::PgPool;
use uuid::Uuid;

use handcrafted_haven_core::{Price, ProductId, UserId};

use super::RepositoryError;
use crate::models::{NewProduct, Product, Seller};

/// Rows per page of the product table.
pub const PRODUCTS_PER_PAGE: u32 = 6;

const PRODUCT_COLUMNS: &str = r"
    SELECT p.id, p.name, p.image_url, p.price, p.description, p.category,
           p.seller_id, u.name AS seller_name
    FROM products p
    LEFT JOIN users u ON u.id = p.seller_id
";

// $1 = ILIKE pattern, $2 = category, $3 = min cents, $4 = max cents
const FILTER_CLAUSE: &str = r"
    WHERE (p.name ILIKE $1 OR p.description ILIKE $1 OR p.category ILIKE $1)
      AND ($2::TEXT IS NULL OR p.category = $2)
      AND ($3::INT IS NULL OR p.price >= $3)
      AND ($4::INT IS NULL OR p.price <= $4)
";

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    image_url: String,
    price: i32,
    description: String,
    category: String,
    seller_id: Option<Uuid>,
    seller_name: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            image_url: row.image_url,
            price: Price::from_cents(row.price),
            description: row.description,
            category: row.category,
            seller: row.seller_id.map(|id| Seller {
                id: UserId::new(id),
                name: row.seller_name,
            }),
        }
    }
}

/// Filters applied to the product table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of name, description or category.
    pub query: String,
    /// Exact category match.
    pub category: Option<String>,
    /// Inclusive lower bound.
    pub min_price: Option<Price>,
    /// Inclusive upper bound.
    pub max_price: Option<Price>,
}

impl ProductFilter {
    /// The `ILIKE` pattern for the text query, with wildcards escaped.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.query.len() + 2);
        pattern.push('%');
        for c in self.query.trim().chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

/// Number of pages needed to show `count` rows.
#[must_use]
pub fn pages_for(count: i64) -> u32 {
    let per_page = i64::from(PRODUCTS_PER_PAGE);
    let pages = (count.max(0) + per_page - 1) / per_page;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of products matching the filter, ordered by name.
    ///
    /// `page` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search(
        &self,
        filter: &ProductFilter,
        page: u32,
    ) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("{PRODUCT_COLUMNS} {FILTER_CLAUSE} ORDER BY p.name, p.id LIMIT $5 OFFSET $6");
        let offset = i64::from(page.max(1) - 1) * i64::from(PRODUCTS_PER_PAGE);

        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(filter.like_pattern())
            .bind(filter.category.as_deref())
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(i64::from(PRODUCTS_PER_PAGE))
            .bind(offset)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Number of pages the filtered table spans.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_pages(&self, filter: &ProductFilter) -> Result<u32, RepositoryError> {
        let sql = format!("SELECT COUNT(*) FROM products p {FILTER_CLAUSE}");

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(filter.like_pattern())
            .bind(filter.category.as_deref())
            .bind(filter.min_price)
            .bind(filter.max_price)
            .fetch_one(self.pool)
            .await?;

        Ok(pages_for(count))
    }

    /// Every product, unordered.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(PRODUCT_COLUMNS)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Products listed by one artisan.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_seller(&self, seller_id: UserId) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("{PRODUCT_COLUMNS} WHERE p.seller_id = $1 ORDER BY p.name, p.id");

        let rows: Vec<ProductRow> = sqlx::query_as(&sql)
            .bind(seller_id)
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a product (with its seller's name) by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("{PRODUCT_COLUMNS} WHERE p.id = $1");

        let row: Option<ProductRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a new product and return its generated ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, product: &NewProduct) -> Result<ProductId, RepositoryError> {
        let id: Uuid = sqlx::query_scalar(
            r"
            INSERT INTO products (name, image_url, price, description, category, seller_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            ",
        )
        .bind(&product.name)
        .bind(&product.image_url)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.category.slug())
        .bind(product.seller_id)
        .fetch_one(self.pool)
        .await?;

        Ok(ProductId::new(id))
    }
}
