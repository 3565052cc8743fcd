//! Product domain types.

use handcrafted_haven_core::{Category, Price, ProductId, UserId};

/// A product listed by an artisan.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub price: Price,
    pub description: String,
    /// Free-text category; usually one of [`Category`]'s slugs.
    pub category: String,
    /// The listing artisan, if the row still references one.
    pub seller: Option<Seller>,
}

impl Product {
    /// Display label for the category, falling back to the raw value.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category
            .parse::<Category>()
            .map_or(self.category.as_str(), |c| c.label())
    }
}

/// The artisan selling a product.
#[derive(Debug, Clone)]
pub struct Seller {
    pub id: UserId,
    /// `None` when the referenced user row no longer exists.
    pub name: Option<String>,
}

/// A validated product ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub image_url: String,
    pub price: Price,
    pub description: String,
    pub category: Category,
    pub seller_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: &str) -> Product {
        Product {
            id: ProductId::from_u128(1),
            name: "Walnut bowl".to_owned(),
            image_url: "/products/walnut-bowl.jpg".to_owned(),
            price: Price::from_cents(4500),
            description: "Turned by hand".to_owned(),
            category: category.to_owned(),
            seller: None,
        }
    }

    #[test]
    fn test_category_label_known() {
        assert_eq!(product("home").category_label(), "Home Decor");
    }

    #[test]
    fn test_category_label_falls_back_to_raw() {
        assert_eq!(product("furniture").category_label(), "furniture");
    }
}
