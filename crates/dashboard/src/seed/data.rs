//! Compiled-in reference data for the marketplace.
//!
//! IDs are fixed so that re-running the seed hits the primary keys and
//! inserts nothing.

use std::collections::HashSet;

use handcrafted_haven_core::{AccountType, Category, Email, Price, ProductId, ReviewId, UserId};

use super::SeedError;

/// A seed user. The password is plain text and hashed at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedUser {
    pub id: UserId,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub account_type: AccountType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedProduct {
    pub id: ProductId,
    pub name: &'static str,
    pub image_url: &'static str,
    pub price: Price,
    pub description: &'static str,
    pub category: Category,
    pub seller_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReview {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub content: &'static str,
}

/// The full dataset for one seed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    pub products: Vec<SeedProduct>,
    pub reviews: Vec<SeedReview>,
}

const AMARA: UserId = UserId::from_u128(0x410544b2_4001_4271_9855_fec4b6a6442a);
const LUCAS: UserId = UserId::from_u128(0x3958dc9e_712f_4377_85e9_fec4b6a6442b);
const MEI: UserId = UserId::from_u128(0x3958dc9e_742f_4377_85e9_fec4b6a6442c);
const JORDAN: UserId = UserId::from_u128(0x76d65c26_f784_44a2_ac19_586678f7c2f1);
const PRIYA: UserId = UserId::from_u128(0x76d65c26_f784_44a2_ac19_586678f7c2f2);
const SAM: UserId = UserId::from_u128(0x76d65c26_f784_44a2_ac19_586678f7c2f3);

const SILVER_CUFF: ProductId = ProductId::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81a1);
const JADE_EARRINGS: ProductId = ProductId::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81a2);
const HARBOR_PRINT: ProductId = ProductId::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81a3);
const INK_STUDY: ProductId = ProductId::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81a4);
const WALNUT_BOWL: ProductId = ProductId::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81a5);
const STONEWARE_VASE: ProductId = ProductId::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81a6);
const LINEN_APRON: ProductId = ProductId::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81a7);
const WOOL_SCARF: ProductId = ProductId::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81a8);
const LEATHER_JOURNAL: ProductId = ProductId::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81a9);

const USERS: &[SeedUser] = &[
    SeedUser {
        id: AMARA,
        name: "Amara Okafor",
        email: "amara@handcraftedhaven.com",
        password: "123456",
        account_type: AccountType::Artisan,
    },
    SeedUser {
        id: LUCAS,
        name: "Lucas Ferreira",
        email: "lucas@handcraftedhaven.com",
        password: "123456",
        account_type: AccountType::Artisan,
    },
    SeedUser {
        id: MEI,
        name: "Mei Tanaka",
        email: "mei@handcraftedhaven.com",
        password: "123456",
        account_type: AccountType::Artisan,
    },
    SeedUser {
        id: JORDAN,
        name: "Jordan Blake",
        email: "jordan@example.com",
        password: "123456",
        account_type: AccountType::Customer,
    },
    SeedUser {
        id: PRIYA,
        name: "Priya Nair",
        email: "priya@example.com",
        password: "123456",
        account_type: AccountType::Customer,
    },
    SeedUser {
        id: SAM,
        name: "Sam Rivera",
        email: "sam@example.com",
        password: "123456",
        account_type: AccountType::Customer,
    },
];

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        id: SILVER_CUFF,
        name: "Hammered Silver Cuff",
        image_url: "/products/silver-cuff.jpg",
        price: Price::from_cents(6800),
        description: "Sterling silver cuff, hand-forged and hammered for texture.",
        category: Category::Jewelry,
        seller_id: AMARA,
    },
    SeedProduct {
        id: JADE_EARRINGS,
        name: "Jade Drop Earrings",
        image_url: "/products/jade-earrings.jpg",
        price: Price::from_cents(4200),
        description: "Polished jade drops on gold-filled hooks.",
        category: Category::Jewelry,
        seller_id: AMARA,
    },
    SeedProduct {
        id: HARBOR_PRINT,
        name: "Harbor at Dawn Print",
        image_url: "/products/harbor-print.jpg",
        price: Price::from_cents(3500),
        description: "Signed linocut print, 30x40cm, numbered edition of 50.",
        category: Category::Art,
        seller_id: LUCAS,
    },
    SeedProduct {
        id: INK_STUDY,
        name: "Sumi Ink Study",
        image_url: "/products/ink-study.jpg",
        price: Price::from_cents(12000),
        description: "Original ink painting on washi paper, unframed.",
        category: Category::Art,
        seller_id: MEI,
    },
    SeedProduct {
        id: WALNUT_BOWL,
        name: "Walnut Serving Bowl",
        image_url: "/products/walnut-bowl.jpg",
        price: Price::from_cents(5500),
        description: "Lathe-turned black walnut bowl finished with food-safe oil.",
        category: Category::Home,
        seller_id: LUCAS,
    },
    SeedProduct {
        id: STONEWARE_VASE,
        name: "Speckled Stoneware Vase",
        image_url: "/products/stoneware-vase.jpg",
        price: Price::from_cents(3800),
        description: "Wheel-thrown vase with a speckled oatmeal glaze.",
        category: Category::Home,
        seller_id: MEI,
    },
    SeedProduct {
        id: LINEN_APRON,
        name: "Linen Work Apron",
        image_url: "/products/linen-apron.jpg",
        price: Price::from_cents(2900),
        description: "Heavyweight linen apron with cross-back straps and two pockets.",
        category: Category::Clothing,
        seller_id: AMARA,
    },
    SeedProduct {
        id: WOOL_SCARF,
        name: "Hand-Woven Wool Scarf",
        image_url: "/products/wool-scarf.jpg",
        price: Price::from_cents(4600),
        description: "Merino scarf woven on a floor loom in a herringbone twill.",
        category: Category::Clothing,
        seller_id: MEI,
    },
    SeedProduct {
        id: LEATHER_JOURNAL,
        name: "Leather-Bound Journal",
        image_url: "/products/leather-journal.jpg",
        price: Price::from_cents(2400),
        description: "Coptic-stitched journal with a vegetable-tanned leather cover.",
        category: Category::Other,
        seller_id: LUCAS,
    },
];

const REVIEWS: &[SeedReview] = &[
    SeedReview {
        id: ReviewId::from_u128(0x5c1b6c2e_0c1f_4d3e_9a51_3f0d2f6b7a01),
        product_id: SILVER_CUFF,
        user_id: JORDAN,
        content: "Beautiful weight to it and the finish is flawless.",
    },
    SeedReview {
        id: ReviewId::from_u128(0x5c1b6c2e_0c1f_4d3e_9a51_3f0d2f6b7a02),
        product_id: WALNUT_BOWL,
        user_id: JORDAN,
        content: "Gorgeous grain. It is the centerpiece of our table now.",
    },
    SeedReview {
        id: ReviewId::from_u128(0x5c1b6c2e_0c1f_4d3e_9a51_3f0d2f6b7a03),
        product_id: HARBOR_PRINT,
        user_id: PRIYA,
        content: "The print arrived well packed and looks even better in person.",
    },
    SeedReview {
        id: ReviewId::from_u128(0x5c1b6c2e_0c1f_4d3e_9a51_3f0d2f6b7a04),
        product_id: WOOL_SCARF,
        user_id: PRIYA,
        content: "Soft, warm and not itchy at all.",
    },
    SeedReview {
        id: ReviewId::from_u128(0x5c1b6c2e_0c1f_4d3e_9a51_3f0d2f6b7a05),
        product_id: WALNUT_BOWL,
        user_id: SAM,
        content: "Bought two as gifts. Both recipients loved them.",
    },
    SeedReview {
        id: ReviewId::from_u128(0x5c1b6c2e_0c1f_4d3e_9a51_3f0d2f6b7a06),
        product_id: STONEWARE_VASE,
        user_id: SAM,
        content: "Slightly smaller than I expected but the glaze is lovely.",
    },
];

impl SeedData {
    /// The compiled-in marketplace dataset.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            users: USERS.to_vec(),
            products: PRODUCTS.to_vec(),
            reviews: REVIEWS.to_vec(),
        }
    }

    /// Check the dataset before any of it reaches storage.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::InvalidData` for an unparsable email, a product
    /// whose seller is not a seed user, or a review referencing an unknown
    /// product or user.
    pub fn validate(&self) -> Result<(), SeedError> {
        for user in &self.users {
            Email::parse(user.email).map_err(|e| {
                SeedError::InvalidData(format!("user {} has an invalid email: {e}", user.id))
            })?;
        }

        let user_ids: HashSet<UserId> = self.users.iter().map(|u| u.id).collect();
        let product_ids: HashSet<ProductId> = self.products.iter().map(|p| p.id).collect();

        if let Some(product) = self
            .products
            .iter()
            .find(|p| !user_ids.contains(&p.seller_id))
        {
            return Err(SeedError::InvalidData(format!(
                "product {} references unknown seller {}",
                product.id, product.seller_id
            )));
        }

        for review in &self.reviews {
            if !product_ids.contains(&review.product_id) {
                return Err(SeedError::InvalidData(format!(
                    "review {} references unknown product {}",
                    review.id, review.product_id
                )));
            }
            if !user_ids.contains(&review.user_id) {
                return Err(SeedError::InvalidData(format!(
                    "review {} references unknown user {}",
                    review.id, review.user_id
                )));
            }
        }

        Ok(())
    }

    /// Number of distinct (normalized) emails among the seed users.
    #[must_use]
    pub fn unique_emails(&self) -> usize {
        self.users
            .iter()
            .filter_map(|u| Email::parse(u.email).ok())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let data = SeedData::builtin();
        assert!(data.validate().is_ok());
        assert_eq!(data.unique_emails(), data.users.len());
    }

    #[test]
    fn test_builtin_covers_every_category() {
        let data = SeedData::builtin();
        for category in Category::ALL {
            assert!(data.products.iter().any(|p| p.category == category), "{category}");
        }
    }

    #[test]
    fn test_builtin_has_both_account_types() {
        let data = SeedData::builtin();
        assert!(data.users.iter().any(|u| u.account_type == AccountType::Artisan));
        assert!(data.users.iter().any(|u| u.account_type == AccountType::Customer));
    }

    #[test]
    fn test_dangling_seller_rejected() {
        let mut data = SeedData::builtin();
        data.products[0].seller_id = UserId::from_u128(0xdead);
        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("unknown seller"));
    }

    #[test]
    fn test_dangling_review_rejected() {
        let mut data = SeedData::builtin();
        data.reviews[0].product_id = ProductId::from_u128(0xbeef);
        assert!(data.validate().is_err());

        let mut data = SeedData::builtin();
        data.reviews[0].user_id = UserId::from_u128(0xbeef);
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut data = SeedData::builtin();
        data.users[0].email = "not-an-email";
        assert!(matches!(data.validate(), Err(SeedError::InvalidData(_))));
    }

    #[test]
    fn test_unique_emails_normalizes() {
        let mut data = SeedData::builtin();
        let mut twin = data.users[0].clone();
        twin.id = UserId::from_u128(0x77);
        twin.email = "AMARA@HandcraftedHaven.com";
        data.users.push(twin);
        assert_eq!(data.unique_emails(), data.users.len() - 1);
    }
}
