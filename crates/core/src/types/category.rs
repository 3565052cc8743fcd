//! Product categories offered in the create form and the listing filter.

use serde::{Deserialize, Serialize};

/// A product category.
///
/// The `products.category` column is free text, so rows written outside the
/// dashboard may hold other values; those still display and filter by their
/// raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Jewelry,
    Art,
    Home,
    Clothing,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::Jewelry,
        Self::Art,
        Self::Home,
        Self::Clothing,
        Self::Other,
    ];

    /// The stored column value.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Jewelry => "jewelry",
            Self::Art => "art",
            Self::Home => "home",
            Self::Clothing => "clothing",
            Self::Other => "other",
        }
    }

    /// The label shown in select inputs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jewelry => "Jewelry",
            Self::Art => "Art",
            Self::Home => "Home Decor",
            Self::Clothing => "Clothing",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_parses_back() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert!("furniture".parse::<Category>().is_err());
        assert!("Home Decor".parse::<Category>().is_err());
    }

    #[test]
    fn test_home_label() {
        assert_eq!(Category::Home.label(), "Home Decor");
    }
}
