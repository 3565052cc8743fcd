//! Category `<select>` options.

use handcrafted_haven_core::Category;

/// One `<option>` of a category select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub slug: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl CategoryOption {
    /// Options for every category, marking the one matching `selected`.
    #[must_use]
    pub fn all(selected: &str) -> Vec<Self> {
        Category::ALL
            .iter()
            .map(|c| Self {
                slug: c.slug(),
                label: c.label(),
                selected: c.slug() == selected,
            })
            .collect()
    }
}
