//! Breadcrumb trail above detail and form pages.

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
    /// The page currently shown; rendered without a link.
    pub active: bool,
}

impl Breadcrumb {
    #[must_use]
    pub fn link(label: &str, href: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            href: href.into(),
            active: false,
        }
    }

    #[must_use]
    pub fn active(label: &str, href: impl Into<String>) -> Self {
        Self {
            active: true,
            ..Self::link(label, href)
        }
    }
}
