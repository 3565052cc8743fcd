//! Page-number control for the product table.
//!
//! Shows every page for short tables and collapses long ones around the
//! first, last and current pages.

use std::fmt::Write;

/// One slot of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Number(u32),
    Ellipsis,
}

/// Page slots to show for `current` out of `total` pages.
///
/// ```
/// use handcrafted_haven_dashboard::components::{PageItem::{Ellipsis, Number}, page_numbers};
///
/// assert_eq!(
///     page_numbers(5, 10),
///     [Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(10)]
/// );
/// ```
#[must_use]
pub fn page_numbers(current: u32, total: u32) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Number};

    if total <= 7 {
        return (1..=total).map(Number).collect();
    }
    if current <= 3 {
        return vec![
            Number(1),
            Number(2),
            Number(3),
            Ellipsis,
            Number(total - 1),
            Number(total),
        ];
    }
    if current >= total - 2 {
        return vec![
            Number(1),
            Number(2),
            Ellipsis,
            Number(total - 2),
            Number(total - 1),
            Number(total),
        ];
    }
    vec![
        Number(1),
        Ellipsis,
        Number(current - 1),
        Number(current),
        Number(current + 1),
        Ellipsis,
        Number(total),
    ]
}

/// A rendered slot: a page link, the current page, or an ellipsis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    /// `None` for the ellipsis and the current page.
    pub href: Option<String>,
    pub current: bool,
}

/// The complete control: previous/next arrows and page slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub previous: Option<String>,
    pub next: Option<String>,
    pub links: Vec<PageLink>,
}

impl Pagination {
    /// Build the control for `path`, carrying the non-empty `params` into
    /// every link alongside `page`.
    #[must_use]
    pub fn new(path: &str, params: &[(&str, &str)], current: u32, total: u32) -> Self {
        let href = |page: u32| page_href(path, params, page);

        let links = page_numbers(current, total)
            .into_iter()
            .map(|item| match item {
                PageItem::Number(page) if page == current => PageLink {
                    label: page.to_string(),
                    href: None,
                    current: true,
                },
                PageItem::Number(page) => PageLink {
                    label: page.to_string(),
                    href: Some(href(page)),
                    current: false,
                },
                PageItem::Ellipsis => PageLink {
                    label: "...".to_string(),
                    href: None,
                    current: false,
                },
            })
            .collect();

        Self {
            previous: (current > 1).then(|| href(current - 1)),
            next: (current < total).then(|| href(current + 1)),
            links,
        }
    }

    /// Whether there is anything to paginate.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.links.len() > 1
    }
}

/// `path?k=v&...&page=N` with empty values dropped.
#[must_use]
pub fn page_href(path: &str, params: &[(&str, &str)], page: u32) -> String {
    let mut href = format!("{path}?");
    for (key, value) in params.iter().filter(|(_, v)| !v.trim().is_empty()) {
        let _ = write!(href, "{key}={}&", urlencoding::encode(value.trim()));
    }
    let _ = write!(href, "page={page}");
    href
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Number};
    use super::*;

    #[test]
    fn test_short_tables_show_every_page() {
        assert!(page_numbers(1, 0).is_empty());
        assert_eq!(page_numbers(1, 1), [Number(1)]);
        assert_eq!(
            page_numbers(4, 7),
            (1..=7).map(Number).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_near_start() {
        assert_eq!(
            page_numbers(3, 10),
            [Number(1), Number(2), Number(3), Ellipsis, Number(9), Number(10)]
        );
    }

    #[test]
    fn test_near_end() {
        assert_eq!(
            page_numbers(8, 10),
            [Number(1), Number(2), Ellipsis, Number(8), Number(9), Number(10)]
        );
    }

    #[test]
    fn test_middle() {
        assert_eq!(
            page_numbers(5, 10),
            [
                Number(1),
                Ellipsis,
                Number(4),
                Number(5),
                Number(6),
                Ellipsis,
                Number(10)
            ]
        );
    }

    #[test]
    fn test_page_href_drops_empty_params() {
        let href = page_href(
            "/dashboard/products",
            &[("query", "oak bowl"), ("category", ""), ("minPrice", "10")],
            2,
        );
        assert_eq!(href, "/dashboard/products?query=oak%20bowl&minPrice=10&page=2");
    }

    #[test]
    fn test_pagination_links() {
        let pagination = Pagination::new("/p", &[], 1, 3);
        assert_eq!(pagination.previous, None);
        assert_eq!(pagination.next.as_deref(), Some("/p?page=2"));
        assert!(pagination.links.first().is_some_and(|l| l.current && l.href.is_none()));
        assert_eq!(
            pagination.links.get(2).and_then(|l| l.href.as_deref()),
            Some("/p?page=3")
        );
        assert!(pagination.is_visible());
    }

    #[test]
    fn test_single_page_hidden() {
        let pagination = Pagination::new("/p", &[], 1, 1);
        assert!(!pagination.is_visible());
        assert_eq!(pagination.next, None);
    }
}
