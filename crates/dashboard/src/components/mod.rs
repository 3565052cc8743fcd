//! View-model types shared by several templates.

pub mod breadcrumbs;
pub mod category_select;
pub mod pagination;

pub use breadcrumbs::Breadcrumb;
pub use category_select::CategoryOption;
pub use pagination::{PageItem, PageLink, Pagination, page_numbers};
