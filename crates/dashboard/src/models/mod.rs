//! Domain models for the dashboard.
//!
//! These are validated domain objects, separate from the row types the
//! repositories decode.

pub mod product;
pub mod review;
pub mod session;
pub mod user;

pub use product::{NewProduct, Product, Seller};
pub use review::Review;
pub use session::{CurrentUser, SessionUser, keys as session_keys};
pub use user::User;
