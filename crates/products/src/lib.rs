//! Products domain module.
//!
//! The product record, its editable draft, stock classification and the
//! validation rules shared by the create and edit flows. Pure domain logic
//! (no IO besides loading catalog configuration).

pub mod config;
pub mod product;
pub mod seed;
pub mod validation;

pub use config::{CATALOG_ENV, CatalogConfig};
pub use product::{Product, ProductDraft, StockStatus};
pub use seed::seed_products;
pub use validation::{MAX_PRICE, MAX_QUANTITY, ProductField, quantity_error, validate_draft};
