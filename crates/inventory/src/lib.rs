//! Inventory store and its derived views.
//!
//! The store owns the product collection and is the only place it is mutated.
//! Everything else here (search, sorting, stock alerts, barcode lookup and the
//! analytics report) is a pure function over a borrowed slice of products.

pub mod analytics;
pub mod event;
pub mod store;
pub mod views;

pub use analytics::{AggregateReport, CategoryQuantity, InventoryStats, SupplierCount, ValuedProduct};
pub use event::{InventoryEvent, ProductCreated, ProductDeleted, ProductUpdated, StockAdjusted};
pub use store::InventoryStore;
pub use views::{SortDirection, SortField, locale_cmp};
