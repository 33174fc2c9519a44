use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ProductId};

/// Three-way stock classification shown next to every product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Low,
    Medium,
    Good,
}

impl StockStatus {
    /// `Low` at or below the threshold, `Medium` up to twice the threshold,
    /// `Good` above that.
    pub fn classify(quantity: i64, min_stock_level: i64) -> Self {
        if quantity <= min_stock_level {
            StockStatus::Low
        } else if quantity <= min_stock_level.saturating_mul(2) {
            StockStatus::Medium
        } else {
            StockStatus::Good
        }
    }

    /// Display label used by the dashboard badges.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Low => "Low Stock",
            StockStatus::Medium => "Medium",
            StockStatus::Good => "In Stock",
        }
    }
}

/// Editable product fields as submitted by the create/edit forms.
///
/// Numeric fields are signed so that out-of-range input can be reported by
/// validation instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub supplier: String,
    #[serde(default)]
    pub barcode: String,
    pub quantity: i64,
    pub price: Decimal,
    pub min_stock_level: i64,
}

impl Default for ProductDraft {
    /// Blank form: everything empty, threshold preset to 10.
    fn default() -> Self {
        Self {
            name: String::new(),
            sku: String::new(),
            category: String::new(),
            supplier: String::new(),
            barcode: String::new(),
            quantity: 0,
            price: Decimal::ZERO,
            min_stock_level: 10,
        }
    }
}

impl From<&Product> for ProductDraft {
    /// Pre-fill an edit form from an existing record.
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            sku: product.sku.clone(),
            category: product.category.clone(),
            supplier: product.supplier.clone(),
            barcode: product.barcode.clone(),
            quantity: product.quantity,
            price: product.price,
            min_stock_level: product.min_stock_level,
        }
    }
}

/// A stocked product.
///
/// Construction and mutation go through [`Product::create`], [`Product::revise`]
/// and [`Product::restock`]; the store validates drafts before calling them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    sku: String,
    category: String,
    supplier: String,
    barcode: String,
    quantity: i64,
    price: Decimal,
    min_stock_level: i64,
    created_at: NaiveDate,
    updated_at: NaiveDate,
}

impl Product {
    /// New record from a validated draft; both dates are set to `today`.
    pub fn create(id: ProductId, draft: ProductDraft, today: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            sku: draft.sku,
            category: draft.category,
            supplier: draft.supplier,
            barcode: draft.barcode,
            quantity: draft.quantity,
            price: draft.price,
            min_stock_level: draft.min_stock_level,
            created_at: today,
            updated_at: today,
        }
    }

    /// Record with explicit dates (seed data, fixtures).
    pub(crate) fn with_dates(
        id: ProductId,
        draft: ProductDraft,
        created_at: NaiveDate,
        updated_at: NaiveDate,
    ) -> Self {
        let mut product = Self::create(id, draft, created_at);
        product.updated_at = updated_at;
        product
    }

    /// Replace every editable field. `id` and `created_at` are kept.
    pub fn revise(&mut self, draft: ProductDraft, today: NaiveDate) {
        self.name = draft.name;
        self.sku = draft.sku;
        self.category = draft.category;
        self.supplier = draft.supplier;
        self.barcode = draft.barcode;
        self.quantity = draft.quantity;
        self.price = draft.price;
        self.min_stock_level = draft.min_stock_level;
        self.updated_at = today;
    }

    /// Set the on-hand quantity.
    pub fn restock(&mut self, quantity: i64, today: NaiveDate) {
        self.quantity = quantity;
        self.updated_at = today;
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn min_stock_level(&self) -> i64 {
        self.min_stock_level
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDate {
        self.updated_at
    }

    /// `quantity × price`, saturating at `Decimal::MAX`.
    pub fn total_value(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.min_stock_level)
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_status() == StockStatus::Low
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
