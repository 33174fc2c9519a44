//! Derived views over a product snapshot.
//!
//! Everything here is a pure function of its input slice; recomputing on every
//! read is the intended usage.

use core::cmp::Ordering;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};
use stockroom_products::Product;

/// Column a list view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Name,
    Sku,
    Category,
    Supplier,
    Barcode,
    Quantity,
    Price,
    MinStockLevel,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Sku => "sku",
            SortField::Category => "category",
            SortField::Supplier => "supplier",
            SortField::Barcode => "barcode",
            SortField::Quantity => "quantity",
            SortField::Price => "price",
            SortField::MinStockLevel => "minStockLevel",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortField::Id => a.id().cmp(&b.id()),
            SortField::Name => locale_cmp(a.name(), b.name()),
            SortField::Sku => locale_cmp(a.sku(), b.sku()),
            SortField::Category => locale_cmp(a.category(), b.category()),
            SortField::Supplier => locale_cmp(a.supplier(), b.supplier()),
            SortField::Barcode => locale_cmp(a.barcode(), b.barcode()),
            SortField::Quantity => a.quantity().cmp(&b.quantity()),
            SortField::Price => a.price().cmp(&b.price()),
            SortField::MinStockLevel => a.min_stock_level().cmp(&b.min_stock_level()),
            SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
            SortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    /// Accepts the camelCase column names as well as snake_case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim() {
            "id" => SortField::Id,
            "name" => SortField::Name,
            "sku" => SortField::Sku,
            "category" => SortField::Category,
            "supplier" => SortField::Supplier,
            "barcode" => SortField::Barcode,
            "quantity" => SortField::Quantity,
            "price" => SortField::Price,
            "minStockLevel" | "min_stock_level" => SortField::MinStockLevel,
            "createdAt" | "created_at" => SortField::CreatedAt,
            "updatedAt" | "updated_at" => SortField::UpdatedAt,
            other => {
                return Err(DomainError::invalid_argument(format!("unknown sort field '{other}'")));
            }
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Toggle, as a column header click does.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(DomainError::invalid_argument(format!(
                "unknown sort direction '{other}'"
            ))),
        }
    }
}

/// Locale-style string ordering: case-insensitive first, then lowercase
/// before uppercase for strings that differ only in case.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find_map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Some(Ordering::Less),
                (false, true) => Some(Ordering::Greater),
                _ => None,
            })
            .unwrap_or(Ordering::Equal)
    })
}

/// Case-insensitive substring match on name, sku and category.
///
/// An empty term matches every product.
pub fn text_search<'a>(products: impl IntoIterator<Item = &'a Product>, term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .into_iter()
        .filter(|p| {
            needle.is_empty()
                || p.name().to_lowercase().contains(&needle)
                || p.sku().to_lowercase().contains(&needle)
                || p.category().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Stable sort; ties keep their incoming relative order in both directions.
pub fn sort_by<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    field: SortField,
    direction: SortDirection,
) -> Vec<&'a Product> {
    let mut sorted: Vec<&Product> = products.into_iter().collect();
    match direction {
        SortDirection::Asc => sorted.sort_by(|a, b| field.compare(a, b)),
        SortDirection::Desc => sorted.sort_by(|a, b| field.compare(b, a)),
    }
    sorted
}

/// Products at or below their minimum stock level.
pub fn low_stock<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
    products.into_iter().filter(|p| p.is_low_stock()).collect()
}

/// Products with nothing on hand.
pub fn out_of_stock<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a Product> {
    products.into_iter().filter(|p| p.is_out_of_stock()).collect()
}

pub fn by_category<'a>(products: impl IntoIterator<Item = &'a Product>, category: &str) -> Vec<&'a Product> {
    products.into_iter().filter(|p| p.category() == category).collect()
}

pub fn by_supplier<'a>(products: impl IntoIterator<Item = &'a Product>, supplier: &str) -> Vec<&'a Product> {
    products.into_iter().filter(|p| p.supplier() == supplier).collect()
}

/// Products priced within `[min, max]` (inclusive).
pub fn price_range<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    min: Decimal,
    max: Decimal,
) -> Vec<&'a Product> {
    products
        .into_iter()
        .filter(|p| p.price() >= min && p.price() <= max)
        .collect()
}

pub fn find_by_sku<'a>(products: impl IntoIterator<Item = &'a Product>, sku: &str) -> Option<&'a Product> {
    products.into_iter().find(|p| p.sku() == sku)
}

/// Exact barcode match against the trimmed input.
///
/// Blank input yields `EmptyInput`; no match yields `NotFound`.
pub fn barcode_lookup<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    code: &str,
) -> DomainResult<&'a Product> {
    let code = code.trim();
    if code.is_empty() {
        return Err(DomainError::EmptyInput("barcode"));
    }
    products
        .into_iter()
        .find(|p| p.barcode() == code)
        .ok_or_else(|| DomainError::not_found(format!("no product with barcode {code}")))
}
