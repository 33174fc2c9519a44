//! Demonstration records loaded on every fresh start.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use stockroom_core::ProductId;

use crate::product::{Product, ProductDraft};

struct SeedRow {
    id: u64,
    name: &'static str,
    sku: &'static str,
    category: &'static str,
    quantity: i64,
    price_cents: i64,
    supplier: &'static str,
    barcode: &'static str,
    min_stock_level: i64,
    created: (i32, u32, u32),
    updated: (i32, u32, u32),
}

const SEED: [SeedRow; 3] = [
    SeedRow {
        id: 1,
        name: "Laptop HP EliteBook",
        sku: "HP-EB-001",
        category: "Electronics",
        quantity: 25,
        price_cents: 89999,
        supplier: "HP Inc.",
        barcode: "1234567890123",
        min_stock_level: 10,
        created: (2025, 1, 1),
        updated: (2025, 1, 15),
    },
    SeedRow {
        id: 2,
        name: "Wireless Mouse Logitech",
        sku: "LG-WM-002",
        category: "Accessories",
        quantity: 5,
        price_cents: 2999,
        supplier: "Logitech",
        barcode: "2345678901234",
        min_stock_level: 20,
        created: (2025, 1, 2),
        updated: (2025, 1, 14),
    },
    SeedRow {
        id: 3,
        name: "Office Chair Ergonomic",
        sku: "OC-ERG-003",
        category: "Furniture",
        quantity: 15,
        price_cents: 19999,
        supplier: "Office Supplies Co.",
        barcode: "3456789012345",
        min_stock_level: 8,
        created: (2025, 1, 3),
        updated: (2025, 1, 13),
    },
];

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    // Seed dates are compile-time constants and always valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The three sample products (ids 1–3) in insertion order.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|row| {
            let draft = ProductDraft {
                name: row.name.to_string(),
                sku: row.sku.to_string(),
                category: row.category.to_string(),
                supplier: row.supplier.to_string(),
                barcode: row.barcode.to_string(),
                quantity: row.quantity,
                price: Decimal::new(row.price_cents, 2),
                min_stock_level: row.min_stock_level,
            };
            Product::with_dates(
                ProductId::new(row.id),
                draft,
                date(row.created),
                date(row.updated),
            )
        })
        .collect()
}
