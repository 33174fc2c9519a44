//! Aggregate analytics over the whole collection.
//!
//! Reports are always computed from the full product list, never from a
//! filtered or sorted view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;
use stockroom_products::Product;

/// Total quantity held in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuantity {
    pub category: String,
    pub quantity: i64,
    /// Share of the overall quantity, percent with one decimal place.
    pub percentage: Decimal,
}

/// Number of products sourced from one supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierCount {
    pub supplier: String,
    pub products: usize,
    /// Share of all products, percent with one decimal place.
    pub percentage: Decimal,
}

/// One row of the "top products by value" ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuedProduct {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: Decimal,
    pub total_value: Decimal,
}

impl From<&Product> for ValuedProduct {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id(),
            name: p.name().to_string(),
            category: p.category().to_string(),
            quantity: p.quantity(),
            price: p.price(),
            total_value: p.total_value(),
        }
    }
}

/// Everything the analytics view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport {
    pub total_products: usize,
    pub total_value: Decimal,
    pub total_quantity: i64,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    pub supplier_count: usize,
    /// Groups in first-seen collection order.
    pub category_breakdown: Vec<CategoryQuantity>,
    /// Groups in first-seen collection order.
    pub supplier_breakdown: Vec<SupplierCount>,
    pub top_value_products: Vec<ValuedProduct>,
}

/// Dashboard header counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_products: usize,
    pub low_stock_products: usize,
    pub out_of_stock_products: usize,
    pub total_value: Decimal,
    pub total_quantity: i64,
}

/// `Σ quantity × price`, saturating at `Decimal::MAX`.
pub fn total_value<'a>(products: impl IntoIterator<Item = &'a Product>) -> Decimal {
    products
        .into_iter()
        .map(Product::total_value)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `Σ quantity`, saturating at `i64::MAX`.
pub fn total_quantity<'a>(products: impl IntoIterator<Item = &'a Product>) -> i64 {
    products
        .into_iter()
        .map(Product::quantity)
        .fold(0, i64::saturating_add)
}

/// Up to `limit` products ranked by `quantity × price`, highest first.
/// Ties keep collection order.
pub fn top_by_value(products: &[Product], limit: usize) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| b.total_value().cmp(&a.total_value()));
    ranked.truncate(limit);
    ranked
}

fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    // Divide first: `part <= whole`, so the ratio never overflows.
    match part.checked_div(whole) {
        Some(ratio) => (ratio * Decimal::ONE_HUNDRED).round_dp(1),
        None => Decimal::ZERO,
    }
}

pub fn category_breakdown(products: &[Product]) -> Vec<CategoryQuantity> {
    let mut groups: Vec<CategoryQuantity> = Vec::new();
    for p in products {
        match groups.iter_mut().find(|g| g.category == p.category()) {
            Some(group) => group.quantity = group.quantity.saturating_add(p.quantity()),
            None => groups.push(CategoryQuantity {
                category: p.category().to_string(),
                quantity: p.quantity(),
                percentage: Decimal::ZERO,
            }),
        }
    }

    let whole = Decimal::from(groups.iter().map(|g| g.quantity).fold(0, i64::saturating_add));
    for group in &mut groups {
        group.percentage = percentage(Decimal::from(group.quantity), whole);
    }
    groups
}

pub fn supplier_breakdown(products: &[Product]) -> Vec<SupplierCount> {
    let mut groups: Vec<SupplierCount> = Vec::new();
    for p in products {
        match groups.iter_mut().find(|g| g.supplier == p.supplier()) {
            Some(group) => group.products += 1,
            None => groups.push(SupplierCount {
                supplier: p.supplier().to_string(),
                products: 1,
                percentage: Decimal::ZERO,
            }),
        }
    }

    let whole = Decimal::from(products.len() as u64);
    for group in &mut groups {
        group.percentage = percentage(Decimal::from(group.products as u64), whole);
    }
    groups
}

pub fn stats(products: &[Product]) -> InventoryStats {
    InventoryStats {
        total_products: products.len(),
        low_stock_products: products.iter().filter(|p| p.is_low_stock()).count(),
        out_of_stock_products: products.iter().filter(|p| p.is_out_of_stock()).count(),
        total_value: total_value(products),
        total_quantity: total_quantity(products),
    }
}

/// Full analytics report; `top_limit` caps the value ranking.
pub fn aggregate(products: &[Product], top_limit: usize) -> AggregateReport {
    let stats = stats(products);
    let supplier_breakdown = supplier_breakdown(products);

    AggregateReport {
        total_products: stats.total_products,
        total_value: stats.total_value,
        total_quantity: stats.total_quantity,
        low_stock_count: stats.low_stock_products,
        out_of_stock_count: stats.out_of_stock_products,
        supplier_count: supplier_breakdown.len(),
        category_breakdown: category_breakdown(products),
        supplier_breakdown,
        top_value_products: top_by_value(products, top_limit)
            .into_iter()
            .map(ValuedProduct::from)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockroom_products::{ProductDraft, seed_products};

    fn product(id: u64, category: &str, supplier: &str, quantity: i64, price_cents: i64) -> Product {
        let draft = ProductDraft {
            name: format!("Item {id}"),
            sku: format!("SKU-{id}"),
            category: category.to_string(),
            supplier: supplier.to_string(),
            barcode: String::new(),
            quantity,
            price: Decimal::new(price_cents, 2),
            min_stock_level: 2,
        };
        Product::create(
            ProductId::new(id),
            draft,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        )
    }

    #[test]
    fn seed_report() {
        let report = aggregate(&seed_products(), 5);

        assert_eq!(report.total_products, 3);
        // 25 × 899.99 + 5 × 29.99 + 15 × 199.99
        assert_eq!(report.total_value, Decimal::new(2_564_955, 2));
        assert_eq!(report.total_quantity, 45);
        assert_eq!(report.low_stock_count, 1);
        assert_eq!(report.out_of_stock_count, 0);
        assert_eq!(report.supplier_count, 3);

        let categories: Vec<(&str, i64)> = report
            .category_breakdown
            .iter()
            .map(|g| (g.category.as_str(), g.quantity))
            .collect();
        assert_eq!(
            categories,
            vec![("Electronics", 25), ("Accessories", 5), ("Furniture", 15)]
        );
        assert_eq!(report.category_breakdown[0].percentage, Decimal::new(556, 1));

        let top: Vec<u64> = report.top_value_products.iter().map(|p| p.id.get()).collect();
        assert_eq!(top, vec![1, 3, 2]);
        assert_eq!(report.top_value_products[0].total_value, Decimal::new(2_249_975, 2));
    }

    #[test]
    fn groups_accumulate_in_first_seen_order() {
        let products = vec![
            product(1, "Hardware", "Acme", 4, 100),
            product(2, "Software", "Globex", 6, 100),
            product(3, "Hardware", "Globex", 10, 100),
        ];

        let categories = category_breakdown(&products);
        assert_eq!(categories.len(), 2);
        assert_eq!((categories[0].category.as_str(), categories[0].quantity), ("Hardware", 14));
        assert_eq!(categories[0].percentage, Decimal::new(700, 1));
        assert_eq!((categories[1].category.as_str(), categories[1].quantity), ("Software", 6));

        let suppliers = supplier_breakdown(&products);
        assert_eq!((suppliers[0].supplier.as_str(), suppliers[0].products), ("Acme", 1));
        assert_eq!((suppliers[1].supplier.as_str(), suppliers[1].products), ("Globex", 2));
        assert_eq!(suppliers[1].percentage, Decimal::new(667, 1));
    }

    #[test]
    fn top_ranking_caps_at_limit_and_breaks_ties_by_collection_order() {
        let products: Vec<Product> = (1..=7).map(|id| product(id, "Hardware", "Acme", 1, 500)).collect();
        let top: Vec<u64> = top_by_value(&products, 5).iter().map(|p| p.id().get()).collect();
        assert_eq!(top, vec![1, 2, 3, 4, 5]);

        let mut mixed = products;
        mixed.push(product(8, "Hardware", "Acme", 10, 500));
        let top: Vec<u64> = top_by_value(&mixed, 3).iter().map(|p| p.id().get()).collect();
        assert_eq!(top, vec![8, 1, 2]);
    }

    #[test]
    fn empty_collection_reports_zeroes() {
        let report = aggregate(&[], 5);

        assert_eq!(report.total_products, 0);
        assert_eq!(report.total_value, Decimal::ZERO);
        assert!(report.category_breakdown.is_empty());
        assert!(report.top_value_products.is_empty());
    }

    #[test]
    fn zero_quantity_categories_get_zero_share() {
        let products = vec![product(1, "Software", "Microsoft", 0, 4999)];
        let categories = category_breakdown(&products);
        assert_eq!(categories[0].percentage, Decimal::ZERO);

        let stats = stats(&products);
        assert_eq!(stats.out_of_stock_products, 1);
        assert_eq!(stats.low_stock_products, 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: total value is the plain sum of per-product values.
            #[test]
            fn total_value_matches_manual_sum(
                rows in prop::collection::vec((0i64..1_000, 1i64..1_000_000), 0..20)
            ) {
                let products: Vec<Product> = rows
                    .iter()
                    .enumerate()
                    .map(|(i, (qty, cents))| product(i as u64 + 1, "Hardware", "Acme", *qty, *cents))
                    .collect();

                let expected = rows
                    .iter()
                    .fold(Decimal::ZERO, |acc, (qty, cents)| acc + Decimal::new(qty * cents, 2));

                prop_assert_eq!(aggregate(&products, 5).total_value, expected);
            }
        }
    }
}
