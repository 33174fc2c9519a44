use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;
use stockroom_events::Event;
use stockroom_products::Product;

/// Event: ProductCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreated {
    pub product: Product,
    pub occurred_on: NaiveDate,
}

/// Event: ProductUpdated. Carries the record as it is after the edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdated {
    pub product: Product,
    pub occurred_on: NaiveDate,
}

/// Event: StockAdjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjusted {
    pub product_id: ProductId,
    pub previous_quantity: i64,
    pub quantity: i64,
    pub occurred_on: NaiveDate,
}

/// Event: ProductDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDeleted {
    pub product_id: ProductId,
    pub sku: String,
    pub occurred_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InventoryEvent {
    ProductCreated(ProductCreated),
    ProductUpdated(ProductUpdated),
    StockAdjusted(StockAdjusted),
    ProductDeleted(ProductDeleted),
}

impl InventoryEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            InventoryEvent::ProductCreated(e) => e.product.id(),
            InventoryEvent::ProductUpdated(e) => e.product.id(),
            InventoryEvent::StockAdjusted(e) => e.product_id,
            InventoryEvent::ProductDeleted(e) => e.product_id,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductCreated(_) => "inventory.product.created",
            InventoryEvent::ProductUpdated(_) => "inventory.product.updated",
            InventoryEvent::StockAdjusted(_) => "inventory.product.stock_adjusted",
            InventoryEvent::ProductDeleted(_) => "inventory.product.deleted",
        }
    }

    fn occurred_on(&self) -> NaiveDate {
        match self {
            InventoryEvent::ProductCreated(e) => e.occurred_on,
            InventoryEvent::ProductUpdated(e) => e.occurred_on,
            InventoryEvent::StockAdjusted(e) => e.occurred_on,
            InventoryEvent::ProductDeleted(e) => e.occurred_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag_and_camel_case_payload() {
        let event = InventoryEvent::StockAdjusted(StockAdjusted {
            product_id: ProductId::new(2),
            previous_quantity: 5,
            quantity: 30,
            occurred_on: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "StockAdjusted");
        assert_eq!(json["data"]["productId"], 2);
        assert_eq!(json["data"]["previousQuantity"], 5);
        assert_eq!(json["data"]["occurredOn"], "2025-02-01");

        let back: InventoryEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back.product_id(), ProductId::new(2));
        assert_eq!(back.event_type(), "inventory.product.stock_adjusted");
    }
}
