//! The in-memory product collection.

use std::sync::Arc;

use rust_decimal::Decimal;

use stockroom_core::{
    Clock, DomainError, DomainResult, ProductId, find_by_id, position_by_id,
};
use stockroom_events::{Event, EventBus, InMemoryEventBus};
use stockroom_products::{
    CatalogConfig, Product, ProductDraft, ProductField, quantity_error, seed_products,
    validate_draft,
};

use crate::analytics::{self, AggregateReport, InventoryStats};
use crate::event::{InventoryEvent, ProductCreated, ProductDeleted, ProductUpdated, StockAdjusted};
use crate::views::{self, SortDirection, SortField};

/// Owns the product collection in insertion order.
///
/// Single writer: every mutation goes through `&mut self` and runs to
/// completion. A failed mutation leaves the collection exactly as it was.
pub struct InventoryStore {
    products: Vec<Product>,
    config: CatalogConfig,
    clock: Box<dyn Clock>,
    events: Option<Arc<InMemoryEventBus<InventoryEvent>>>,
}

impl core::fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryStore")
            .field("products", &self.products.len())
            .field("config", &self.config)
            .field("events", &self.events.is_some())
            .finish()
    }
}

impl InventoryStore {
    /// Empty store.
    pub fn new(config: CatalogConfig, clock: impl Clock + 'static) -> Self {
        Self::with_products(config, clock, Vec::new())
    }

    /// Store holding the demonstration records.
    pub fn seeded(config: CatalogConfig, clock: impl Clock + 'static) -> Self {
        Self::with_products(config, clock, seed_products())
    }

    /// Store over an existing collection (taken as-is, no validation).
    pub fn with_products(
        config: CatalogConfig,
        clock: impl Clock + 'static,
        products: Vec<Product>,
    ) -> Self {
        Self {
            products,
            config,
            clock: Box::new(clock),
            events: None,
        }
    }

    /// Announce every successful mutation on `bus`.
    pub fn with_event_bus(mut self, bus: Arc<InMemoryEventBus<InventoryEvent>>) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// All products in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        find_by_id(&self.products, id)
    }

    pub fn find(&self, predicate: impl Fn(&Product) -> bool) -> Option<&Product> {
        self.products.iter().find(|p| predicate(p))
    }

    pub fn filter(&self, predicate: impl Fn(&Product) -> bool) -> Vec<&Product> {
        self.products.iter().filter(|p| predicate(p)).collect()
    }

    /// `max(existing ids) + 1`, starting at 1 for an empty collection.
    pub fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(Product::id)
            .max()
            .unwrap_or(ProductId::new(0))
            .next()
    }

    pub fn create(&mut self, draft: ProductDraft) -> DomainResult<Product> {
        validate_draft(&draft, &self.config, &self.products, None)
            .into_result()
            .inspect_err(|err| tracing::debug!(sku = %draft.sku, %err, "rejected product draft"))?;

        let today = self.clock.today();
        let product = Product::create(self.next_id(), draft, today);
        tracing::info!(id = %product.id(), sku = %product.sku(), "product created");

        self.products.push(product.clone());
        self.publish(InventoryEvent::ProductCreated(ProductCreated {
            product: product.clone(),
            occurred_on: today,
        }));
        Ok(product)
    }

    /// Replace the editable fields of record `id`.
    pub fn update(&mut self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        let index = self.position(id)?;

        validate_draft(&draft, &self.config, &self.products, Some(id))
            .into_result()
            .inspect_err(|err| tracing::debug!(%id, %err, "rejected product edit"))?;

        let today = self.clock.today();
        let product = &mut self.products[index];
        product.revise(draft, today);
        let product = product.clone();
        tracing::info!(%id, sku = %product.sku(), "product updated");

        self.publish(InventoryEvent::ProductUpdated(ProductUpdated {
            product: product.clone(),
            occurred_on: today,
        }));
        Ok(product)
    }

    /// Set the on-hand quantity of record `id`.
    pub fn adjust_stock(&mut self, id: ProductId, quantity: i64) -> DomainResult<Product> {
        let index = self.position(id)?;
        if let Some(message) = quantity_error(quantity) {
            return Err(DomainError::validation(ProductField::Quantity.as_str(), message));
        }

        let today = self.clock.today();
        let product = &mut self.products[index];
        let previous_quantity = product.quantity();
        product.restock(quantity, today);
        let product = product.clone();
        tracing::info!(%id, previous_quantity, quantity, "stock adjusted");

        self.publish(InventoryEvent::StockAdjusted(StockAdjusted {
            product_id: id,
            previous_quantity,
            quantity,
            occurred_on: today,
        }));
        Ok(product)
    }

    /// Remove record `id`. Absent ids are a no-op.
    pub fn delete(&mut self, id: ProductId) -> Option<Product> {
        let index = position_by_id(&self.products, id)?;
        let removed = self.products.remove(index);
        tracing::info!(%id, sku = %removed.sku(), "product deleted");

        self.publish(InventoryEvent::ProductDeleted(ProductDeleted {
            product_id: id,
            sku: removed.sku().to_string(),
            occurred_on: self.clock.today(),
        }));
        Some(removed)
    }

    /// Remove record `id` only if `confirm` approves it.
    ///
    /// `confirm` sees the record about to be removed and is not called at all
    /// when `id` is absent.
    pub fn delete_confirmed(
        &mut self,
        id: ProductId,
        confirm: impl FnOnce(&Product) -> bool,
    ) -> Option<Product> {
        let approved = confirm(self.get(id)?);
        if !approved {
            tracing::debug!(%id, "deletion declined");
            return None;
        }
        self.delete(id)
    }

    pub fn search(&self, term: &str) -> Vec<&Product> {
        views::text_search(&self.products, term)
    }

    pub fn sort(&self, field: SortField, direction: SortDirection) -> Vec<&Product> {
        views::sort_by(&self.products, field, direction)
    }

    /// What the product list shows: search results in the chosen order.
    pub fn search_sorted(
        &self,
        term: &str,
        field: SortField,
        direction: SortDirection,
    ) -> Vec<&Product> {
        views::sort_by(self.search(term), field, direction)
    }

    pub fn low_stock(&self) -> Vec<&Product> {
        views::low_stock(&self.products)
    }

    pub fn out_of_stock(&self) -> Vec<&Product> {
        views::out_of_stock(&self.products)
    }

    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        views::by_category(&self.products, category)
    }

    pub fn by_supplier(&self, supplier: &str) -> Vec<&Product> {
        views::by_supplier(&self.products, supplier)
    }

    pub fn by_sku(&self, sku: &str) -> Option<&Product> {
        views::find_by_sku(&self.products, sku)
    }

    pub fn price_range(&self, min: Decimal, max: Decimal) -> Vec<&Product> {
        views::price_range(&self.products, min, max)
    }

    pub fn lookup_by_barcode(&self, code: &str) -> DomainResult<&Product> {
        let result = views::barcode_lookup(&self.products, code);
        if let Err(err) = &result {
            tracing::debug!(code = %code.trim(), %err, "barcode lookup missed");
        }
        result
    }

    pub fn aggregates(&self) -> AggregateReport {
        analytics::aggregate(&self.products, self.config.top_products_limit)
    }

    pub fn stats(&self) -> InventoryStats {
        analytics::stats(&self.products)
    }

    fn position(&self, id: ProductId) -> DomainResult<usize> {
        position_by_id(&self.products, id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    fn publish(&self, event: InventoryEvent) {
        let Some(bus) = &self.events else {
            return;
        };
        let event_type = event.event_type();
        if let Err(err) = bus.publish(event) {
            tracing::warn!(event_type, ?err, "failed to publish inventory event");
        }
    }
}
