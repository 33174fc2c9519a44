//! Draft validation for the create and edit flows.

use rust_decimal::Decimal;

use stockroom_core::{FieldErrors, ProductId};

use crate::config::CatalogConfig;
use crate::product::{Product, ProductDraft};

/// Largest accepted quantity and minimum stock level.
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// Largest accepted unit price.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Keys used in [`FieldErrors`] for product drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Sku,
    Category,
    Supplier,
    Quantity,
    Price,
    MinStockLevel,
}

impl ProductField {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Sku => "sku",
            ProductField::Category => "category",
            ProductField::Supplier => "supplier",
            ProductField::Quantity => "quantity",
            ProductField::Price => "price",
            ProductField::MinStockLevel => "minStockLevel",
        }
    }
}

impl core::fmt::Display for ProductField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate `draft` against the catalog and the current collection.
///
/// `editing` names the record being edited; its own sku does not count as a
/// duplicate. The barcode is not checked.
pub fn validate_draft<'a>(
    draft: &ProductDraft,
    config: &CatalogConfig,
    existing: impl IntoIterator<Item = &'a Product>,
    editing: Option<ProductId>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut reject = |field: ProductField, message: String| errors.insert(field.as_str(), message);

    if draft.name.trim().is_empty() {
        reject(ProductField::Name, "Product name is required".to_string());
    }

    if draft.sku.trim().is_empty() {
        reject(ProductField::Sku, "SKU is required".to_string());
    } else if existing
        .into_iter()
        .any(|p| p.sku() == draft.sku && Some(p.id()) != editing)
    {
        reject(ProductField::Sku, "SKU already exists".to_string());
    }

    if draft.category.trim().is_empty() {
        reject(ProductField::Category, "Category is required".to_string());
    } else if !config.is_known_category(&draft.category) {
        reject(
            ProductField::Category,
            format!("Unknown category; expected one of: {}", config.categories.join(", ")),
        );
    }

    if draft.supplier.trim().is_empty() {
        reject(ProductField::Supplier, "Supplier is required".to_string());
    }

    if let Some(message) = quantity_error(draft.quantity) {
        reject(ProductField::Quantity, message);
    }

    if draft.price <= Decimal::ZERO {
        reject(ProductField::Price, "Price must be greater than 0".to_string());
    } else if draft.price > MAX_PRICE {
        reject(ProductField::Price, format!("Price must not exceed {MAX_PRICE}"));
    }

    if draft.min_stock_level < 0 {
        reject(
            ProductField::MinStockLevel,
            "Min stock level must be non-negative".to_string(),
        );
    } else if draft.min_stock_level > MAX_QUANTITY {
        reject(
            ProductField::MinStockLevel,
            format!("Min stock level must not exceed {MAX_QUANTITY}"),
        );
    }

    errors
}

/// Range check shared by the forms and direct stock adjustments.
pub fn quantity_error(quantity: i64) -> Option<String> {
    if quantity < 0 {
        Some("Quantity must be non-negative".to_string())
    } else if quantity > MAX_QUANTITY {
        Some(format!("Quantity must not exceed {MAX_QUANTITY}"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Mechanical Keyboard".to_string(),
            sku: "KB-MEC-004".to_string(),
            category: "Accessories".to_string(),
            supplier: "Logitech".to_string(),
            barcode: String::new(),
            quantity: 40,
            price: Decimal::new(7999, 2),
            min_stock_level: 10,
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        let seed = seed_products();
        let errors = validate_draft(&valid_draft(), &CatalogConfig::default(), &seed, None);
        assert!(errors.is_empty(), "unexpected errors: {errors}");
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = validate_draft(&ProductDraft::default(), &CatalogConfig::default(), [], None);

        assert_eq!(errors.get("name"), Some("Product name is required"));
        assert_eq!(errors.get("sku"), Some("SKU is required"));
        assert_eq!(errors.get("category"), Some("Category is required"));
        assert_eq!(errors.get("supplier"), Some("Supplier is required"));
        assert_eq!(errors.get("price"), Some("Price must be greater than 0"));
        assert!(!errors.contains("quantity"));
        assert!(!errors.contains("minStockLevel"));
    }

    #[test]
    fn whitespace_only_name_is_blank() {
        let mut draft = valid_draft();
        draft.name = "  \t ".to_string();

        let errors = validate_draft(&draft, &CatalogConfig::default(), [], None);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn duplicate_sku_is_rejected_on_create() {
        let seed = seed_products();
        let mut draft = valid_draft();
        draft.sku = "HP-EB-001".to_string();

        let errors = validate_draft(&draft, &CatalogConfig::default(), &seed, None);
        assert_eq!(errors.get("sku"), Some("SKU already exists"));
    }

    #[test]
    fn own_sku_is_not_a_duplicate_when_editing() {
        let seed = seed_products();
        let laptop = &seed[0];
        let draft = ProductDraft::from(laptop);

        let errors = validate_draft(&draft, &CatalogConfig::default(), &seed, Some(laptop.id()));
        assert!(errors.is_empty());

        // ...but another record's sku still is.
        let mut stolen = draft;
        stolen.sku = seed[1].sku().to_string();
        let errors = validate_draft(&stolen, &CatalogConfig::default(), &seed, Some(laptop.id()));
        assert_eq!(errors.get("sku"), Some("SKU already exists"));
    }

    #[test]
    fn category_must_come_from_catalog() {
        let mut draft = valid_draft();
        draft.category = "Groceries".to_string();

        let errors = validate_draft(&draft, &CatalogConfig::default(), [], None);
        assert!(errors.get("category").unwrap().starts_with("Unknown category"));

        let config = CatalogConfig {
            categories: vec!["Groceries".to_string()],
            ..CatalogConfig::default()
        };
        assert!(validate_draft(&draft, &config, [], None).is_empty());
    }

    #[test]
    fn unlisted_supplier_is_accepted() {
        let mut draft = valid_draft();
        draft.supplier = "Acme Wholesale".to_string();

        assert!(validate_draft(&draft, &CatalogConfig::default(), [], None).is_empty());
    }

    #[test]
    fn numeric_bounds() {
        let mut draft = valid_draft();
        draft.quantity = -1;
        draft.price = Decimal::ZERO;
        draft.min_stock_level = -5;

        let errors = validate_draft(&draft, &CatalogConfig::default(), [], None);
        assert_eq!(errors.get("quantity"), Some("Quantity must be non-negative"));
        assert_eq!(errors.get("price"), Some("Price must be greater than 0"));
        assert_eq!(errors.get("minStockLevel"), Some("Min stock level must be non-negative"));

        draft.quantity = 0;
        draft.price = Decimal::new(1, 2);
        draft.min_stock_level = 0;
        assert!(validate_draft(&draft, &CatalogConfig::default(), [], None).is_empty());
    }

    #[test]
    fn upper_bounds_are_enforced() {
        let mut draft = valid_draft();
        draft.quantity = MAX_QUANTITY;
        draft.price = MAX_PRICE;
        draft.min_stock_level = MAX_QUANTITY;
        assert!(validate_draft(&draft, &CatalogConfig::default(), [], None).is_empty());

        draft.quantity = i64::MAX;
        draft.price = Decimal::new(100_000_000_000, 0);
        draft.min_stock_level = MAX_QUANTITY + 1;

        let errors = validate_draft(&draft, &CatalogConfig::default(), [], None);
        assert_eq!(errors.get("quantity"), Some("Quantity must not exceed 1000000000"));
        assert_eq!(errors.get("price"), Some("Price must not exceed 1000000000"));
        assert_eq!(
            errors.get("minStockLevel"),
            Some("Min stock level must not exceed 1000000000")
        );
    }

    #[test]
    fn quantity_error_boundaries() {
        assert_eq!(quantity_error(0), None);
        assert_eq!(quantity_error(MAX_QUANTITY), None);
        assert!(quantity_error(-1).is_some());
        assert!(quantity_error(MAX_QUANTITY + 1).is_some());
    }

    #[test]
    fn barcode_is_unconstrained() {
        let seed = seed_products();
        let mut draft = valid_draft();
        // Same barcode as the seeded laptop.
        draft.barcode = "1234567890123".to_string();

        assert!(validate_draft(&draft, &CatalogConfig::default(), &seed, None).is_empty());
    }
}
