//! Command-line shell over a seeded inventory store.
//!
//! Each invocation runs one read query and renders the result as JSON.

use anyhow::{Context, bail};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Value, json};

use stockroom_core::{DomainError, ProductId};
use stockroom_inventory::{InventoryStore, SortDirection, SortField};
use stockroom_products::{Product, StockStatus};

/// A product as the list view shows it, with its stock badge.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRow<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub stock_status: StockStatus,
    pub status_label: &'static str,
}

impl<'a> From<&'a Product> for ProductRow<'a> {
    fn from(product: &'a Product) -> Self {
        let stock_status = product.stock_status();
        Self {
            product,
            stock_status,
            status_label: stock_status.label(),
        }
    }
}

fn rows<'a>(products: impl IntoIterator<Item = &'a Product>) -> anyhow::Result<Value> {
    let rows: Vec<ProductRow<'a>> = products.into_iter().map(ProductRow::from).collect();
    Ok(serde_json::to_value(rows)?)
}

fn row(product: &Product) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(ProductRow::from(product))?)
}

pub const USAGE: &str = "\
usage: stockroom <command>

commands:
  list                      all products in insertion order
  get <id>                  one product by id
  search <term>             case-insensitive match on name, sku and category
  sort <field> [asc|desc]   products ordered by a field
  low-stock                 products at or below their minimum level
  out-of-stock              products with nothing on hand
  category <name>           products in one category
  supplier <name>           products from one supplier
  sku <sku>                 one product by sku
  price-range <min> <max>   products priced within [min, max]
  lookup <barcode>          one product by barcode
  report                    full analytics report
  stats                     dashboard counters

environment:
  STOCKROOM_CATALOG         JSON catalog file (categories, suppliers, topProductsLimit)
  RUST_LOG                  log filter, default `info`";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Get(ProductId),
    Search(String),
    Sort {
        field: SortField,
        direction: SortDirection,
    },
    LowStock,
    OutOfStock,
    Category(String),
    Supplier(String),
    Sku(String),
    PriceRange {
        min: Decimal,
        max: Decimal,
    },
    Lookup(String),
    Report,
    Stats,
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };

        let command = match name.as_str() {
            "help" | "--help" | "-h" => Command::Help,
            "list" => Command::List,
            "get" => {
                let raw = single(name, rest)?;
                let id = raw
                    .parse::<ProductId>()
                    .with_context(|| format!("invalid product id `{raw}`"))?;
                Command::Get(id)
            }
            // Search terms may contain spaces; the shell splits them apart.
            "search" => Command::Search(rest.join(" ")),
            "sort" => {
                let (field, direction) = match rest {
                    [field] => (field, None),
                    [field, direction] => (field, Some(direction)),
                    _ => bail!("`sort` expects <field> [asc|desc]"),
                };
                Command::Sort {
                    field: field.parse::<SortField>()?,
                    direction: direction
                        .map(|d| d.parse::<SortDirection>())
                        .transpose()?
                        .unwrap_or_default(),
                }
            }
            "low-stock" => Command::LowStock,
            "out-of-stock" => Command::OutOfStock,
            "category" => Command::Category(rest.join(" ")),
            "supplier" => Command::Supplier(rest.join(" ")),
            "sku" => Command::Sku(single(name, rest)?.to_string()),
            "price-range" => {
                let [min, max] = rest else {
                    bail!("`price-range` expects <min> <max>");
                };
                Command::PriceRange {
                    min: parse_price(min)?,
                    max: parse_price(max)?,
                }
            }
            "lookup" => Command::Lookup(rest.join(" ")),
            "report" => Command::Report,
            "stats" => Command::Stats,
            other => bail!("unknown command `{other}` (try `stockroom help`)"),
        };

        if matches!(
            command,
            Command::Help
                | Command::List
                | Command::LowStock
                | Command::OutOfStock
                | Command::Report
                | Command::Stats
        ) && !rest.is_empty()
        {
            bail!("`{name}` takes no arguments");
        }

        Ok(command)
    }

    /// Run the query against `store`. `Help` renders as an empty object.
    pub fn execute(&self, store: &InventoryStore) -> anyhow::Result<Value> {
        let value = match self {
            Command::Help => json!({}),
            Command::List => rows(store.list())?,
            Command::Get(id) => {
                let product = store
                    .get(*id)
                    .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
                row(product)?
            }
            Command::Search(term) => rows(store.search(term))?,
            Command::Sort { field, direction } => rows(store.sort(*field, *direction))?,
            Command::LowStock => rows(store.low_stock())?,
            Command::OutOfStock => rows(store.out_of_stock())?,
            Command::Category(category) => rows(store.by_category(category))?,
            Command::Supplier(supplier) => rows(store.by_supplier(supplier))?,
            Command::Sku(sku) => {
                let product = store
                    .by_sku(sku)
                    .ok_or_else(|| DomainError::not_found(format!("no product with sku {sku}")))?;
                row(product)?
            }
            Command::PriceRange { min, max } => rows(store.price_range(*min, *max))?,
            Command::Lookup(code) => {
                let product = store.lookup_by_barcode(code).context("barcode lookup failed")?;
                row(product)?
            }
            Command::Report => serde_json::to_value(store.aggregates())?,
            Command::Stats => serde_json::to_value(store.stats())?,
        };
        Ok(value)
    }
}

fn single<'a>(command: &str, rest: &'a [String]) -> anyhow::Result<&'a str> {
    match rest {
        [value] => Ok(value.as_str()),
        _ => bail!("`{command}` expects exactly one argument"),
    }
}

fn parse_price(raw: &str) -> anyhow::Result<Decimal> {
    raw.trim()
        .parse()
        .with_context(|| format!("invalid price `{raw}`"))
}
