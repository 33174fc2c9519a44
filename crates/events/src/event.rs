use chrono::NaiveDate;

/// A change notification emitted after a store mutation.
///
/// Events are immutable facts; consumers (list views, analytics panels) use
/// them to know when to re-derive their views.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name (e.g. "inventory.product.created").
    fn event_type(&self) -> &'static str;

    /// Calendar date the change was recorded on.
    fn occurred_on(&self) -> NaiveDate;
}
