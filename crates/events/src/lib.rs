//! In-process change notifications.
//!
//! Mutations on the inventory store are announced here so presentation
//! surfaces can refresh their derived views.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
