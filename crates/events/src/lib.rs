//! Domain events and the notification bus they are handed to.
//!
//! Emission is fire-and-forget: publishers log a failed `publish` and move on.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
