//! Session lifecycle events.
//!
//! Events are a diagnostic side channel next to the view-facing state: they
//! report store failures and progress that the snapshot deliberately does not
//! carry.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::SessionEvent;
