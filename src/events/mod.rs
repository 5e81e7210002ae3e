//! Event slots and type-level event schemas.
//!
//! ## Contents
//! - [`EventSlot`] ordered listener list bound to one event name
//! - [`EventSchema`], [`Open`] type-level allow-lists for [`Events`](crate::Events)
//!
//! Slots are only ever created by a registry; see `core/registry.rs` for the
//! lookup rules.

mod schema;
mod slot;

pub use schema::{EventSchema, Open};
pub use slot::{EventSlot, Listeners};
