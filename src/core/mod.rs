//! Registry core: the [`Events`] container, its configuration and builder.
//!
//! ```text
//! EventsBuilder ──build()──► EventsConfig::validate() ──► Events
//!                                                          │
//!            get(name) ── reserved? ── allowed? ── lazy insert ──► &mut EventSlot
//! ```

mod builder;
mod config;
mod registry;

pub use builder::EventsBuilder;
pub use config::EventsConfig;
pub use registry::{Events, RESERVED_PREFIX, Slots};
pub(crate) use registry::is_event_name;
