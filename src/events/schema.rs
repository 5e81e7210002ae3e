//! # Type-level event declarations.
//!
//! An [`EventSchema`] lets a type fix the set of event names that every registry
//! of that type accepts:
//!
//! ```rust
//! use eventslot::{EventError, EventSchema, Events};
//!
//! struct Document;
//!
//! impl EventSchema for Document {
//!     const EVENTS: Option<&'static [&'static str]> = Some(&["on_change", "on_save"]);
//! }
//!
//! let mut events: Events<u32, Document> = Events::declared();
//! assert!(events.get("on_save").is_ok());
//! assert_eq!(
//!     events.get("on_delete").unwrap_err(),
//!     EventError::NotDeclared { name: "on_delete".into() }
//! );
//! ```
//!
//! An allow-list given to the registry builder replaces the schema's list for that
//! registry; the two are never intersected.

use crate::core::is_event_name;

/// Type-level allow-list of event names.
pub trait EventSchema {
    /// Names accepted by registries of this type; `None` accepts any name.
    const EVENTS: Option<&'static [&'static str]> = None;

    /// Returns `true` when the schema admits `name`.
    ///
    /// Entries of `EVENTS` follow the same rule as instance allow-lists:
    /// non-empty and without the reserved `__` prefix (checked in debug builds).
    fn admits(name: &str) -> bool {
        match Self::EVENTS {
            Some(names) => {
                debug_assert!(
                    names.iter().all(|n| is_event_name(n)),
                    "EventSchema::EVENTS contains an empty or reserved name: {names:?}"
                );
                names.iter().any(|n| *n == name)
            }
            None => true,
        }
    }
}

/// Schema without a declared list: any non-reserved name becomes an event.
#[derive(Clone, Copy, Debug, Default)]
pub struct Open;

impl EventSchema for Open {}
