//! # Registry configuration.
//!
//! Provides [`EventsConfig`], the settings a registry is built from.
//!
//! Config is used in two ways:
//! 1. **Builder**: `Events::builder().with_*(..).build()` fills one in for you.
//! 2. **Direct**: `Events::with_config(cfg)` for callers that assemble it themselves.
//!
//! ## Defaults
//! - `allowed = None` → fall back to the registry's [`EventSchema`](crate::EventSchema)
//! - `default_args = []` → listeners receive exactly the dispatch arguments
//! - `wrapper = None` → [`Direct`](crate::Direct)

use std::fmt;

use crate::core::registry::{RESERVED_PREFIX, is_event_name};
use crate::error::EventError;
use crate::wrappers::WrapperRef;

/// Settings for an [`Events`](crate::Events) registry.
///
/// ## Field semantics
/// - `allowed`: instance allow-list; when `Some`, it replaces the schema's list
/// - `default_args`: values prepended to every dispatch of every slot
/// - `wrapper`: interposed on every listener call of every slot
pub struct EventsConfig<A> {
    /// Instance-level allow-list of event names.
    ///
    /// - `None` = defer to the type-level schema
    /// - `Some(names)` = only `names` are accepted, whatever the schema says
    pub allowed: Option<Vec<String>>,

    /// Leading arguments for every dispatch.
    pub default_args: Vec<A>,

    /// Call wrapper shared by all slots.
    pub wrapper: Option<WrapperRef<A>>,
}

impl<A> EventsConfig<A> {
    /// Checks the allow-list entries.
    ///
    /// Every entry must pass the same rule as a lookup: non-empty and without
    /// the reserved `__` prefix, since such a name could never be looked up.
    pub fn validate(&self) -> Result<(), EventError> {
        let Some(names) = &self.allowed else {
            return Ok(());
        };
        match names.iter().find(|n| !is_event_name(n)) {
            None => Ok(()),
            Some(name) if name.is_empty() => Err(EventError::Config {
                reason: "allow-list contains an empty event name".to_string(),
            }),
            Some(name) => Err(EventError::Config {
                reason: format!(
                    "allow-list entry '{name}' uses the reserved prefix '{RESERVED_PREFIX}'"
                ),
            }),
        }
    }
}

impl<A> Default for EventsConfig<A> {
    /// Default configuration:
    ///
    /// - `allowed = None` (schema decides)
    /// - `default_args = []`
    /// - `wrapper = None` (direct calls)
    fn default() -> Self {
        Self {
            allowed: None,
            default_args: Vec::new(),
            wrapper: None,
        }
    }
}

impl<A> fmt::Debug for EventsConfig<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventsConfig")
            .field("allowed", &self.allowed)
            .field("default_args", &self.default_args.len())
            .field("wrapper", &self.wrapper.is_some())
            .finish()
    }
}
