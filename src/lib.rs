//! # eventslot
//!
//! **eventslot** is a small library for C#-style events in Rust.
//!
//! An [`Events`] registry hands out named [`EventSlot`]s on demand: the first
//! lookup of a name declares it. Listeners are added to and removed from a slot,
//! and invoking the slot calls every listener, in order, synchronously.
//!
//! ## Architecture
//! ### Overview
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Events<A, S>  (registry)                                         │
//! │  - allow-list (instance) or EventSchema S (type)                  │
//! │  - default args   Arc<[A]>          ─┐ shared with every slot     │
//! │  - call wrapper   Arc<dyn CallWrapper>┘                           │
//! │  - slots in first-lookup order                                    │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        ▼                  ▼                  ▼
//!  ┌────────────┐     ┌────────────┐     ┌────────────┐
//!  │ EventSlot  │     │ EventSlot  │     │ EventSlot  │
//!  │ "on_save"  │     │ "on_change"│     │ "on_edit"  │
//!  └─────┬──────┘     └────────────┘     └────────────┘
//!        │ invoke(args)
//!        ├──► wrapper(listener #1, defaults ++ args)
//!        ├──► wrapper(listener #2, defaults ++ args)
//!        └──► ...   (first Err stops the dispatch and is returned)
//! ```
//!
//! ### Name lookup
//! ```text
//! Events::get(name)
//!   ├─► empty or "__"-prefixed ─► EventError::Reserved
//!   ├─► instance allow-list    ─► EventError::NotDeclared if absent
//!   ├─► else EventSchema::EVENTS ─► EventError::NotDeclared if absent
//!   └─► existing slot, or a new one (declared from now on)
//! ```
//!
//! ## Features
//! | Area              | Description                                                     | Key types / traits                          |
//! |-------------------|-----------------------------------------------------------------|---------------------------------------------|
//! | **Registry**      | Lazily declared, optionally name-gated event slots.             | [`Events`], [`EventsBuilder`]               |
//! | **Slots**         | Ordered listener lists with add/remove/invoke.                  | [`EventSlot`]                               |
//! | **Listeners**     | Callbacks as trait objects or named closures.                   | [`Listener`], [`ListenerFn`], [`ListenerRef`] |
//! | **Wrappers**      | Interpose on every listener call.                               | [`CallWrapper`], [`Direct`]                 |
//! | **Schemas**       | Type-level allow-lists of event names.                          | [`EventSchema`], [`Open`]                   |
//! | **Errors**        | Typed errors for lookups and listener failures.                 | [`EventError`], [`ListenerError`]           |
//! | **Configuration** | Registry settings in one place.                                 | [`EventsConfig`]                            |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogWrapper` _(demo/reference only)_.
//!
//! ## Threading
//! Dispatch is plain synchronous code with no locking. Registries and slots are
//! mutated through `&mut`; wrap a registry in a `Mutex` to share it across threads.
//! Listeners and call wrappers must be `Send + Sync` for the same reason, so
//! listener state lives behind a `Mutex` or an atomic.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use eventslot::{Events, ListenerError, ListenerFn, ListenerRef};
//!
//! let saved = Arc::new(Mutex::new(Vec::new()));
//! let log = Arc::clone(&saved);
//!
//! let on_save: ListenerRef<String> = ListenerFn::arc("remember", move |args: &[String]| {
//!     log.lock().unwrap().extend_from_slice(args);
//!     Ok::<_, ListenerError>(())
//! });
//!
//! // Only `on_save` and `on_close` may be used; every call gets "doc-1" first.
//! let mut events = Events::builder()
//!     .with_allowed(["on_save", "on_close"])
//!     .with_default_args(["doc-1".to_string()])
//!     .build()?;
//!
//! *events.get("on_save")? += on_save.clone();
//! events.emit("on_save", &["v2".to_string()])?;
//! assert_eq!(*saved.lock().unwrap(), ["doc-1", "v2"]);
//!
//! assert!(events.get("on_svae").is_err());
//!
//! *events.get("on_save")? -= &on_save;
//! assert!(events["on_save"].is_empty());
//! # Ok::<(), eventslot::EventError>(())
//! ```
mod core;
mod error;
mod events;
mod listeners;
mod wrappers;

// ---- Public re-exports ----

pub use crate::core::{Events, EventsBuilder, EventsConfig, RESERVED_PREFIX, Slots};
pub use error::{EventError, ListenerError};
pub use events::{EventSchema, EventSlot, Listeners, Open};
pub use listeners::{Listener, ListenerFn, ListenerRef};
pub use wrappers::{CallWrapper, Direct, WrapperRef};

// Optional: expose a simple built-in logging wrapper (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use wrappers::LogWrapper;
