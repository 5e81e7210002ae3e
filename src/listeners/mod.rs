//! # Listener abstractions.
//!
//! This module provides the callback side of an event:
//! - [`Listener`] - trait for anything that can receive a dispatched event
//! - [`ListenerFn`] - closure-backed listener with a stable name
//! - [`ListenerRef`] - shared handle to a listener (`Arc<dyn Listener<A>>`)
//!
//! Slots store [`ListenerRef`]s and compare them by identity, so keep the handle
//! you registered if you intend to remove it later.

mod listener;
mod listener_fn;

pub use listener::{Listener, ListenerRef};
pub use listener_fn::ListenerFn;
