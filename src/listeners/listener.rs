//! # Listener trait.
//!
//! A [`Listener`] is the unit a slot calls when its event fires. It receives the
//! full positional argument list (registry defaults first, then the call's own
//! arguments) and either succeeds or reports a [`ListenerError`].

use std::sync::Arc;

use crate::error::ListenerError;

/// Shared handle to a listener.
///
/// Two handles are the "same listener" when they point at the same allocation;
/// see [`EventSlot::remove`](crate::EventSlot::remove).
pub type ListenerRef<A> = Arc<dyn Listener<A>>;

/// # Synchronous event callback.
///
/// Listeners are called synchronously on the dispatching thread. The trait
/// still requires `Send + Sync` so that a registry (which shares its listeners
/// through `Arc`) can be moved to or shared with other threads; a listener that
/// keeps mutable state holds it behind a `Mutex` or an atomic.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use eventslot::{Events, Listener, ListenerError, ListenerRef};
///
/// struct Audit;
///
/// impl Listener<String> for Audit {
///     fn name(&self) -> &str { "audit" }
///
///     fn call(&self, args: &[String]) -> Result<(), ListenerError> {
///         if args.is_empty() {
///             return Err(ListenerError::fail(self.name(), "nothing to audit"));
///         }
///         Ok(())
///     }
/// }
///
/// let mut events = Events::new();
/// let audit: ListenerRef<String> = Arc::new(Audit);
/// events.get("on_save")?.add(audit);
/// events.emit("on_save", &["report.txt".to_string()])?;
/// # Ok::<(), eventslot::EventError>(())
/// ```
pub trait Listener<A>: Send + Sync + 'static {
    /// Returns a human-readable listener name used in logs and errors.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Handles one dispatch with the complete argument list.
    fn call(&self, args: &[A]) -> Result<(), ListenerError>;
}
