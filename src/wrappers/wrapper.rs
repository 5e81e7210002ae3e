//! # Call wrapper trait.
//!
//! Provides [`CallWrapper`], the extension point for interposing on every
//! listener call (logging, error translation, argument checks).
//!
//! ## Rules
//! - The wrapper decides whether and how to call the listener.
//! - Whatever the wrapper returns is what the dispatch loop sees: an `Err` stops
//!   the remaining listeners of that dispatch.
//! - Wrappers see the full argument list, registry defaults included.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use eventslot::{Events, Listener, ListenerError, ListenerFn};
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let seen = Arc::clone(&calls);
//!
//! let mut events = Events::builder()
//!     .with_wrapper(move |l: &dyn Listener<i32>, args: &[i32]| {
//!         seen.fetch_add(1, Ordering::SeqCst);
//!         l.call(args)
//!     })
//!     .build()?;
//!
//! events.get("on_tick")?.add(ListenerFn::arc("noop", |_: &[i32]| Ok::<_, ListenerError>(())));
//! events.emit("on_tick", &[1])?;
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! # Ok::<(), eventslot::EventError>(())
//! ```

use std::sync::Arc;

use crate::error::ListenerError;
use crate::listeners::Listener;

/// Shared handle to a call wrapper.
pub type WrapperRef<A> = Arc<dyn CallWrapper<A>>;

/// Interposes on each listener call made by a slot.
pub trait CallWrapper<A>: Send + Sync + 'static {
    /// Calls (or declines to call) `listener` with `args`.
    fn call(&self, listener: &dyn Listener<A>, args: &[A]) -> Result<(), ListenerError>;
}

/// Default wrapper: calls the listener directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Direct;

impl<A: 'static> CallWrapper<A> for Direct {
    #[inline]
    fn call(&self, listener: &dyn Listener<A>, args: &[A]) -> Result<(), ListenerError> {
        listener.call(args)
    }
}

impl<A, F> CallWrapper<A> for F
where
    F: Fn(&dyn Listener<A>, &[A]) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    fn call(&self, listener: &dyn Listener<A>, args: &[A]) -> Result<(), ListenerError> {
        self(listener, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ListenerFn, ListenerRef};

    #[test]
    fn test_direct_forwards_result() {
        let ok: ListenerRef<i32> = ListenerFn::arc("ok", |_: &[i32]| Ok::<_, ListenerError>(()));
        let bad: ListenerRef<i32> =
            ListenerFn::arc("bad", |_: &[i32]| Err::<(), _>(ListenerError::fail("bad", "nope")));

        assert!(Direct.call(&*ok, &[1]).is_ok());
        assert_eq!(
            Direct.call(&*bad, &[1]),
            Err(ListenerError::fail("bad", "nope"))
        );
    }

    #[test]
    fn test_closure_wrapper_can_translate_errors() {
        let bad: ListenerRef<i32> =
            ListenerFn::arc("bad", |_: &[i32]| Err::<(), _>(ListenerError::fail("bad", "nope")));
        let wrapper: WrapperRef<i32> = Arc::new(|l: &dyn Listener<i32>, args: &[i32]| {
            l.call(args).map_err(|e| ListenerError::Wrapper {
                error: e.as_message(),
            })
        });

        assert_eq!(
            wrapper.call(&*bad, &[]),
            Err(ListenerError::Wrapper {
                error: "bad: nope".into()
            })
        );
    }
}
