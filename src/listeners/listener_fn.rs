//! # Function-backed listener (`ListenerFn`)
//!
//! [`ListenerFn`] wraps a closure `F: Fn(&[A]) -> Result<(), ListenerError>` and
//! gives it a name. Listener state that must change between calls belongs behind
//! a `Mutex`/atomic captured by the closure.
//!
//! ## Example
//! ```rust
//! use eventslot::{ListenerFn, ListenerRef, ListenerError};
//!
//! let f: ListenerRef<i32> = ListenerFn::arc("printer", |args: &[i32]| {
//!     println!("got {args:?}");
//!     Ok::<_, ListenerError>(())
//! });
//!
//! assert_eq!(f.name(), "printer");
//! assert!(f.call(&[1, 2]).is_ok());
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::ListenerError;
use crate::listeners::listener::Listener;

/// Function-backed listener implementation.
pub struct ListenerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a [`ListenerRef`](crate::ListenerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the listener and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for ListenerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerFn").field("name", &self.name).finish()
    }
}

impl<A, F> Listener<A> for ListenerFn<F>
where
    F: Fn(&[A]) -> Result<(), ListenerError> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, args: &[A]) -> Result<(), ListenerError> {
        (self.f)(args)
    }
}
