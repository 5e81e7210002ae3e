//! # EventSlot: ordered listener list for one event name.
//!
//! A slot keeps its listeners in registration order, duplicates included, and
//! calls all of them when the event is invoked.
//!
//! ## What it guarantees
//! - `invoke` calls listeners synchronously, in registration order, before returning.
//! - The listener set is fixed for the duration of one `invoke` (`&self` borrow).
//! - The first listener error stops the dispatch and is returned as-is.
//!
//! ## What it does **not** guarantee
//! - No isolation: listeners after a failing one are not called.
//! - No uniqueness: a listener added twice runs twice.
//!
//! ## Diagram
//! ```text
//!   invoke(args)
//!       │  full = defaults ++ args
//!       ├──► wrapper(listener[0], full) ── Err ──► return Err
//!       ├──► wrapper(listener[1], full)
//!       └──► wrapper(listener[n], full) ──► Ok(())
//! ```
//!
//! ## Example
//! ```rust
//! use eventslot::{Events, ListenerError, ListenerFn, ListenerRef};
//!
//! let mut events = Events::new();
//! let f: ListenerRef<i32> = ListenerFn::arc("f", |_: &[i32]| Ok::<_, ListenerError>(()));
//!
//! let slot = events.get("on_change")?;
//! slot.add(f.clone()).add(f.clone());
//! assert_eq!(slot.len(), 2);
//!
//! *slot -= &f;
//! assert!(slot.is_empty());
//! assert_eq!(slot.to_string(), "event 'on_change'");
//! # Ok::<(), eventslot::EventError>(())
//! ```

use std::borrow::Cow;
use std::fmt;
use std::ops::{AddAssign, Index, SubAssign};
use std::sync::Arc;

use crate::error::{EventError, ListenerError};
use crate::listeners::ListenerRef;
use crate::wrappers::WrapperRef;

/// Iterator over the listeners of a slot, in registration order.
pub type Listeners<'a, A> = std::slice::Iter<'a, ListenerRef<A>>;

/// Listeners bound to a single event name.
///
/// Created by [`Events::get`](crate::Events::get); shares the registry's default
/// arguments and call wrapper.
pub struct EventSlot<A> {
    name: Arc<str>,
    targets: Vec<ListenerRef<A>>,
    default_args: Arc<[A]>,
    wrapper: WrapperRef<A>,
}

impl<A: 'static> EventSlot<A> {
    pub(crate) fn new(name: &str, default_args: Arc<[A]>, wrapper: WrapperRef<A>) -> Self {
        Self {
            name: Arc::from(name),
            targets: Vec::new(),
            default_args,
            wrapper,
        }
    }

    /// Returns the event name this slot was created for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends `listener`; the same handle may be added more than once.
    pub fn add(&mut self, listener: ListenerRef<A>) -> &mut Self {
        self.targets.push(listener);
        self
    }

    /// Removes every occurrence of `listener` (compared by identity).
    ///
    /// Removing a listener that is not registered is a no-op.
    pub fn remove(&mut self, listener: &ListenerRef<A>) -> &mut Self {
        self.targets.retain(|t| !Arc::ptr_eq(t, listener));
        self
    }

    /// Number of registered listeners, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns the listener at `index` in registration order.
    pub fn get(&self, index: usize) -> Result<&ListenerRef<A>, EventError> {
        self.targets
            .get(index)
            .ok_or_else(|| EventError::IndexOutOfRange {
                event: self.name.to_string(),
                index,
                len: self.targets.len(),
            })
    }

    /// Iterates over the currently registered listeners.
    pub fn iter(&self) -> Listeners<'_, A> {
        self.targets.iter()
    }
}

impl<A: Clone + 'static> EventSlot<A> {
    /// Calls every listener with the registry defaults followed by `args`.
    ///
    /// Returns the first listener (or wrapper) error unchanged; the listeners
    /// after it are skipped.
    pub fn invoke(&self, args: &[A]) -> Result<(), ListenerError> {
        let full: Cow<'_, [A]> = if self.default_args.is_empty() {
            Cow::Borrowed(args)
        } else {
            Cow::Owned(self.default_args.iter().chain(args).cloned().collect())
        };

        tracing::trace!(
            event = %self.name,
            listeners = self.targets.len(),
            args = full.len(),
            "dispatching event"
        );

        for target in &self.targets {
            if let Err(err) = self.wrapper.call(&**target, &full) {
                tracing::debug!(
                    event = %self.name,
                    listener = target.name(),
                    error = err.as_label(),
                    "listener failed; dispatch aborted"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<A> fmt::Display for EventSlot<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event '{}'", self.name)
    }
}

impl<A: 'static> fmt::Debug for EventSlot<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.targets.iter().map(|t| t.name()).collect();
        f.debug_struct("EventSlot")
            .field("name", &self.name)
            .field("listeners", &names)
            .field("default_args", &self.default_args.len())
            .finish_non_exhaustive()
    }
}

/// Panics when `index` is out of range; use [`EventSlot::get`] for a fallible lookup.
impl<A: 'static> Index<usize> for EventSlot<A> {
    type Output = ListenerRef<A>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.targets[index]
    }
}

impl<A: 'static> AddAssign<ListenerRef<A>> for EventSlot<A> {
    fn add_assign(&mut self, listener: ListenerRef<A>) {
        self.add(listener);
    }
}

impl<A: 'static> SubAssign<&ListenerRef<A>> for EventSlot<A> {
    fn sub_assign(&mut self, listener: &ListenerRef<A>) {
        self.remove(listener);
    }
}

impl<'a, A: 'static> IntoIterator for &'a EventSlot<A> {
    type Item = &'a ListenerRef<A>;
    type IntoIter = Listeners<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
