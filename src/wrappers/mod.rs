//! # Call wrappers.
//!
//! A call wrapper sits between a slot's dispatch loop and each listener call.
//! Every slot of a registry shares the registry's wrapper.
//!
//! ## Architecture
//! ```text
//! slot.invoke(args)
//!     │   full = defaults ++ args
//!     ├──► wrapper.call(listener #1, full) ──► listener #1.call(full)
//!     ├──► wrapper.call(listener #2, full) ──► listener #2.call(full)
//!     └──► ...                          (stops at the first Err)
//! ```
//!
//! ## Built-in wrappers
//! - [`Direct`] - calls the listener as-is (the registry default)
//! - `LogWrapper` - prints every call to stdout (feature `logging`)
//!
//! Any `Fn(&dyn Listener<A>, &[A]) -> Result<(), ListenerError>` closure is a
//! wrapper too.

mod wrapper;

#[cfg(feature = "logging")]
mod log;

pub use wrapper::{CallWrapper, Direct, WrapperRef};

#[cfg(feature = "logging")]
pub use log::LogWrapper;
