//! # Simple logging wrapper for debugging and demos.
//!
//! [`LogWrapper`] prints every listener call to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [call] listener=on_save_audit args=[1, 2, 42]
//! [ok] listener=on_save_audit
//! [failed] listener=on_save_mail err="mail: smtp down"
//! ```
//!
//! ## Example
//! ```no_run
//! # use eventslot::{Events, LogWrapper};
//! let events: Events<u32> = Events::builder().with_wrapper(LogWrapper).build()?;
//! # Ok::<(), eventslot::EventError>(())
//! ```

use std::fmt::Debug;

use crate::error::ListenerError;
use crate::listeners::Listener;
use crate::wrappers::CallWrapper;

/// Simple stdout logging wrapper.
///
/// Enabled via the `logging` feature. Not intended for production use -
/// implement a custom [`CallWrapper`] for structured logging or metrics.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWrapper;

impl<A: Debug + 'static> CallWrapper<A> for LogWrapper {
    fn call(&self, listener: &dyn Listener<A>, args: &[A]) -> Result<(), ListenerError> {
        println!("[call] listener={} args={:?}", listener.name(), args);
        let res = listener.call(args);
        match &res {
            Ok(()) => println!("[ok] listener={}", listener.name()),
            Err(e) => println!(
                "[failed] listener={} err={:?}",
                listener.name(),
                e.as_message()
            ),
        }
        res
    }
}
