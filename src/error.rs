//! Error types used by the event registry and its listeners.
//!
//! This module defines two error enums:
//!
//! - [`EventError`] — errors raised by the registry and slots themselves
//!   (bad configuration, undeclared or reserved names, bad indices).
//! - [`ListenerError`] — errors raised by a listener (or a call wrapper) while an
//!   event is being dispatched.
//!
//! [`EventSlot::invoke`](crate::EventSlot::invoke) returns a [`ListenerError`]
//! exactly as the failing listener produced it. [`EventError`] converts from it so
//! host code can use `?` across lookups and dispatch with a single error type.

use thiserror::Error;

/// # Errors produced by the registry and its slots.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The registry was configured with an unusable allow-list.
    #[error("invalid configuration: {reason}")]
    Config {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// An allow-list is in effect and the requested name is not on it.
    #[error("event '{name}' is not declared")]
    NotDeclared {
        /// The rejected event name.
        name: String,
    },

    /// The name is empty or uses the reserved `__` prefix; it never denotes an event.
    #[error("'{name}' is a reserved name, not an event")]
    Reserved {
        /// The rejected name.
        name: String,
    },

    /// A listener position outside `0..len` was requested.
    #[error("listener index {index} out of range for event '{event}' ({len} registered)")]
    IndexOutOfRange {
        /// Name of the slot that was indexed.
        event: String,
        /// The requested position.
        index: usize,
        /// Number of listeners registered at the time.
        len: usize,
    },

    /// A listener failed during [`Events::emit`](crate::Events::emit).
    #[error(transparent)]
    Listener(#[from] ListenerError),
}

impl EventError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventslot::EventError;
    ///
    /// let err = EventError::NotDeclared { name: "on_save".into() };
    /// assert_eq!(err.as_label(), "event_not_declared");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::Config { .. } => "event_config_invalid",
            EventError::NotDeclared { .. } => "event_not_declared",
            EventError::Reserved { .. } => "event_name_reserved",
            EventError::IndexOutOfRange { .. } => "event_index_out_of_range",
            EventError::Listener(e) => e.as_label(),
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EventError::Config { reason } => format!("config: {reason}"),
            EventError::NotDeclared { name } => format!("not declared: {name}"),
            EventError::Reserved { name } => format!("reserved: {name}"),
            EventError::IndexOutOfRange { event, index, len } => {
                format!("index {index} >= {len} on {event}")
            }
            EventError::Listener(e) => e.as_message(),
        }
    }
}

/// # Errors produced while dispatching to listeners.
///
/// Dispatch stops at the first listener that returns one of these; the error is
/// handed back to the caller of `invoke` untouched.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// The listener itself reported a failure.
    #[error("listener '{listener}' failed: {error}")]
    Fail {
        /// Name of the failing listener.
        listener: String,
        /// The underlying error message.
        error: String,
    },

    /// The call wrapper refused or failed to forward the call.
    #[error("call wrapper failed: {error}")]
    Wrapper {
        /// The underlying error message.
        error: String,
    },
}

impl ListenerError {
    /// Shorthand for [`ListenerError::Fail`].
    ///
    /// # Example
    /// ```
    /// use eventslot::ListenerError;
    ///
    /// let err = ListenerError::fail("audit", "disk full");
    /// assert_eq!(err.to_string(), "listener 'audit' failed: disk full");
    /// ```
    pub fn fail(listener: impl Into<String>, error: impl Into<String>) -> Self {
        ListenerError::Fail {
            listener: listener.into(),
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Fail { .. } => "listener_failed",
            ListenerError::Wrapper { .. } => "listener_wrapper_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ListenerError::Fail { listener, error } => format!("{listener}: {error}"),
            ListenerError::Wrapper { error } => format!("wrapper: {error}"),
        }
    }
}
