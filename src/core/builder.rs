use std::marker::PhantomData;
use std::sync::Arc;

use crate::core::{Events, EventsConfig};
use crate::error::EventError;
use crate::events::{EventSchema, Open};
use crate::wrappers::CallWrapper;

/// Builder for constructing an [`Events`] registry with optional settings.
pub struct EventsBuilder<A, S = Open> {
    cfg: EventsConfig<A>,
    _schema: PhantomData<fn() -> S>,
}

impl<A: 'static, S: EventSchema> EventsBuilder<A, S> {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            cfg: EventsConfig::default(),
            _schema: PhantomData,
        }
    }

    /// Restricts the registry to `names`, overriding the schema's list.
    ///
    /// The names are collected immediately.
    pub fn with_allowed<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.cfg.allowed = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the leading arguments passed to every listener.
    pub fn with_default_args(mut self, args: impl IntoIterator<Item = A>) -> Self {
        self.cfg.default_args = args.into_iter().collect();
        self
    }

    /// Sets the wrapper interposed on every listener call.
    pub fn with_wrapper(mut self, wrapper: impl CallWrapper<A>) -> Self {
        self.cfg.wrapper = Some(Arc::new(wrapper));
        self
    }

    /// Validates the configuration and builds the registry.
    pub fn build(self) -> Result<Events<A, S>, EventError> {
        Events::with_config(self.cfg)
    }
}

impl<A: 'static, S: EventSchema> Default for EventsBuilder<A, S> {
    fn default() -> Self {
        Self::new()
    }
}
