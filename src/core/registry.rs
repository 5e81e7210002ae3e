//! # Event registry - lazily declared, name-gated event slots.
//!
//! [`Events`] hands out one [`EventSlot`] per event name, creating it the first
//! time the name is looked up.
//!
//! ## Lookup rules
//! ```text
//! get(name)
//!   ├─► name empty or starts with "__"     → EventError::Reserved
//!   ├─► instance allow-list set, name ∉ it → EventError::NotDeclared
//!   ├─► else schema list set, name ∉ it    → EventError::NotDeclared
//!   └─► slot exists ? return it : create, remember, return it
//! ```
//!
//! ## Rules
//! - Registry owns its slots; they live exactly as long as the registry.
//! - Looking a name up declares it: `len()`/`iter()` cover every name looked up
//!   successfully, in first-lookup order, and nothing else.
//! - A rejected name never produces a slot.
//! - No internal locking: mutation goes through `&mut self`. Share a registry
//!   across threads by wrapping it in your own `Mutex`.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;
use std::sync::Arc;

use crate::core::{EventsBuilder, EventsConfig};
use crate::error::EventError;
use crate::events::{EventSchema, EventSlot, Open};
use crate::wrappers::{Direct, WrapperRef};

/// Prefix reserved for internal names; never treated as an event.
pub const RESERVED_PREFIX: &str = "__";

/// True if `name` can denote an event: non-empty and not `__`-prefixed.
///
/// Applied to lookups, instance allow-lists and schema lists alike.
pub(crate) fn is_event_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with(RESERVED_PREFIX)
}

/// Iterator over the declared slots of a registry, in first-lookup order.
pub type Slots<'a, A> = std::slice::Iter<'a, EventSlot<A>>;

/// Container of named event slots.
///
/// `A` is the argument type passed to listeners; `S` optionally fixes the set
/// of accepted names at the type level (see [`EventSchema`]).
///
/// # Example
/// ```
/// use eventslot::{Events, ListenerError, ListenerFn, ListenerRef};
///
/// let mut events = Events::new();
/// let f: ListenerRef<u32> = ListenerFn::arc("f", |args: &[u32]| {
///     assert_eq!(args, &[42]);
///     Ok::<_, ListenerError>(())
/// });
///
/// events.get("on_save")?.add(f);
/// events.get("on_save")?.invoke(&[42])?;
///
/// assert_eq!(events.len(), 1);
/// assert_eq!(events.to_string(), "Events[event 'on_save']");
/// # Ok::<(), eventslot::EventError>(())
/// ```
pub struct Events<A, S = Open> {
    allowed: Option<HashSet<String>>,
    default_args: Arc<[A]>,
    wrapper: WrapperRef<A>,
    slots: Vec<EventSlot<A>>,
    index: HashMap<String, usize>,
    _schema: PhantomData<fn() -> S>,
}

impl<A: 'static> Events<A> {
    /// Creates a registry that accepts any non-reserved event name.
    pub fn new() -> Self {
        Self::declared()
    }

    /// Returns a builder for a registry with an allow-list, default arguments
    /// or a call wrapper.
    ///
    /// For a registry with a custom schema use [`EventsBuilder::new`].
    pub fn builder() -> EventsBuilder<A> {
        EventsBuilder::new()
    }
}

impl<A: 'static, S: EventSchema> Events<A, S> {
    /// Creates a registry governed only by the schema `S`.
    pub fn declared() -> Self {
        Self {
            allowed: None,
            default_args: Arc::from(Vec::new()),
            wrapper: Arc::new(Direct),
            slots: Vec::new(),
            index: HashMap::new(),
            _schema: PhantomData,
        }
    }

    /// Creates a registry from a prepared configuration.
    ///
    /// Fails with [`EventError::Config`] if the allow-list is unusable.
    pub fn with_config(cfg: EventsConfig<A>) -> Result<Self, EventError> {
        cfg.validate()?;
        let wrapper = cfg.wrapper.unwrap_or_else(|| Arc::new(Direct));
        Ok(Self {
            allowed: cfg.allowed.map(|names| names.into_iter().collect()),
            default_args: Arc::from(cfg.default_args),
            wrapper,
            slots: Vec::new(),
            index: HashMap::new(),
            _schema: PhantomData,
        })
    }

    /// Returns the slot for `name`, creating it on first lookup.
    ///
    /// Fails with [`EventError::Reserved`] for empty names or names starting
    /// with `__`, and with
    /// [`EventError::NotDeclared`] when an allow-list is in effect and lacks `name`.
    pub fn get(&mut self, name: &str) -> Result<&mut EventSlot<A>, EventError> {
        if let Some(&i) = self.index.get(name) {
            return Ok(&mut self.slots[i]);
        }
        self.admit(name)?;

        let i = self.slots.len();
        self.slots.push(EventSlot::new(
            name,
            Arc::clone(&self.default_args),
            Arc::clone(&self.wrapper),
        ));
        self.index.insert(name.to_string(), i);
        tracing::trace!(event = name, declared = i + 1, "declared event slot");

        Ok(&mut self.slots[i])
    }

    /// Returns the slot for `name` if it has already been declared.
    ///
    /// Never creates a slot.
    pub fn slot(&self, name: &str) -> Option<&EventSlot<A>> {
        self.index.get(name).map(|&i| &self.slots[i])
    }

    /// True if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of declared event slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no event has been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over the declared slots in first-lookup order.
    pub fn iter(&self) -> Slots<'_, A> {
        self.slots.iter()
    }

    /// Iterates over the declared event names in first-lookup order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().map(EventSlot::name)
    }

    fn admit(&self, name: &str) -> Result<(), EventError> {
        if !is_event_name(name) {
            tracing::debug!(event = name, "rejected reserved event name");
            return Err(EventError::Reserved {
                name: name.to_string(),
            });
        }

        let declared = match &self.allowed {
            Some(names) => names.contains(name),
            None => S::admits(name),
        };
        if !declared {
            tracing::debug!(event = name, "rejected undeclared event name");
            return Err(EventError::NotDeclared {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

impl<A: Clone + 'static, S: EventSchema> Events<A, S> {
    /// Looks up (declaring if needed) `name` and invokes its slot with `args`.
    ///
    /// Listener failures come back as [`EventError::Listener`].
    pub fn emit(&mut self, name: &str, args: &[A]) -> Result<(), EventError> {
        self.get(name)?.invoke(args)?;
        Ok(())
    }
}

impl<A: 'static, S: EventSchema> Default for Events<A, S> {
    fn default() -> Self {
        Self::declared()
    }
}

impl<A, S> fmt::Display for Events<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Events[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{slot}")?;
        }
        f.write_str("]")
    }
}

impl<A: 'static, S> fmt::Debug for Events<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Events")
            .field("allowed", &self.allowed)
            .field("default_args", &self.default_args.len())
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

/// Read-only lookup of a declared slot.
///
/// Panics if `name` has not been declared; use [`Events::get`] to declare it.
impl<A: 'static, S: EventSchema> Index<&str> for Events<A, S> {
    type Output = EventSlot<A>;

    fn index(&self, name: &str) -> &Self::Output {
        match self.slot(name) {
            Some(slot) => slot,
            None => panic!("event '{name}' has not been declared"),
        }
    }
}

impl<'a, A: 'static, S: EventSchema> IntoIterator for &'a Events<A, S> {
    type Item = &'a EventSlot<A>;
    type IntoIter = Slots<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use proptest::prelude::*;

    use super::*;
    use crate::error::ListenerError;
    use crate::listeners::{Listener, ListenerFn, ListenerRef};

    type Calls = Arc<Mutex<Vec<(&'static str, Vec<i32>)>>>;

    fn noop(name: &'static str) -> ListenerRef<i32> {
        ListenerFn::arc(name, |_: &[i32]| Ok::<_, ListenerError>(()))
    }

    fn recorder(name: &'static str, calls: &Calls) -> ListenerRef<i32> {
        let calls = Arc::clone(calls);
        ListenerFn::arc(name, move |args: &[i32]| {
            calls.lock().unwrap().push((name, args.to_vec()));
            Ok::<_, ListenerError>(())
        })
    }

    struct OneEvent;

    impl EventSchema for OneEvent {
        const EVENTS: Option<&'static [&'static str]> = Some(&["on_eventOne"]);
    }

    struct TwoEvents;

    impl EventSchema for TwoEvents {
        const EVENTS: Option<&'static [&'static str]> = Some(&["on_eventOne", "on_eventTwo"]);
    }

    #[test]
    fn test_schema_rejects_undeclared() {
        let mut restricted: Events<i32, OneEvent> = Events::declared();
        assert!(restricted.get("on_eventOne").is_ok());
        assert_eq!(
            restricted.get("on_eventNotOne").unwrap_err(),
            EventError::NotDeclared {
                name: "on_eventNotOne".into()
            }
        );

        let mut open: Events<i32> = Events::new();
        assert!(open.get("on_eventNotOne").is_ok());
    }

    #[test]
    fn test_instance_allow_list() {
        let mut restricted: Events<i32> = Events::builder()
            .with_allowed(["on_eventOne"])
            .build()
            .unwrap();

        restricted.get("on_eventOne").unwrap().add(noop("callback1"));
        assert!(matches!(
            restricted.get("on_eventNotOne"),
            Err(EventError::NotDeclared { .. })
        ));
        assert_eq!(restricted.len(), 1);

        let mut open: Events<i32> = Events::new();
        for name in ["on_eventNotOne", "on_one", "on_two", "x"] {
            assert!(open.get(name).is_ok(), "{name} should be accepted");
        }
    }

    #[test]
    fn test_instance_list_overrides_schema() {
        let mut ev: Events<i32, TwoEvents> = EventsBuilder::new()
            .with_allowed(["on_everyTwo"])
            .build()
            .unwrap();

        assert!(ev.get("on_everyTwo").is_ok());
        assert!(ev.get("on_everyOne").is_err());
        // Listed by the schema but not by the instance: still rejected.
        assert!(matches!(
            ev.get("on_eventOne"),
            Err(EventError::NotDeclared { .. })
        ));
    }

    #[test]
    fn test_empty_sequence_leaves_declared_slot_empty() {
        let mut ev: Events<i32> = Events::new();
        ev.get("on_change").unwrap();
        assert_eq!(ev.len(), 1);
        assert_eq!(ev["on_change"].len(), 0);
        assert_eq!(ev["on_change"].iter().count(), 0);
    }

    #[test]
    fn test_empty_name_is_never_an_event() {
        let mut ev: Events<i32> = Events::new();
        assert_eq!(
            ev.get("").unwrap_err(),
            EventError::Reserved { name: String::new() }
        );
        assert!(ev.is_empty());
    }

    #[test]
    fn test_reserved_prefix_never_creates_slot() {
        let mut ev: Events<i32> = Events::new();
        assert_eq!(
            ev.get("__len__").unwrap_err(),
            EventError::Reserved {
                name: "__len__".into()
            }
        );
        assert!(ev.is_empty());
        assert!(!ev.contains("__len__"));
    }

    #[test]
    fn test_rejected_name_creates_nothing() {
        let mut ev: Events<i32, OneEvent> = Events::default();
        let _ = ev.get("on_other");
        assert_eq!(ev.len(), 0);
        assert!(ev.slot("on_other").is_none());
    }

    #[test]
    fn test_reserved_allow_list_entry_fails_build() {
        let res: Result<Events<i32>, _> = Events::builder().with_allowed(["__init__"]).build();
        assert!(matches!(res, Err(EventError::Config { .. })));
    }

    #[test]
    fn test_len_counts_declared_names() {
        let mut ev: Events<i32> = Events::new();
        ev.get("on_change").unwrap().add(noop("callback1"));
        ev.get("on_get").unwrap().add(noop("callback2"));
        assert_eq!(ev.len(), 2);
    }

    #[test]
    fn test_lookup_alone_declares() {
        let mut ev: Events<i32> = Events::new();
        let _ = ev.get("on_change").unwrap();
        assert_eq!(ev.len(), 1);
        assert!(ev["on_change"].is_empty());
    }

    #[test]
    fn test_get_is_idempotent() {
        let mut ev: Events<i32> = Events::new();
        ev.get("on_change").unwrap().add(noop("a"));
        ev.get("on_change").unwrap().add(noop("b"));
        assert_eq!(ev.len(), 1);
        assert_eq!(ev["on_change"].len(), 2);
    }

    #[test]
    fn test_iter_in_first_lookup_order() {
        let mut ev: Events<i32> = Events::new();
        ev.get("on_change").unwrap().add(noop("callback1"));
        ev.get("on_change").unwrap().add(noop("callback2"));
        ev.get("on_edit").unwrap().add(noop("callback1"));

        let names: Vec<&str> = ev.iter().map(EventSlot::name).collect();
        assert_eq!(names, ["on_change", "on_edit"]);
        assert_eq!((&ev).into_iter().count(), 2);
        assert_eq!(ev.names().collect::<Vec<_>>(), ["on_change", "on_edit"]);
    }

    #[test]
    fn test_allowed_but_unused_not_iterated() {
        let mut ev: Events<i32> = Events::builder()
            .with_allowed(["on_a", "on_b", "on_c"])
            .build()
            .unwrap();
        let _ = ev.get("on_b").unwrap();
        assert_eq!(ev.names().collect::<Vec<_>>(), ["on_b"]);
    }

    #[test]
    fn test_display() {
        let mut ev: Events<i32> = Events::new();
        assert_eq!(ev.to_string(), "Events[]");
        let _ = ev.get("on_change").unwrap();
        let _ = ev.get("on_edit").unwrap();
        assert_eq!(
            ev.to_string(),
            "Events[event 'on_change', event 'on_edit']"
        );
    }

    #[test]
    fn test_default_args_prepended() {
        let calls = Calls::default();
        let mut ev: Events<i32> = Events::builder()
            .with_default_args([1, 2])
            .build()
            .unwrap();
        ev.get("on_change").unwrap().add(recorder("f", &calls));

        ev.emit("on_change", &[3]).unwrap();

        assert_eq!(*calls.lock().unwrap(), [("f", vec![1, 2, 3])]);
    }

    #[test]
    fn test_wrapper_called_once_per_listener() {
        let calls = Calls::default();
        let wrapped = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&wrapped);
        let mut ev: Events<i32> = Events::builder()
            .with_wrapper(move |l: &dyn Listener<i32>, args: &[i32]| {
                log.lock().unwrap().push(l.name().to_string());
                l.call(args)
            })
            .build()
            .unwrap();
        ev.get("on_save")
            .unwrap()
            .add(recorder("f", &calls))
            .add(recorder("g", &calls));

        ev.emit("on_save", &[1]).unwrap();

        assert_eq!(*wrapped.lock().unwrap(), ["f", "g"]);
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_save_scenario() {
        let calls = Calls::default();
        let mut reg: Events<i32> = Events::new();
        *reg.get("on_save").unwrap() += recorder("f", &calls);
        *reg.get("on_save").unwrap() += recorder("g", &calls);

        reg.get("on_save").unwrap().invoke(&[42]).unwrap();

        assert_eq!(*calls.lock().unwrap(), [("f", vec![42]), ("g", vec![42])]);
    }

    #[test]
    fn test_emit_surfaces_listener_error() {
        let mut ev: Events<i32> = Events::new();
        ev.get("on_save").unwrap().add(ListenerFn::arc("bad", |_: &[i32]| {
            Err::<(), _>(ListenerError::fail("bad", "boom"))
        }));

        assert_eq!(
            ev.emit("on_save", &[]),
            Err(EventError::Listener(ListenerError::fail("bad", "boom")))
        );
    }

    #[test]
    fn test_emit_on_undeclared_fails_before_dispatch() {
        let mut ev: Events<i32, OneEvent> = Events::declared();
        assert!(matches!(
            ev.emit("on_other", &[1]),
            Err(EventError::NotDeclared { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "has not been declared")]
    fn test_index_panics_for_undeclared() {
        let ev: Events<i32> = Events::new();
        let _ = &ev["on_change"];
    }

    #[test]
    fn test_registry_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Events<i32>>();
        assert_send::<Events<String, OneEvent>>();
    }

    proptest! {
        #[test]
        fn slot_tracks_add_remove_sequences(ops in prop::collection::vec((any::<bool>(), 0usize..3), 0..40)) {
            let pool = [noop("a"), noop("b"), noop("c")];
            let mut ev: Events<i32> = Events::new();
            ev.get("on_change").unwrap();
            let mut model: Vec<usize> = Vec::new();

            for (add, which) in ops {
                let slot = ev.get("on_change").unwrap();
                if add {
                    slot.add(Arc::clone(&pool[which]));
                    model.push(which);
                } else {
                    slot.remove(&pool[which]);
                    model.retain(|&m| m != which);
                }
            }

            let slot = &ev["on_change"];
            prop_assert_eq!(slot.len(), model.len());
            for (listener, &expected) in slot.iter().zip(&model) {
                prop_assert!(Arc::ptr_eq(listener, &pool[expected]));
            }
        }
    }
}
