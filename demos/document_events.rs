//! # Example: document_events
//!
//! A document type that exposes a fixed set of events.
//!
//! Shows how to:
//! - Fix the accepted event names with an [`EventSchema`].
//! - Pass the document id to every listener via default arguments.
//! - Trace every listener call with [`LogWrapper`].
//! - Observe how a failing listener stops the dispatch.
//!
//! ## Flow
//! ```text
//! Document::save()
//!     └─► events.emit("on_save", [rev])
//!           └─► LogWrapper ──► autosave(id, rev) ──► indexer(id, rev)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=eventslot=trace cargo run --example document_events --features logging
//! ```

use std::sync::{Arc, Mutex};

use eventslot::{
    EventError, EventSchema, Events, EventsBuilder, ListenerError, ListenerFn, ListenerRef,
    LogWrapper,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct DocumentEvents;

impl EventSchema for DocumentEvents {
    const EVENTS: Option<&'static [&'static str]> = Some(&["on_save", "on_close"]);
}

struct Document {
    revision: u64,
    events: Events<u64, DocumentEvents>,
}

impl Document {
    fn open(id: u64) -> Result<Self, EventError> {
        let events = EventsBuilder::new()
            .with_default_args([id])
            .with_wrapper(LogWrapper)
            .build()?;
        Ok(Self {
            revision: 0,
            events,
        })
    }

    fn save(&mut self) -> Result<(), EventError> {
        self.revision += 1;
        self.events.emit("on_save", &[self.revision])
    }

    fn close(mut self) -> Result<(), EventError> {
        self.events.emit("on_close", &[])
    }
}

fn main() -> Result<(), EventError> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let saved = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&saved);

    let autosave: ListenerRef<u64> = ListenerFn::arc("autosave", move |args: &[u64]| {
        if let Ok(mut revs) = sink.lock() {
            revs.push(args.to_vec());
        }
        Ok::<_, ListenerError>(())
    });
    let indexer: ListenerRef<u64> = ListenerFn::arc("indexer", |args: &[u64]| match args {
        [_, rev] if rev % 3 == 0 => Err(ListenerError::fail("indexer", "index locked")),
        _ => Ok(()),
    });

    let mut doc = Document::open(7)?;
    doc.events.get("on_save")?.add(autosave).add(indexer.clone());
    doc.events.get("on_close")?.add(ListenerFn::arc("bye", |args: &[u64]| {
        println!("closing document {args:?}");
        Ok::<_, ListenerError>(())
    }));

    for _ in 0..3 {
        if let Err(err) = doc.save() {
            println!("save failed: {err} ({})", err.as_label());
        }
    }

    if let Err(err) = doc.events.get("on_delete") {
        println!("rejected: {err}");
    }

    *doc.events.get("on_save")? -= &indexer;
    doc.save()?;

    println!("registry: {}", doc.events);
    println!("autosaved: {:?}", saved.lock().map(|v| v.clone()).unwrap_or_default());
    doc.close()
}
