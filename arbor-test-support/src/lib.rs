//! Shared test utilities used across arbor crates.

pub mod tracing {
    //! A capturing layer for asserting on spans and events in tests.
    //!
    //! Install [`RecordingLayer::install`] for the duration of a test, run the
    //! code under test and then inspect [`RecordingLayer::spans`] and
    //! [`RecordingLayer::events`]. Field values are stored as strings: `Debug`
    //! fields keep their `Debug` rendering and strings, numbers and booleans
    //! are stored as plain text.

    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::subscriber::DefaultGuard;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::{LookupSpan, Registry};

    type Fields = HashMap<String, String>;

    #[derive(Default)]
    struct Captured {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    /// Layer that keeps every closed span and every event it observes.
    ///
    /// Clones share storage, so a test can keep one handle and give the other
    /// to the subscriber.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        captured: Arc<Mutex<Captured>>,
    }

    impl RecordingLayer {
        /// Installs a fresh layer as the thread-local default subscriber.
        ///
        /// Recording stops when the returned guard is dropped.
        ///
        /// # Examples
        /// ```
        /// use arbor_test_support::tracing::RecordingLayer;
        ///
        /// let (layer, _guard) = RecordingLayer::install();
        /// tracing::info!(answer = 42, "hello");
        /// assert_eq!(layer.events()[0].field("answer"), Some("42"));
        /// ```
        #[must_use]
        pub fn install() -> (Self, DefaultGuard) {
            let layer = Self::default();
            let subscriber = Registry::default().with(layer.clone());
            let guard = tracing::subscriber::set_default(subscriber);
            (layer, guard)
        }

        /// Closed spans in the order they closed.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.lock().spans.clone()
        }

        /// Events in the order they were emitted.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.lock().events.clone()
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.lock()
                .spans
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Returns every event whose `message` field equals `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
            self.lock()
                .events
                .iter()
                .filter(|event| event.message() == Some(message))
                .cloned()
                .collect()
        }

        fn lock(&self) -> MutexGuard<'_, Captured> {
            self.captured.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }
    }

    /// A closed span with the fields recorded on it over its lifetime.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from its metadata.
        pub name: String,
        /// Field values keyed by field name.
        pub fields: HashMap<String, String>,
    }

    impl SpanRecord {
        /// Looks up a field value by name.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    /// An emitted event together with the span it was emitted inside.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, normally the emitting module path.
        pub target: String,
        /// Name of the innermost enclosing span, if any.
        pub parent: Option<String>,
        /// Field values keyed by field name, `message` included.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Looks up a field value by name.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }

        /// The formatted event message.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }
    }

    struct OpenSpan {
        name: String,
        fields: Fields,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = Fields::new();
            attrs.record(&mut FieldCollector(&mut fields));
            span.extensions_mut().insert(OpenSpan {
                name: attrs.metadata().name().to_owned(),
                fields,
            });
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldCollector(&mut open.fields));
            }
        }

        fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut FieldCollector(&mut fields));
            let parent = ctx
                .event_span(event)
                .map(|span| span.metadata().name().to_owned());
            self.lock().events.push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                parent,
                fields,
            });
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
                return;
            };
            self.lock().spans.push(SpanRecord {
                name: open.name,
                fields: open.fields,
            });
        }
    }

    struct FieldCollector<'a>(&'a mut Fields);

    impl FieldCollector<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldCollector<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.put(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.put(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.put(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.put(field, value.to_string());
        }
    }

}

pub mod ci;
