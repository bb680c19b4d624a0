use std::sync::Arc;
use parking_lot::Mutex;
use ahash::AHashMap;

/// Dashboard-wide event bus
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<std::any::TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Dashboard events
pub mod events {
    use super::Event;
    use crate::theme::Theme;

    /// Dataset loaded and installed
    #[derive(Debug, Clone)]
    pub struct DatasetLoaded {
        pub source_name: String,
        pub record_count: usize,
    }

    /// Initial load failed
    #[derive(Debug, Clone)]
    pub struct DatasetLoadFailed {
        pub source_name: String,
        pub error: String,
    }

    /// Filter pipeline re-ran
    #[derive(Debug, Clone)]
    pub struct FiltersApplied {
        pub matched: usize,
        pub total: usize,
    }

    /// Theme toggled
    #[derive(Debug, Clone)]
    pub struct ThemeChanged {
        pub theme: Theme,
    }

    /// Report export finished, successfully or not
    #[derive(Debug, Clone)]
    pub struct ReportExported {
        pub path: Option<String>,
        pub error: Option<String>,
    }

    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(
        DatasetLoaded,
        DatasetLoadFailed,
        FiltersApplied,
        ThemeChanged,
        ReportExported
    );
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_default().push(handler);
    }

    /// Publish an event to every handler subscribed to its type
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Event handler backed by a closure
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}

#[cfg(test)]
mod tests {
    use super::events::{FiltersApplied, ThemeChanged};
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_reaches_matching_subscribers_only() {
        let bus = EventBus::new();
        let matched = Arc::new(AtomicUsize::new(0));
        let themes = Arc::new(AtomicUsize::new(0));

        let seen = matched.clone();
        bus.subscribe::<FiltersApplied>(handler_from_fn(move |event| {
            if let Some(e) = event.as_any().downcast_ref::<FiltersApplied>() {
                seen.store(e.matched, Ordering::SeqCst);
            }
        }));

        let seen = themes.clone();
        bus.subscribe::<ThemeChanged>(handler_from_fn(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        bus.publish(FiltersApplied { matched: 7, total: 10 });

        assert_eq!(matched.load(Ordering::SeqCst), 7);
        assert_eq!(themes.load(Ordering::SeqCst), 0);
    }
}
