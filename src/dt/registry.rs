//! Explicit registry of Delaunay backends.
//!
//! The registry is an ordinary value: build it once at start-up, register
//! the backends you want, and pass it by reference to the orchestration
//! functions. The *reference* backend is the registered one with the highest
//! priority; on equal priority the first registered wins.

use std::fmt;

use crate::dt::backend::DelaunayBackend;
use crate::dt::delaunator_backend::{DELAUNATOR_BACKEND_NAME, DelaunatorBackend};
use crate::dt::spade_backend::{SPADE_BACKEND_NAME, SpadeBackend};

/// Creates a fresh, empty backend instance.
pub type BackendFactory = Box<dyn Fn() -> Box<dyn DelaunayBackend> + Send + Sync>;

struct Entry {
    name: String,
    priority: i32,
    factory: BackendFactory,
}

#[derive(Default)]
pub struct DelaunayRegistry {
    entries: Vec<Entry>,
}

impl fmt::Debug for DelaunayRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (&e.name, e.priority)))
            .finish()
    }
}

impl DelaunayRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// spade (priority 10, the reference) and delaunator (priority 0).
    pub fn with_default_backends() -> Self {
        let mut r = Self::new();
        r.register(SPADE_BACKEND_NAME, 10, || Box::new(SpadeBackend::new()));
        r.register(DELAUNATOR_BACKEND_NAME, 0, || {
            Box::new(DelaunatorBackend::new())
        });
        r
    }

    /// Register `factory` under `name`, replacing an entry of the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, priority: i32, factory: F)
    where
        F: Fn() -> Box<dyn DelaunayBackend> + Send + Sync + 'static,
    {
        let name = name.into();
        let entry = Entry {
            name,
            priority,
            factory: Box::new(factory),
        };
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    /// Remove the entry called `name`; `true` if there was one.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        before != self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Name of the reference backend.
    pub fn reference_name(&self) -> Option<&str> {
        self.reference_entry().map(|e| e.name.as_str())
    }

    /// Instantiate the reference backend.
    pub fn reference(&self) -> Option<Box<dyn DelaunayBackend>> {
        self.reference_entry().map(|e| (e.factory)())
    }

    /// Instantiate the backend called `name`.
    pub fn create(&self, name: &str) -> Option<Box<dyn DelaunayBackend>> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| (e.factory)())
    }

    /// Instantiate every backend, in registration order.
    pub fn create_all(&self) -> Vec<Box<dyn DelaunayBackend>> {
        self.entries.iter().map(|e| (e.factory)()).collect()
    }

    fn reference_entry(&self) -> Option<&Entry> {
        // first maximum wins ties
        self.entries
            .iter()
            .fold(None, |best: Option<&Entry>, e| match best {
                Some(b) if b.priority >= e.priority => Some(b),
                _ => Some(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backends() {
        let r = DelaunayRegistry::with_default_backends();
        assert_eq!(r.names().collect::<Vec<_>>(), vec!["spade", "delaunator"]);
        assert_eq!(r.reference_name(), Some("spade"));
        assert_eq!(r.reference().unwrap().name(), "spade");
        assert_eq!(r.create("delaunator").unwrap().name(), "delaunator");
        assert!(r.create("cgal").is_none());
    }

    #[test]
    fn priority_then_registration_order() {
        let mut r = DelaunayRegistry::new();
        assert!(r.reference().is_none());
        r.register("a", 1, || Box::new(DelaunatorBackend::new()));
        r.register("b", 5, || Box::new(SpadeBackend::new()));
        r.register("c", 5, || Box::new(DelaunatorBackend::new()));
        assert_eq!(r.reference_name(), Some("b"));
        assert!(r.unregister("b"));
        assert_eq!(r.reference_name(), Some("c"));
        assert!(!r.unregister("b"));
    }

    #[test]
    fn re_registering_replaces() {
        let mut r = DelaunayRegistry::with_default_backends();
        r.register("delaunator", 100, || Box::new(DelaunatorBackend::new()));
        assert_eq!(r.len(), 2);
        assert_eq!(r.reference_name(), Some("delaunator"));
    }
}
