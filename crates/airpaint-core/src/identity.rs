//! Durable stroke identities for transient sensor pointer ids.

use std::collections::HashMap;
use uuid::Uuid;

/// Durable identity token decoupling a stroke's lifetime from the sensor's
/// frame-scoped pointer id.
pub type StrokeId = Uuid;

/// Maps frame-scoped pointer ids to durable stroke identities.
///
/// The working set is bounded by the number of concurrently tracked pointers,
/// typically well under twenty.
#[derive(Debug, Default)]
pub struct IdentityBinder {
    bindings: HashMap<i32, StrokeId>,
}

impl IdentityBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bound identity for a pointer id, or a fresh unbound one.
    ///
    /// A fresh identity is not recorded here; it gets bound only when a
    /// finalizable stroke is actually created for it.
    pub fn resolve(&self, pointer_id: i32) -> StrokeId {
        self.bindings
            .get(&pointer_id)
            .copied()
            .unwrap_or_else(Uuid::new_v4)
    }

    /// Record a mapping, replacing any prior one for the pointer id.
    pub fn bind(&mut self, pointer_id: i32, id: StrokeId) {
        self.bindings.insert(pointer_id, id);
    }

    /// Remove a mapping; does nothing when absent.
    pub fn unbind(&mut self, pointer_id: i32) {
        self.bindings.remove(&pointer_id);
    }

    pub fn is_bound(&self, pointer_id: i32) -> bool {
        self.bindings.contains_key(&pointer_id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_fresh_until_bound() {
        let mut binder = IdentityBinder::new();

        let first = binder.resolve(7);
        let second = binder.resolve(7);
        assert_ne!(first, second); // nothing bound yet

        binder.bind(7, first);
        assert_eq!(binder.resolve(7), first);
        assert_eq!(binder.resolve(7), first);
    }

    #[test]
    fn test_bind_overwrites() {
        let mut binder = IdentityBinder::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        binder.bind(3, a);
        binder.bind(3, b);
        assert_eq!(binder.resolve(3), b);
        assert_eq!(binder.len(), 1);
    }

    #[test]
    fn test_unbind_missing_is_noop() {
        let mut binder = IdentityBinder::new();
        binder.unbind(42);
        assert!(binder.is_empty());

        let id = Uuid::new_v4();
        binder.bind(1, id);
        binder.unbind(1);
        assert!(!binder.is_bound(1));
    }
}
