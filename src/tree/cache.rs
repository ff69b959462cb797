// ABOUTME: Weak-valued identity cache for tree object handles
// ABOUTME: Guarantees at most one live handle per resource path and type

//! Handle identity cache.
//!
//! Each concrete tree object type owns one cache mapping canonical resource
//! path strings to weak references of the shared handle state. Constructing
//! a handle for a path that already has a live handle returns that handle;
//! dead entries are dropped lazily. The cache is safe against finalization
//! happening concurrently with lookups.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

/// Weak-valued map from resource path to handle state.
pub struct ObjectCache<T> {
    entries: Mutex<HashMap<String, Weak<T>>>,
}

impl<T> Default for ObjectCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ObjectCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a live entry.
    pub fn get(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.lock().expect("object cache lock poisoned");
        entries.get(key).and_then(Weak::upgrade)
    }

    /// Return the live entry for `key`, or atomically insert the value
    /// produced by `create`. The key must not be empty.
    pub fn get_or_insert(&self, key: &str, create: impl FnOnce() -> Arc<T>) -> Arc<T> {
        let mut entries = self.entries.lock().expect("object cache lock poisoned");
        if let Some(existing) = entries.get(key).and_then(Weak::upgrade) {
            return existing;
        }
        let value = create();
        entries.insert(key.to_owned(), Arc::downgrade(&value));
        value
    }

    /// Insert or replace the entry for `key`.
    pub fn insert(&self, key: &str, value: &Arc<T>) {
        let mut entries = self.entries.lock().expect("object cache lock poisoned");
        entries.insert(key.to_owned(), Arc::downgrade(value));
    }

    /// Drop entries whose handles have been finalized.
    pub fn prune(&self) {
        let mut entries = self.entries.lock().expect("object cache lock poisoned");
        entries.retain(|_, weak| weak.strong_count() > 0);
    }

    /// Number of live entries.
    pub fn live_count(&self) -> usize {
        let entries = self.entries.lock().expect("object cache lock poisoned");
        entries
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_insert_returns_cached_instance() {
        let cache = ObjectCache::<i32>::new();
        let first = cache.get_or_insert("models/m1", || Arc::new(1));
        let second = cache.get_or_insert("models/m1", || Arc::new(2));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*second, 1);
    }

    #[test]
    fn test_dead_entries_are_replaced() {
        let cache = ObjectCache::<i32>::new();
        {
            let value = cache.get_or_insert("models/m1", || Arc::new(1));
            drop(value);
        }
        assert!(cache.get("models/m1").is_none());
        let fresh = cache.get_or_insert("models/m1", || Arc::new(2));
        assert_eq!(*fresh, 2);
    }

    #[test]
    fn test_prune_drops_dead_entries() {
        let cache = ObjectCache::<i32>::new();
        let keep = cache.get_or_insert("models/m1", || Arc::new(1));
        drop(cache.get_or_insert("models/m2", || Arc::new(2)));
        cache.prune();
        assert_eq!(cache.live_count(), 1);
        assert!(cache.get("models/m1").is_some());
        drop(keep);
    }

    #[test]
    fn test_concurrent_lookup_and_drop() {
        let cache = Arc::new(ObjectCache::<i32>::new());
        let mut threads = Vec::new();
        for _ in 0..4 {
            let cache = Arc::clone(&cache);
            threads.push(std::thread::spawn(move || {
                for i in 0..200 {
                    let key = format!("models/m{}", i % 10);
                    let value = cache.get_or_insert(&key, || Arc::new(i));
                    drop(value);
                }
            }));
        }
        for thread in threads {
            thread.join().unwrap();
        }
    }
}
