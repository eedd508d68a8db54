use crate::grid::item::Layout;
use std::collections::HashMap;
use std::time::{Duration, Instant};

struct CachedLayout {
    layout: Layout,
    stored_at: Instant,
}

/// Per-owner layout cache with an injected TTL and an explicit clear.
///
/// Owned by whoever composes the store, never a module-level singleton, so
/// each owner id can be tested in isolation without cross-test leakage.
pub struct LayoutCache {
    entries: HashMap<String, CachedLayout>,
    ttl: Duration,
}

impl LayoutCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, owner: &str) -> Option<Layout> {
        self.entries.get(owner).and_then(|entry| {
            if entry.stored_at.elapsed() < self.ttl {
                Some(entry.layout.clone())
            } else {
                None
            }
        })
    }

    pub fn put(&mut self, owner: &str, layout: Layout) {
        self.entries.insert(
            owner.to_string(),
            CachedLayout {
                layout,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn invalidate(&mut self, owner: &str) {
        self.entries.remove(owner);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
