//! LRU Tracker Module
//!
//! Recency order of viewport keys, used only when the cache has a capacity bound.

use std::collections::VecDeque;

use crate::cache::ViewportKey;

// == LRU Tracker ==
/// Front = most recently used, back = least recently used.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<ViewportKey>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Moves `key` to the front, inserting it if it is not tracked yet.
    pub fn touch(&mut self, key: &ViewportKey) {
        match self.order.iter().position(|k| k == key) {
            Some(0) => {}
            Some(idx) => {
                if let Some(existing) = self.order.remove(idx) {
                    self.order.push_front(existing);
                }
            }
            None => self.order.push_front(key.clone()),
        }
    }

    pub fn remove(&mut self, key: &ViewportKey) {
        if let Some(idx) = self.order.iter().position(|k| k == key) {
            self.order.remove(idx);
        }
    }

    /// Pops the least recently used key.
    pub fn evict_oldest(&mut self) -> Option<ViewportKey> {
        self.order.pop_back()
    }

    pub fn peek_oldest(&self) -> Option<&ViewportKey> {
        self.order.back()
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{viewport_key, BoundingBox, ZoomLevel};

    /// Distinct keys at zoom 16, one grid cell apart in latitude.
    fn key(n: u32) -> ViewportKey {
        let lat = f64::from(n) * 0.01 + 0.005;
        viewport_key(&BoundingBox::new(lat, lat, 0.005, 0.005), ZoomLevel(16.0))
    }

    #[test]
    fn test_lru_new() {
        let lru = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_touch_orders_by_recency() {
        let mut lru = LruTracker::new();
        lru.touch(&key(1));
        lru.touch(&key(2));
        lru.touch(&key(3));

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some(&key(1)));

        lru.touch(&key(1));
        assert_eq!(lru.peek_oldest(), Some(&key(2)));
    }

    #[test]
    fn test_touch_same_key_does_not_duplicate() {
        let mut lru = LruTracker::new();
        lru.touch(&key(7));
        lru.touch(&key(7));

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.evict_oldest(), Some(key(7)));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_evict_order() {
        let mut lru = LruTracker::new();
        for n in [1, 2, 3] {
            lru.touch(&key(n));
        }
        // a, then c, then b -> front=[b, c, a]
        lru.touch(&key(1));
        lru.touch(&key(3));
        lru.touch(&key(2));

        assert_eq!(lru.evict_oldest(), Some(key(1)));
        assert_eq!(lru.evict_oldest(), Some(key(3)));
        assert_eq!(lru.evict_oldest(), Some(key(2)));
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut lru = LruTracker::new();
        lru.touch(&key(1));
        lru.touch(&key(2));

        lru.remove(&key(1));
        lru.remove(&key(9));
        assert_eq!(lru.len(), 1);
        assert_eq!(lru.peek_oldest(), Some(&key(2)));

        lru.clear();
        assert!(lru.is_empty());
    }
}
