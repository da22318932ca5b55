//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use crate::common::{FrameId, PageId};
use crate::sim::replacer::Replacer;
use crate::sim::FrameSet;

/// Evicts the resident page that was referenced longest ago.
///
/// The recency list is reordered on every hit, not only on faults — that is
/// the contract separating LRU from FIFO: eviction order follows reference
/// order, not arrival order.
#[derive(Debug, Default)]
pub struct LruReplacer {
    /// Resident pages ordered least- to most-recently used (front = LRU).
    recency: VecDeque<PageId>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            recency: VecDeque::new(),
        }
    }

    /// Move `page` to the most-recently-used end of the list.
    fn touch(&mut self, page: PageId) {
        let pos = self
            .recency
            .iter()
            .position(|&p| p == page)
            .expect("hit page is missing from the recency list");
        let _ = self.recency.remove(pos);
        self.recency.push_back(page);
    }
}

impl Replacer for LruReplacer {
    fn record_hit(&mut self, page: PageId) {
        self.touch(page);
    }

    fn record_insert(&mut self, page: PageId) {
        self.recency.push_back(page);
    }

    fn select_victim(
        &mut self,
        frames: &FrameSet,
        _reference_string: &[PageId],
        _position: usize,
    ) -> FrameId {
        let lru = self
            .recency
            .pop_front()
            .expect("recency list is empty while the frame set is full");
        frames
            .index_of(lru)
            .expect("recency list tracks a page that is not resident")
    }
}
