//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::{FrameId, PageId};
use crate::sim::replacer::Replacer;
use crate::sim::FrameSet;

/// Evicts the resident page that arrived earliest.
///
/// Arrival order is a total order, so no tie-break is needed. Hits do not
/// reorder anything: a page faulted in and immediately re-referenced hits
/// without re-entering the queue, and keeps its original eviction slot.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl Replacer for FifoReplacer {
    fn record_hit(&mut self, _page: PageId) {
        // Arrival order is insensitive to re-reference.
    }

    fn record_insert(&mut self, page: PageId) {
        self.queue.push_back(page);
    }

    fn select_victim(
        &mut self,
        frames: &FrameSet,
        _reference_string: &[PageId],
        _position: usize,
    ) -> FrameId {
        let oldest = self
            .queue
            .pop_front()
            .expect("FIFO queue is empty while the frame set is full");
        frames
            .index_of(oldest)
            .expect("FIFO queue tracks a page that is not resident")
    }
}
