//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - evicts by arrival order
//! - [`LruReplacer`] - evicts by recency of reference
//! - [`OptimalReplacer`] - evicts by farthest next use (Bélády)
//!
//! Each replacer keeps only the bookkeeping its policy needs; the frame set
//! itself and the step-by-step drive live with
//! [`simulate`](crate::sim::simulate).

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::{FrameId, PageId};
use crate::sim::FrameSet;

/// A page-replacement policy.
///
/// The simulation driver resolves residency and cold placement itself and
/// calls the replacer at three points:
/// - [`record_hit`](Replacer::record_hit) when the referenced page was
///   resident,
/// - [`record_insert`](Replacer::record_insert) after a faulted page was
///   placed (into an empty slot or over a victim),
/// - [`select_victim`](Replacer::select_victim) when a fault finds no empty
///   slot.
pub trait Replacer {
    /// Note that `page` was referenced while resident.
    fn record_hit(&mut self, page: PageId);

    /// Note that `page` was placed into the frame set.
    fn record_insert(&mut self, page: PageId);

    /// Choose the slot whose page should be evicted.
    ///
    /// Only called when `frames` is full. `position` is the 0-based index of
    /// the current reference within `reference_string`; only the Optimal
    /// policy looks at either.
    fn select_victim(
        &mut self,
        frames: &FrameSet,
        reference_string: &[PageId],
        position: usize,
    ) -> FrameId;
}
