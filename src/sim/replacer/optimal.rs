//! Optimal (Bélády) replacement policy.

use crate::common::{FrameId, PageId};
use crate::sim::replacer::Replacer;
use crate::sim::FrameSet;

/// Evicts the resident page whose next use lies farthest in the future.
///
/// Keeps no state across steps: every eviction rescans the remaining
/// reference suffix for each resident page. A page that never recurs gets
/// distance = suffix length, which outranks every real occurrence.
///
/// Tie-break: when several resident pages share the maximum distance (most
/// commonly, several pages that are never used again), the one in the
/// lowest-numbered slot is evicted. The theoretical optimum leaves this
/// unspecified; fixing it keeps runs reproducible.
///
/// This policy needs lookahead over the full remaining reference string,
/// which FIFO and LRU never do. It is the provable lower bound on fault
/// count for a fixed frame count and serves as the comparison baseline.
#[derive(Debug, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    /// Create a new Optimal replacer.
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for OptimalReplacer {
    fn record_hit(&mut self, _page: PageId) {}

    fn record_insert(&mut self, _page: PageId) {}

    fn select_victim(
        &mut self,
        frames: &FrameSet,
        reference_string: &[PageId],
        position: usize,
    ) -> FrameId {
        let future = &reference_string[position + 1..];

        let mut victim = FrameId::new(0);
        let mut max_distance = None;
        for (slot, &resident) in frames.slots().iter().enumerate() {
            let page = resident.expect("select_victim called on a non-full frame set");
            let distance = future
                .iter()
                .position(|&p| p == page)
                .unwrap_or(future.len());
            // Strict comparison keeps the lowest slot on ties.
            if max_distance.map_or(true, |d| distance > d) {
                max_distance = Some(distance);
                victim = FrameId::new(slot);
            }
        }
        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_frames(pages: &[u64]) -> FrameSet {
        let mut frames = FrameSet::new(pages.len());
        for &p in pages {
            frames.place_in_first_empty(PageId::new(p)).unwrap();
        }
        frames
    }

    fn refs(pages: &[u64]) -> Vec<PageId> {
        pages.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_evicts_farthest_next_use() {
        let mut replacer = OptimalReplacer::new();
        let frames = full_frames(&[1, 2, 3]);
        // At position 0, next uses: 1 -> 1, 2 -> 2, 3 -> 3.
        let reference_string = refs(&[4, 1, 2, 3]);

        let victim = replacer.select_victim(&frames, &reference_string, 0);
        assert_eq!(victim, FrameId::new(2));
    }

    #[test]
    fn test_never_used_again_outranks_any_real_occurrence() {
        let mut replacer = OptimalReplacer::new();
        let frames = full_frames(&[1, 2, 3]);
        // Page 2 never recurs; 1 and 3 both do.
        let reference_string = refs(&[4, 3, 1, 3, 1]);

        let victim = replacer.select_victim(&frames, &reference_string, 0);
        assert_eq!(victim, FrameId::new(1));
    }

    #[test]
    fn test_tie_breaks_to_lowest_slot() {
        let mut replacer = OptimalReplacer::new();
        let frames = full_frames(&[1, 2, 3]);
        // Only page 3 recurs; 1 and 2 are tied at "never again".
        let reference_string = refs(&[4, 3]);

        let victim = replacer.select_victim(&frames, &reference_string, 0);
        assert_eq!(victim, FrameId::new(0));
    }

    #[test]
    fn test_last_reference_evicts_lowest_slot() {
        let mut replacer = OptimalReplacer::new();
        let frames = full_frames(&[1, 2]);
        // Empty suffix: every resident page is tied.
        let reference_string = refs(&[5]);

        let victim = replacer.select_victim(&frames, &reference_string, 0);
        assert_eq!(victim, FrameId::new(0));
    }
}
