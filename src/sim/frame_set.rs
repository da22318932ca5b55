//! FrameSet - the fixed set of physical memory frames.
//!
//! A [`FrameSet`] is an ordered, fixed-capacity array of slots, each holding
//! a resident [`PageId`] or nothing. It knows which pages are resident and
//! where, but holds no eviction policy — replacers decide *which* slot is
//! overwritten; the frame set only carries the operation out.

use std::fmt;

use crate::common::{Error, FrameId, PageId, Result};

/// A fixed-capacity ordered set of frame slots.
///
/// Slot positions carry no meaning beyond being addressable: FIFO and LRU
/// use them only to mirror which physical slot a victim occupied, Optimal
/// uses them as its deterministic tie-break order.
///
/// # Invariants
/// - The slot count never changes after construction.
/// - At most `capacity` pages are resident at any time.
///
/// # Example
/// ```
/// use pagesim::{FrameSet, PageId};
///
/// let mut frames = FrameSet::new(3);
/// frames.place_in_first_empty(PageId::new(7)).unwrap();
/// assert!(frames.contains(PageId::new(7)));
/// assert_eq!(frames.resident_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    /// One slot per physical frame; `None` marks an empty slot.
    slots: Vec<Option<PageId>>,
}

impl FrameSet {
    /// Create a frame set with `capacity` empty slots.
    ///
    /// # Panics
    /// Panics if `capacity` is 0. Callers going through
    /// [`simulate`](crate::sim::simulate) have the frame count validated
    /// before any frame set is built.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "frame capacity must be > 0");
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of slots (fixed for the lifetime of the set).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently holding a page.
    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check whether every slot holds a page.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Check whether `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&Some(page))
    }

    /// Find the slot holding `page`, if it is resident.
    pub fn index_of(&self, page: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|&slot| slot == Some(page))
            .map(FrameId::new)
    }

    /// Find the first empty slot, if any.
    pub fn first_empty(&self) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| slot.is_none())
            .map(FrameId::new)
    }

    /// Place `page` into the first empty slot and return that slot.
    ///
    /// # Errors
    /// Returns [`Error::FrameSetFull`] if no slot is empty. Reaching that
    /// error means a policy engine skipped the eviction path; it is a bug,
    /// not a condition to retry.
    pub fn place_in_first_empty(&mut self, page: PageId) -> Result<FrameId> {
        match self.first_empty() {
            Some(slot) => {
                self.slots[slot.0] = Some(page);
                Ok(slot)
            }
            None => Err(Error::FrameSetFull {
                capacity: self.capacity(),
            }),
        }
    }

    /// Overwrite `slot` with `page` unconditionally.
    #[inline]
    pub fn replace_at(&mut self, slot: FrameId, page: PageId) {
        self.slots[slot.0] = Some(page);
    }

    /// The page resident in `slot`, or `None` if the slot is empty.
    #[inline]
    pub fn get(&self, slot: FrameId) -> Option<PageId> {
        self.slots[slot.0]
    }

    /// All slots in order.
    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }
}

impl fmt::Display for FrameSet {
    /// Renders as `[1, 2, -]`, empty slots shown as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(page) => write!(f, "{}", page)?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}
