//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The first two variants are input-validation errors: they are detected
/// before any policy runs and are meant to be shown to the user verbatim.
/// `FrameSetFull` is different — it signals a policy-engine bug (a placement
/// that should have gone through the eviction path) and is never expected
/// in correct operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The reference string contained no pages.
    #[error("page reference string must contain at least one page")]
    EmptyReferenceString,

    /// The requested frame count was not a positive integer.
    #[error("frame count must be positive, got {0}")]
    InvalidFrameCount(usize),

    /// Attempted to place a page into a frame set with no empty slot.
    #[error("no empty slot in frame set of capacity {capacity}")]
    FrameSetFull {
        /// Capacity of the frame set the placement was attempted on.
        capacity: usize,
    },
}
