//! pagesim - a page-replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                         pagesim                           │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │        Presentation (report/, bin/pagesim)          │  │
//! │  │     input parsing → text tables → summaries         │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                            ↓                              │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │            Simulation core (sim/)                   │  │
//! │  │  ┌───────────────────────────────────────────────┐  │  │
//! │  │  │   Eviction policies: FIFO | LRU | Optimal     │  │  │
//! │  │  └───────────────────────────────────────────────┘  │  │
//! │  │     FrameSet + TraceRecorder + RunSummary           │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The core is a pure, single-threaded fold over the reference string: each
//! run owns its frame set and policy state, returns structured step records,
//! and holds no reference to any renderer.
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error)
//! - [`sim`] - Frame set, policy engines, trace recording, drivers
//! - [`report`] - Text rendering over the structured trace
//!
//! # Quick Start
//! ```
//! use pagesim::{compare_all, simulate, PageId, PolicyKind};
//!
//! let refs: Vec<PageId> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
//!     .into_iter()
//!     .map(PageId::new)
//!     .collect();
//!
//! let fifo = simulate(PolicyKind::Fifo, &refs, 3).unwrap();
//! assert_eq!(fifo.fault_count, 9);
//!
//! let cmp = compare_all(&refs, 3).unwrap();
//! assert_eq!(cmp.optimal.fault_count, 7);
//! ```

pub mod common;
pub mod report;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, PageId, Result};

pub use sim::replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};
pub use sim::{
    compare_all, simulate, AccessKind, Comparison, FrameSet, PolicyKind, RunSummary,
    SimulationResult, StepRecord, TraceRecorder,
};
