//! The eviction simulation core.
//!
//! Drives a page reference string through a fixed set of frames under one of
//! three replacement policies, producing a per-step trace and fault counts.
//!
//! # Components
//! - [`FrameSet`] - the fixed set of frame slots
//! - [`replacer`] - the policy engines (FIFO, LRU, Optimal)
//! - [`TraceRecorder`] / [`StepRecord`] - per-step trace capture
//! - [`simulate`] / [`compare_all`] - the drivers
//! - [`RunSummary`] - aggregate counts per run

mod frame_set;
pub mod replacer;
mod simulator;
mod summary;
mod trace;

pub use frame_set::FrameSet;
pub use simulator::{compare_all, simulate, Comparison, PolicyKind, SimulationResult};
pub use summary::RunSummary;
pub use trace::{AccessKind, StepRecord, TraceRecorder};
