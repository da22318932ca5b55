//! The simulation driver.
//!
//! [`simulate`] runs one policy over a reference string; [`compare_all`]
//! runs all three over the same input. Each run owns an independent
//! [`FrameSet`] and replacer, so runs never share mutable state and repeated
//! runs on the same input produce identical results.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId, Result};
use crate::sim::replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};
use crate::sim::{AccessKind, FrameSet, RunSummary, StepRecord, TraceRecorder};

/// The three supported replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First-in-first-out.
    Fifo,
    /// Least recently used.
    Lru,
    /// Bélády's optimal (farthest next use).
    Optimal,
}

impl PolicyKind {
    /// All policies, in the order they are reported.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    /// Human-readable policy name.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        }
    }

    /// Build a fresh replacer for this policy.
    fn build(self) -> Box<dyn Replacer> {
        match self {
            PolicyKind::Fifo => Box::new(FifoReplacer::new()),
            PolicyKind::Lru => Box::new(LruReplacer::new()),
            PolicyKind::Optimal => Box::new(OptimalReplacer::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" => Ok(PolicyKind::Optimal),
            other => Err(format!("unknown policy: {other}")),
        }
    }
}

/// Everything one policy run produces.
///
/// Holds structured data only; rendering is the caller's concern (see
/// [`report`](crate::report)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Which policy produced this run.
    pub policy: PolicyKind,
    /// Number of references classified as faults.
    pub fault_count: usize,
    /// One record per reference, in order.
    pub steps: Vec<StepRecord>,
    /// Frame-set snapshot after each step, in order.
    pub frame_history: Vec<FrameSet>,
}

impl SimulationResult {
    /// Number of references classified as hits.
    pub fn hit_count(&self) -> usize {
        self.steps.len() - self.fault_count
    }

    /// Aggregate counts for this run.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            policy: self.policy,
            fault_count: self.fault_count,
            hit_count: self.hit_count(),
        }
    }

    /// Frame occupancy after the final reference.
    ///
    /// # Panics
    /// Panics if the run is empty, which [`simulate`] rules out by rejecting
    /// empty reference strings.
    pub fn final_frames(&self) -> &FrameSet {
        self.frame_history
            .last()
            .expect("a completed run has at least one step")
    }
}

/// Check the input contract: a non-empty reference string and a positive
/// frame count.
fn validate(reference_string: &[PageId], frame_count: usize) -> Result<()> {
    if reference_string.is_empty() {
        return Err(Error::EmptyReferenceString);
    }
    if frame_count == 0 {
        return Err(Error::InvalidFrameCount(frame_count));
    }
    Ok(())
}

/// Run `policy` over `reference_string` with `frame_count` frames.
///
/// # Errors
/// - [`Error::EmptyReferenceString`] if the reference string is empty
/// - [`Error::InvalidFrameCount`] if `frame_count` is 0
///
/// Both are detected before the run starts; a returned result always covers
/// the full reference string.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageId, PolicyKind};
///
/// let refs: Vec<PageId> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
///     .into_iter()
///     .map(PageId::new)
///     .collect();
/// let result = simulate(PolicyKind::Fifo, &refs, 3).unwrap();
/// assert_eq!(result.fault_count, 9);
/// ```
pub fn simulate(
    policy: PolicyKind,
    reference_string: &[PageId],
    frame_count: usize,
) -> Result<SimulationResult> {
    validate(reference_string, frame_count)?;

    let mut replacer = policy.build();
    run(policy, replacer.as_mut(), reference_string, frame_count)
}

/// The per-reference fold shared by all three policies.
fn run(
    policy: PolicyKind,
    replacer: &mut dyn Replacer,
    reference_string: &[PageId],
    frame_count: usize,
) -> Result<SimulationResult> {
    let mut frames = FrameSet::new(frame_count);
    let mut recorder = TraceRecorder::with_capacity(reference_string.len());

    for (position, &page) in reference_string.iter().enumerate() {
        let kind = if frames.contains(page) {
            replacer.record_hit(page);
            AccessKind::Hit
        } else {
            if frames.is_full() {
                let victim = replacer.select_victim(&frames, reference_string, position);
                frames.replace_at(victim, page);
            } else {
                let _ = frames.place_in_first_empty(page)?;
            }
            replacer.record_insert(page);
            AccessKind::Fault
        };
        recorder.record(position + 1, page, &frames, kind);
    }

    let fault_count = recorder.fault_count();
    let (steps, frame_history) = recorder.into_parts();
    Ok(SimulationResult {
        policy,
        fault_count,
        steps,
        frame_history,
    })
}

/// Results of running every policy over the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// The FIFO run.
    pub fifo: SimulationResult,
    /// The LRU run.
    pub lru: SimulationResult,
    /// The Optimal run.
    pub optimal: SimulationResult,
}

impl Comparison {
    /// The three runs in reporting order (FIFO, LRU, Optimal).
    pub fn results(&self) -> [&SimulationResult; 3] {
        [&self.fifo, &self.lru, &self.optimal]
    }

    /// Per-policy aggregate counts, in reporting order.
    pub fn summaries(&self) -> [RunSummary; 3] {
        [
            self.fifo.summary(),
            self.lru.summary(),
            self.optimal.summary(),
        ]
    }

    /// The run with the fewest faults (first in reporting order on ties).
    pub fn fewest_faults(&self) -> &SimulationResult {
        let mut best = &self.fifo;
        for result in [&self.lru, &self.optimal] {
            if result.fault_count < best.fault_count {
                best = result;
            }
        }
        best
    }
}

/// Run FIFO, LRU, and Optimal over the same input.
///
/// Each policy gets its own frame set and replacer; the runs are fully
/// independent and could as well execute in parallel.
///
/// # Errors
/// Same input contract as [`simulate`].
pub fn compare_all(reference_string: &[PageId], frame_count: usize) -> Result<Comparison> {
    Ok(Comparison {
        fifo: simulate(PolicyKind::Fifo, reference_string, frame_count)?,
        lru: simulate(PolicyKind::Lru, reference_string, frame_count)?,
        optimal: simulate(PolicyKind::Optimal, reference_string, frame_count)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(pages: &[u64]) -> Vec<PageId> {
        pages.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_empty_reference_string_is_rejected() {
        let err = simulate(PolicyKind::Fifo, &[], 3).unwrap_err();
        assert_eq!(err, Error::EmptyReferenceString);
    }

    #[test]
    fn test_zero_frame_count_is_rejected() {
        let err = simulate(PolicyKind::Lru, &refs(&[1, 2]), 0).unwrap_err();
        assert_eq!(err, Error::InvalidFrameCount(0));
    }

    #[test]
    fn test_single_reference_faults_once() {
        for policy in PolicyKind::ALL {
            let result = simulate(policy, &refs(&[7]), 2).unwrap();
            assert_eq!(result.fault_count, 1);
            assert_eq!(result.hit_count(), 0);
            assert_eq!(result.steps[0].kind, AccessKind::Fault);
            assert!(result.final_frames().contains(PageId::new(7)));
        }
    }

    #[test]
    fn test_steps_are_one_based_and_ordered() {
        let result = simulate(PolicyKind::Fifo, &refs(&[1, 2, 1]), 2).unwrap();
        let step_indices: Vec<usize> = result.steps.iter().map(|s| s.step).collect();
        assert_eq!(step_indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_history_mirrors_step_snapshots() {
        let result = simulate(PolicyKind::Lru, &refs(&[1, 2, 3, 1]), 2).unwrap();
        assert_eq!(result.frame_history.len(), result.steps.len());
        for (step, snapshot) in result.steps.iter().zip(&result.frame_history) {
            assert_eq!(&step.frames, snapshot);
        }
    }

    #[test]
    fn test_policy_kind_from_str() {
        assert_eq!("fifo".parse::<PolicyKind>().unwrap(), PolicyKind::Fifo);
        assert_eq!("LRU".parse::<PolicyKind>().unwrap(), PolicyKind::Lru);
        assert_eq!("opt".parse::<PolicyKind>().unwrap(), PolicyKind::Optimal);
        assert!("clock".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn test_compare_all_runs_every_policy() {
        let cmp = compare_all(&refs(&[1, 2, 3, 1]), 2).unwrap();
        assert_eq!(cmp.fifo.policy, PolicyKind::Fifo);
        assert_eq!(cmp.lru.policy, PolicyKind::Lru);
        assert_eq!(cmp.optimal.policy, PolicyKind::Optimal);
        for result in cmp.results() {
            assert_eq!(result.steps.len(), 4);
        }
    }

    #[test]
    fn test_fewest_faults_prefers_reporting_order_on_ties() {
        // One frame, no locality: every policy faults on every reference.
        let cmp = compare_all(&refs(&[1, 2, 3]), 1).unwrap();
        assert_eq!(cmp.fewest_faults().policy, PolicyKind::Fifo);
    }
}
