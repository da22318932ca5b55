//! Text rendering for simulation results.
//!
//! Everything here consumes the structured records produced by the core and
//! turns them into fixed-width text. The core never calls back into this
//! module; any other renderer (charts, JSON) can sit on the same data.

use std::fmt::Write;

use crate::sim::{Comparison, SimulationResult};

/// Render a run's step trace as a fixed-width table.
///
/// ```text
/// Step | Page | Frames           | Result
/// ----------------------------------------
/// 1    | 1    | [1, -, -]        | Fault
/// 2    | 2    | [1, 2, -]        | Fault
/// ```
pub fn render_trace(result: &SimulationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<4} | {:<4} | {:<16} | Result", "Step", "Page", "Frames");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for step in &result.steps {
        let _ = writeln!(
            out,
            "{:<4} | {:<4} | {:<16} | {}",
            step.step,
            step.page.to_string(),
            step.frames.to_string(),
            step.kind
        );
    }
    out
}

/// Render a run's aggregate counts as a one-line readout.
pub fn render_summary(result: &SimulationResult) -> String {
    let summary = result.summary();
    format!(
        "Total page faults: {} | Hit ratio: {:.2}%",
        summary.fault_count,
        summary.hit_rate() * 100.0
    )
}

/// Render a compare-all report: one summary line per policy, then the winner.
pub fn render_comparison(cmp: &Comparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Comparison of algorithms:");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for summary in cmp.summaries() {
        let _ = writeln!(
            out,
            "{:<8}: {} faults, hit rate {:.2}%",
            summary.policy.name(),
            summary.fault_count,
            summary.hit_rate() * 100.0
        );
    }
    let best = cmp.fewest_faults();
    let _ = writeln!(out, "Fewest faults: {} ({})", best.policy, best.fault_count);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;
    use crate::sim::{compare_all, simulate, PolicyKind};

    fn refs(pages: &[u64]) -> Vec<PageId> {
        pages.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_render_trace_rows() {
        let result = simulate(PolicyKind::Fifo, &refs(&[1, 2, 1]), 3).unwrap();
        let text = render_trace(&result);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Step | Page | Frames           | Result");
        assert_eq!(lines[1], "-".repeat(40));
        assert_eq!(lines[2], "1    | 1    | [1, -, -]        | Fault");
        assert_eq!(lines[3], "2    | 2    | [1, 2, -]        | Fault");
        assert_eq!(lines[4], "3    | 1    | [1, 2, -]        | Hit");
    }

    #[test]
    fn test_render_summary() {
        let result = simulate(PolicyKind::Lru, &refs(&[1, 1, 1, 1]), 1).unwrap();
        assert_eq!(
            render_summary(&result),
            "Total page faults: 1 | Hit ratio: 75.00%"
        );
    }

    #[test]
    fn test_render_comparison_lists_every_policy() {
        let cmp = compare_all(&refs(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]), 3).unwrap();
        let text = render_comparison(&cmp);

        assert!(text.contains("FIFO    : 9 faults"));
        assert!(text.contains("LRU     : 10 faults"));
        assert!(text.contains("Optimal : 7 faults"));
        assert!(text.contains("Fewest faults: Optimal (7)"));
    }
}
