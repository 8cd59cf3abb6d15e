//! Per-stage metric derivation.

use crate::report::stage::{Peaks, Stage};

/// Metrics derived for one stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageMetrics {
    /// Elapsed time, copied unrounded from the stage record.
    pub seconds: f64,
    /// Previous stage's time over this one; `None` for the first stage.
    pub relative_speedup: Option<f64>,
    /// First stage's time over this one.
    pub absolute_speedup: f64,
    /// Achieved rate, `2n³ / (t · 10⁹)`.
    pub gflops: f64,
    /// Achieved rate as a percentage of the stage's applicable peak.
    pub peak_percent: f64,
}

/// Round to two decimal places, half away from zero.
///
/// Note this rounds the binary double, not the decimal literal: 0.125 is
/// exact and goes up to 0.13, but 1.005 is stored as 1.00499… and comes
/// out as 1.0.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Derive metrics for an ordered stage table.
///
/// Pure function of its inputs; all ratios are rounded to two decimals.
/// The peak percentage is computed from the *rounded* GFLOPS value — that is
/// how the exercise's reference tables were produced, and changing it would
/// shift the published numbers in the last decimal.
pub fn compute_metrics(stages: &[Stage], n: usize, peaks: Peaks) -> Vec<StageMetrics> {
    let Some(first) = stages.first() else {
        return Vec::new();
    };

    let flops = 2.0 * (n * n * n) as f64;
    let mut out = Vec::with_capacity(stages.len());

    for (idx, stage) in stages.iter().enumerate() {
        let t = stage.seconds;
        let relative_speedup = if idx == 0 {
            None
        } else {
            Some(round2(stages[idx - 1].seconds / t))
        };
        let gflops = round2(flops / (t * 1e9));

        out.push(StageMetrics {
            seconds: t,
            relative_speedup,
            absolute_speedup: round2(first.seconds / t),
            gflops,
            peak_percent: round2(gflops / peaks.for_tier(stage.tier) * 100.0),
        });
    }

    out
}
