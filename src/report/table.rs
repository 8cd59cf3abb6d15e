//! Fixed-width rendering of the report.

use crate::report::metrics::StageMetrics;
use crate::report::stage::Stage;

/// Render the report as a header line plus one line per stage.
///
/// Columns are left-aligned in fixed-width fields: name 15, time 15 in the
/// header and 17 in the rows, relative and absolute speedup 10/12, GFLOPS 10,
/// peak percentage 15. The time column shows the stored value verbatim; the
/// derived columns print with two decimals. The first stage has no previous
/// stage to compare to, so its relative speedup renders as `-`.
///
/// # Panics
///
/// Panics if `stages` and `metrics` have different lengths.
pub fn render_table(stages: &[Stage], metrics: &[StageMetrics]) -> String {
    assert_eq!(stages.len(), metrics.len(), "one metrics row per stage");

    let mut out = String::new();
    out.push_str(&format!(
        "{:<15}{:<15}{:<10}{:<10}{:<10}{:<15}\n",
        "Stage", "Time (s)", "Rel. x", "Abs. x", "GFLOPS", "Peak (%)"
    ));

    for (stage, m) in stages.iter().zip(metrics) {
        let relative = match m.relative_speedup {
            Some(r) => format!("{:.2}", r),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "{:<15}{:<17}{:<12}{:<12}{:<10}{:<15}\n",
            stage.name,
            m.seconds,
            relative,
            format!("{:.2}", m.absolute_speedup),
            format!("{:.2}", m.gflops),
            format!("{:.2}", m.peak_percent)
        ));
    }

    out
}
