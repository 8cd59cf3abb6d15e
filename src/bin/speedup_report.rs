//! Print the six-stage speedup report from the measured timings.

use matmul_lab::report::{N, PEAKS, STAGES, compute_metrics, render_table};

fn main() {
    let metrics = compute_metrics(&STAGES, N, PEAKS);
    print!("{}", render_table(&STAGES, &metrics));
}
