//! The speedup report: stage records, metric derivation, table rendering.
//!
//! The input is the fixed table of timings measured for the six stages of
//! the exercise, transcribed from separate runs (the interpreted baseline and
//! the natively-built variants are timed outside this crate). Derivation is a
//! pure function of that table, the problem size, and the two peak-throughput
//! constants — compute it twice, get the same rows.

pub mod metrics;
pub mod stage;
pub mod table;

pub use metrics::{StageMetrics, compute_metrics, round2};
pub use stage::{N, PEAKS, PeakTier, Peaks, STAGES, Stage};
pub use table::render_table;
