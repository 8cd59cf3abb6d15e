//! Classroom matrix-multiplication benchmark.
//!
//! This crate packages a small teaching exercise: how much faster does an
//! N×N matrix product get as you walk through the classic optimization
//! stages? An interpreted baseline, a native compile, a loop reorder,
//! compiler optimization, loop unrolling, and finally a vendor BLAS.
//!
//! Two binaries, deliberately independent:
//!
//! - `time-naive` runs the textbook triple-loop product on random 256×256
//!   matrices and prints the elapsed wall-clock time. This is the kernel you
//!   re-measure after each optimization step.
//! - `speedup-report` takes the six timings measured for the exercise
//!   (hard-coded, transcribed from separate runs) and derives speedups,
//!   achieved GFLOPS, and percent of theoretical peak for each stage.
//!
//! ## Usage
//!
//! ```
//! use matmul_lab::matrix::{matmul_naive_ijk, random_square};
//!
//! let n = 8;
//! let a = random_square(n);
//! let b = random_square(n);
//! let mut c = vec![0.0f64; n * n];
//!
//! matmul_naive_ijk(&a, &b, &mut c, n);
//! ```
//!
//! ## What's inside
//!
//! - The naive i-j-k kernel (the timed baseline), plus the i-k-j reorder and
//!   a 4-way unrolled variant from the later stages of the exercise
//! - The stage table and metric derivation behind the report
//! - A criterion bench comparing the kernels

pub mod matrix;
pub mod report;

pub use matrix::matmul_naive_ijk;
pub use report::{Stage, StageMetrics, compute_metrics, render_table};
