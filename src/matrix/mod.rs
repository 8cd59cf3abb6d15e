//! Square-matrix kernels and initialization.
//!
//! Every kernel here works on n×n row-major `f64` slices and accumulates
//! (`C += A * B`). The variants correspond to successive stages of the
//! exercise: the naive i-j-k order that gets timed as the baseline, the
//! i-k-j reorder, and the unrolled inner loop.

pub mod naive_ijk;
pub mod naive_ikj;
pub mod random;
pub mod unrolled;

pub use naive_ijk::matmul_naive_ijk;
pub use naive_ikj::matmul_naive_ikj;
pub use random::random_square;
pub use unrolled::matmul_unrolled;
