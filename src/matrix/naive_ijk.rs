/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop, and it is the kernel the whole exercise
/// starts from: outer loop over rows i, middle loop over columns j, inner
/// accumulation over k. The order is the point — the innermost loop walks B
/// down a column (stride n), missing cache on every step, which is exactly
/// what the later stages fix. Keep it as written; do not let "cleanups"
/// reorder the loops.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Matrix dimension
///
/// # Panics
///
/// Panics if any slice is shorter than n².
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    assert!(a.len() >= n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert!(b.len() >= n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert!(c.len() >= n * n, "C: expected {}x{}={} elements", n, n, n * n);

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}
