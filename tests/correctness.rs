use matmul_lab::matrix::{matmul_naive_ijk, matmul_naive_ikj, matmul_unrolled, random_square};

fn assert_matrices_equal(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            (expected[i] - actual[i]).abs() < 1e-9,
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

// ============================================================
// Exact small cases
// ============================================================

#[test]
fn test_2x2_known_product() {
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![5.0, 6.0, 7.0, 8.0];

    let mut c = vec![0.0; 4];
    matmul_naive_ijk(&a, &b, &mut c, 2);

    assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn test_identity_is_noop() {
    let n = 5;
    let a = random_square(n);
    let mut identity = vec![0.0; n * n];
    for i in 0..n {
        identity[i * n + i] = 1.0;
    }

    let mut c = vec![0.0; n * n];
    matmul_naive_ijk(&a, &identity, &mut c, n);

    assert_matrices_equal(&a, &c, "A * I");
}

// ============================================================
// Kernel cross-checks (all orders compute the same product)
// ============================================================

#[test]
fn test_ikj_matches_ijk() {
    for n in [1, 2, 3, 7, 16, 33, 64] {
        let a = random_square(n);
        let b = random_square(n);

        let mut c_ijk = vec![0.0; n * n];
        let mut c_ikj = vec![0.0; n * n];

        matmul_naive_ijk(&a, &b, &mut c_ijk, n);
        matmul_naive_ikj(&a, &b, &mut c_ikj, n);

        assert_matrices_equal(&c_ijk, &c_ikj, &format!("ikj_n_{}", n));
    }
}

#[test]
fn test_unrolled_matches_ijk() {
    // Sizes straddling the unroll factor, including tails of 1..3.
    for n in [1, 3, 4, 5, 6, 7, 8, 15, 16, 17, 64] {
        let a = random_square(n);
        let b = random_square(n);

        let mut c_ijk = vec![0.0; n * n];
        let mut c_unr = vec![0.0; n * n];

        matmul_naive_ijk(&a, &b, &mut c_ijk, n);
        matmul_unrolled(&a, &b, &mut c_unr, n);

        assert_matrices_equal(&c_ijk, &c_unr, &format!("unrolled_n_{}", n));
    }
}

// ============================================================
// Accumulation (C += A*B, not C = A*B)
// ============================================================

#[test]
fn test_accumulation() {
    let n = 16;
    let a = random_square(n);
    let b = random_square(n);

    let mut c_once = vec![0.0; n * n];
    matmul_naive_ijk(&a, &b, &mut c_once, n);

    // Running twice into the same C should double every entry.
    let mut c_twice = vec![0.0; n * n];
    matmul_naive_ijk(&a, &b, &mut c_twice, n);
    matmul_naive_ijk(&a, &b, &mut c_twice, n);

    let doubled: Vec<f64> = c_once.iter().map(|x| 2.0 * x).collect();
    assert_matrices_equal(&doubled, &c_twice, "accumulation");
}

// ============================================================
// Initialization
// ============================================================

#[test]
fn test_random_square_range_and_shape() {
    let n = 32;
    let m = random_square(n);
    assert_eq!(m.len(), n * n);
    assert!(m.iter().all(|&x| (0.0..1.0).contains(&x)));
}
