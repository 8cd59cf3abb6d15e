use rand::Rng;

/// n×n matrix of independent uniform values in [0, 1), row-major.
///
/// Matches what the exercise uses for inputs at every stage, so timings are
/// taken over the same distribution regardless of language.
pub fn random_square(n: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..n * n).map(|_| rng.random::<f64>()).collect()
}
