//! Time one run of the naive triple-loop product at the exercise size.
//!
//! Prints a single line, `<label>: <elapsed> s`, to be transcribed into the
//! stage table by hand. No arguments, no configuration.

use matmul_lab::matrix::{matmul_naive_ijk, random_square};
use matmul_lab::report::N;
use std::time::Instant;

fn main() {
    let a = random_square(N);
    let b = random_square(N);
    let mut c = vec![0.0f64; N * N];

    let start = Instant::now();
    matmul_naive_ijk(&a, &b, &mut c, N);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Naive (i-j-k): {} s", elapsed);
}
