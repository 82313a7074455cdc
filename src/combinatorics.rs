//! Binomial coefficients, Pascal's triangle, and factorials.
//!
//! Exact integer machinery shared by the random-walk and Poisson
//! kernels. Sized for classroom inputs (rows and trial counts in the
//! tens), not for asymptotic work.

/// Exact binomial coefficient `C(n, k)` via the multiplicative scheme.
///
/// Returns 0 when `k > n`. Exact as long as the result fits in `u64`
/// (comfortably true for the demo-scale `n` used here).
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 1..=k {
        // Multiply before dividing; the running product is always divisible.
        result = result * (n - k + i) / i;
    }
    result
}

/// Binomial probability `C(n, k) p^k (1-p)^(n-k)`.
pub fn binomial_pmf(n: u64, k: u64, p: f64) -> f64 {
    binomial(n, k) as f64 * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32)
}

/// Factorial as a float, for probability mass denominators.
///
/// Overflows to infinity past `k ≈ 170`, which is far beyond the event
/// counts a Poisson demo produces.
pub fn factorial(k: u64) -> f64 {
    (1..=k).map(|i| i as f64).product()
}

/// The first `rows` rows of Pascal's triangle.
///
/// Row `r` contains `C(r, 0) ..= C(r, r)`.
pub fn pascal_triangle(rows: usize) -> Vec<Vec<u64>> {
    (0..rows as u64)
        .map(|r| (0..=r).map(|k| binomial(r, k)).collect())
        .collect()
}

/// Sums along the shallow diagonals of Pascal's triangle.
///
/// The diagonal starting at row `r` walks up-and-right (`r-1, c+1`, ...);
/// the resulting sums reproduce the Fibonacci sequence.
pub fn diagonal_sums(triangle: &[Vec<u64>]) -> Vec<u64> {
    (0..triangle.len())
        .map(|start| {
            let mut sum = 0;
            let mut row = start as i64;
            let mut col = 0usize;
            while row >= 0 && col <= row as usize {
                sum += triangle[row as usize][col];
                row -= 1;
                col += 1;
            }
            sum
        })
        .collect()
}
