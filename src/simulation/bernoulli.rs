//! Bernoulli trials, convergence series, and ±1 random walks.
//!
//! One Bernoulli sequence feeds two classroom views: the running
//! success frequency (law of large numbers) and the cumulative ±1 walk
//! with its binomial final-score distribution.

use super::{SimulationError, UniformSource};
use crate::combinatorics::binomial_pmf;

/// Samples `n` Bernoulli trials with success probability `p`.
///
/// `p` outside `[0, 1]` is rejected rather than clamped.
pub fn bernoulli_sequence(
    n: usize,
    p: f64,
    uniforms: &mut UniformSource,
) -> Result<Vec<bool>, SimulationError> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(SimulationError::InvalidProbability { value: p });
    }
    Ok((0..n).map(|_| uniforms.bernoulli(p)).collect())
}

/// Cumulative success frequency after each trial.
///
/// Entry `i` is the fraction of successes among the first `i + 1`
/// trials; the series converges to `p` as the law of large numbers
/// takes hold.
pub fn running_frequency(sequence: &[bool]) -> Vec<f64> {
    let mut successes = 0u64;
    sequence
        .iter()
        .enumerate()
        .map(|(i, &hit)| {
            if hit {
                successes += 1;
            }
            successes as f64 / (i + 1) as f64
        })
        .collect()
}

/// Converts a Bernoulli sequence into a cumulative ±1 random walk.
///
/// Success steps +1, failure steps −1; entry `i` is the score after
/// `i + 1` steps.
pub fn to_random_walk(sequence: &[bool]) -> Vec<i64> {
    let mut score = 0i64;
    sequence
        .iter()
        .map(|&hit| {
            score += if hit { 1 } else { -1 };
            score
        })
        .collect()
}

/// The reachable final scores of an `n`-step walk: `−n..=n` step 2.
///
/// After `n` ±1 steps the score has the parity of `n`, so only every
/// other integer is reachable.
pub fn final_score_bins(n: usize) -> Vec<i64> {
    let n = n as i64;
    (-n..=n).step_by(2).collect()
}

/// Theoretical final-score distribution of an `n`-step walk.
///
/// With `k` successes the score is `S = 2k − n`, so the distribution is
/// the binomial PMF mapped through that change of variable. Returned in
/// the same order as [`final_score_bins`].
pub fn expected_final_scores(n: usize, p: f64) -> Vec<(i64, f64)> {
    (0..=n as u64)
        .map(|k| (2 * k as i64 - n as i64, binomial_pmf(n as u64, k, p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_probability() {
        let mut uniforms = UniformSource::from_seed(1);
        assert!(matches!(
            bernoulli_sequence(10, -0.1, &mut uniforms),
            Err(SimulationError::InvalidProbability { .. })
        ));
        assert!(matches!(
            bernoulli_sequence(10, 1.5, &mut uniforms),
            Err(SimulationError::InvalidProbability { .. })
        ));
        assert!(matches!(
            bernoulli_sequence(10, f64::NAN, &mut uniforms),
            Err(SimulationError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn test_degenerate_sequences() {
        let mut uniforms = UniformSource::from_seed(2);
        assert!(bernoulli_sequence(100, 1.0, &mut uniforms)
            .unwrap()
            .iter()
            .all(|&hit| hit));
        assert!(bernoulli_sequence(100, 0.0, &mut uniforms)
            .unwrap()
            .iter()
            .all(|&hit| !hit));
    }

    #[test]
    fn test_running_frequency_known_sequence() {
        let frequency = running_frequency(&[true, false, true, true]);
        assert_eq!(frequency, vec![1.0, 0.5, 2.0 / 3.0, 0.75]);
    }

    #[test]
    fn test_running_frequency_converges() {
        let mut uniforms = UniformSource::from_seed(314);
        let sequence = bernoulli_sequence(20_000, 0.3, &mut uniforms).unwrap();
        let frequency = running_frequency(&sequence);

        let last = *frequency.last().unwrap();
        assert!((last - 0.3).abs() < 0.02, "converged to {last}");
    }

    #[test]
    fn test_walk_known_sequence() {
        let walk = to_random_walk(&[true, true, false, false, false]);
        assert_eq!(walk, vec![1, 2, 1, 0, -1]);
    }

    #[test]
    fn test_walk_final_score_parity_and_bounds() {
        let n = 51;
        let mut uniforms = UniformSource::from_seed(99);
        for _ in 0..200 {
            let sequence = bernoulli_sequence(n, 0.5, &mut uniforms).unwrap();
            let walk = to_random_walk(&sequence);
            let last = *walk.last().unwrap();

            assert!(last.abs() <= n as i64);
            // Score parity always matches step-count parity
            assert_eq!((last + n as i64) % 2, 0);
        }
    }

    #[test]
    fn test_final_score_bins() {
        assert_eq!(final_score_bins(4), vec![-4, -2, 0, 2, 4]);
        assert_eq!(final_score_bins(3), vec![-3, -1, 1, 3]);
    }

    #[test]
    fn test_expected_scores_form_distribution() {
        let expected = expected_final_scores(20, 0.3);
        assert_eq!(expected.len(), 21);

        let total: f64 = expected.iter().map(|&(_, probability)| probability).sum();
        assert!((total - 1.0).abs() < 1e-12);

        // Scores line up with the reachable bins
        let scores: Vec<i64> = expected.iter().map(|&(score, _)| score).collect();
        assert_eq!(scores, final_score_bins(20));
    }
}
