//! Uniformity check for sampled positions
//!
//! Positions drawn by [crate::sampler::sample] should be spread evenly over
//! the population. Pooling positions from many samples and running a
//! one-sample Kolmogorov-Smirnov test against the uniform distribution gives a
//! p-value that can be compared with a threshold e.g. `1%`:
//! ```
//! # use bounded_sample::uniformity::*;
//! # fn main() -> Result<(), UniformityError> {
//! let positions: Vec<usize> = (0..100).collect();
//!
//! let res = ks_uniform_positions(&positions, 100)?;
//! assert!(res.p_value() > 0.01);
//! # Ok(())}
//! ```
//!
use std::f64::consts::PI;
use thiserror::Error;

///
/// Error raised by the uniformity check
///
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UniformityError {
    #[error("No positions to test")]
    Empty,
    #[error("Population must not be empty")]
    EmptyPopulation,
    #[error("Position {position} outside population of size {population}")]
    OutOfRange { position: usize, population: usize },
}

/// Result of the Kolmogorov-Smirnov test
///
/// Holds the value of the statistic, the number of samples it was computed
/// from and the associated p-value.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    stat: f64,
    p: f64,
    n: f64,
}

impl TestResult {
    /// Complement of the asymptotic Kolmogorov CDF: `Q(z) = 1 - CDF(z)`
    ///
    /// Two power series as in "Numerical Recipes" by Press et al. (2007),
    /// switching at `z = 1.18`.
    ///
    fn complement_ks_cdf(z: f64) -> f64 {
        if z <= 0.0 {
            1.0
        } else if z < 1.18 {
            let factor = f64::sqrt(2.0 * PI) / z;
            let term = f64::exp(-PI * PI / 8. / (z * z));
            1.0 - factor * (term + term.powi(9) + term.powi(25) + term.powi(49))
        } else {
            let term = f64::exp(-2.0 * z * z);
            2.0 * (term - term.powi(4) + term.powi(9))
        }
    }

    fn new_ks(stat: f64, n: f64) -> Self {
        let sqrt_n = f64::sqrt(n);
        let arg = sqrt_n + 0.12 + 0.11 / sqrt_n;
        let p = Self::complement_ks_cdf(arg * stat);
        Self { stat, p, n }
    }

    /// Probability of a statistic at least this large if positions are uniform
    pub fn p_value(&self) -> f64 {
        self.p
    }

    pub fn stat(&self) -> f64 {
        self.stat
    }

    /// Number of positions the statistic was computed from
    pub fn n(&self) -> f64 {
        self.n
    }
}

///
/// One-sample Kolmogorov-Smirnov test of positions against a uniform population
///
/// Position `p` is placed at the midpoint `(p + 0.5) / population` of its cell
/// in `[0, 1]`. The statistic is the largest distance between the empirical
/// CDF (on both sides of each step) and the identity.
///
/// # Errors
/// - `positions` is empty
/// - `population` is zero
/// - any position is not smaller than `population`
///
pub fn ks_uniform_positions(
    positions: &[usize],
    population: usize,
) -> Result<TestResult, UniformityError> {
    if positions.is_empty() {
        return Err(UniformityError::Empty);
    } else if population == 0 {
        return Err(UniformityError::EmptyPopulation);
    }
    if let Some(&position) = positions.iter().find(|p| **p >= population) {
        return Err(UniformityError::OutOfRange {
            position,
            population,
        });
    }

    let mut sorted = positions.to_vec();
    sorted.sort_unstable();

    let n = sorted.len() as f64;
    let mut stat = 0.0f64;

    for (i, p) in sorted.iter().enumerate() {
        let u = (*p as f64 + 0.5) / population as f64;
        let above = (i + 1) as f64 / n - u;
        let below = u - i as f64 / n;
        stat = stat.max(above).max(below);
    }

    Ok(TestResult::new_ks(stat, n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::sample;
    use crate::sequence::driving_sequence;
    use approx::assert_relative_eq;
    use rand::SeedableRng;

    #[test]
    fn test_ks_cdf_complement() {
        assert_eq!(1.0, TestResult::complement_ks_cdf(0.0));
        // Both series should agree around the switching point
        let lhs = TestResult::complement_ks_cdf(1.18 - 1e-9);
        let rhs = TestResult::complement_ks_cdf(1.18);
        assert_relative_eq!(lhs, rhs, max_relative = 1.0e-6);
        // Critical value for 5% significance
        assert_relative_eq!(
            0.05,
            TestResult::complement_ks_cdf(1.3581),
            epsilon = 1.0e-4
        );
    }

    #[test]
    fn test_statistic() {
        let res = ks_uniform_positions(&[0, 1, 2, 3], 4).unwrap();
        assert_relative_eq!(0.125, res.stat());
        assert_eq!(4.0, res.n());

        let res = ks_uniform_positions(&[2, 0, 3, 1], 4).unwrap();
        assert_relative_eq!(0.125, res.stat());

        let res = ks_uniform_positions(&[0, 0, 0, 0], 4).unwrap();
        assert_relative_eq!(0.875, res.stat());

        // Repeated positions still count towards the sample size
        let res = ks_uniform_positions(&[1, 1, 3], 4).unwrap();
        assert_eq!(3.0, res.n());
    }

    #[test]
    fn test_sampler_is_uniform() {
        let seq = driving_sequence(500).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(87674);

        let positions = (0..200)
            .flat_map(|_| sample(&mut rng, &seq, 12).unwrap().positions().to_vec())
            .collect::<Vec<_>>();

        let res = ks_uniform_positions(&positions, seq.len()).unwrap();

        // Print the test results in case of a failure
        println!("{:?}", res);
        assert!(res.p_value() > 0.01)
    }

    #[test]
    fn test_detects_skewed_positions() {
        let positions = (0..250).collect::<Vec<_>>();
        let res = ks_uniform_positions(&positions, 500).unwrap();
        assert!(res.p_value() < 1.0e-6, "{:?}", res);
    }

    #[test]
    fn test_errors() {
        assert_eq!(Err(UniformityError::Empty), ks_uniform_positions(&[], 10));
        assert_eq!(
            Err(UniformityError::EmptyPopulation),
            ks_uniform_positions(&[0], 0)
        );
        assert_eq!(
            Err(UniformityError::OutOfRange {
                position: 10,
                population: 10
            }),
            ks_uniform_positions(&[1, 10], 10)
        );
    }
}
