//! Uniform sampling without replacement
//!
//! Draws a number of distinct positions from a population of values and
//! keeps the positions alongside the selected values:
//! ```
//! # use bounded_sample::sampler::{sample, SampleError};
//! # fn main() -> Result<(), SampleError> {
//! let population = [0.5, 1.0, 1.5, 2.0];
//! let s = sample(&mut rand::thread_rng(), &population, 3)?;
//!
//! for (p, v) in s.positions().iter().zip(s.values()) {
//!     assert_eq!(population[*p], *v);
//! }
//! # Ok(())}
//! ```
//!
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Number of values drawn by the program
pub const DEFAULT_AMOUNT: usize = 12;

///
/// Error raised when a sample cannot be drawn
///
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    #[error("Sample larger than population: {amount} > {population}")]
    AmountTooLarge { amount: usize, population: usize },
}

/// Values selected at distinct positions of a population
///
/// Order of the entries is the order in which they were drawn and carries no
/// further meaning.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    positions: Vec<usize>,
    values: Vec<f64>,
}

impl Sample {
    /// Positions in the population, all distinct
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Selected values, `values()[i]` sits at `positions()[i]`
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Renders the values as a list e.g. `[0.0, 1.0, 1.4142135623730951]`
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}

///
/// Draw `amount` values from `population` uniformly without replacement
///
/// Each subset of `amount` positions is equally likely. Entropy is taken only
/// from `rng`, so a seeded generator reproduces the sample.
///
/// # Errors
/// If `amount` exceeds the size of the population
///
pub fn sample<R>(rng: &mut R, population: &[f64], amount: usize) -> Result<Sample, SampleError>
where
    R: Rng + ?Sized,
{
    if amount > population.len() {
        return Err(SampleError::AmountTooLarge {
            amount,
            population: population.len(),
        });
    }

    let positions = rand::seq::index::sample(rng, population.len(), amount).into_vec();
    let values = positions.iter().map(|p| population[*p]).collect();
    tracing::debug!(amount, population = population.len(), "sample drawn");

    Ok(Sample { positions, values })
}
