//! Driving sequence of bounded values
//!
use crate::bound::{bound_sqrt_with, BoundError, DEFAULT_LIMIT};

/// Number of integers the program feeds through the transform
pub const DEFAULT_LENGTH: usize = 500;

/// Bounded square roots of `0, 1, ..., len - 1` in order
///
pub fn driving_sequence(len: usize) -> Result<Vec<f64>, BoundError> {
    driving_sequence_with(len, DEFAULT_LIMIT)
}

///
/// Bounded square roots of `0, 1, ..., len - 1` with a custom limit
///
/// The `i`-th entry is `bound_sqrt_with(i, limit)`, so the sequence is fully
/// determined by its arguments.
///
pub fn driving_sequence_with(len: usize, limit: f64) -> Result<Vec<f64>, BoundError> {
    let values = (0..len)
        .map(|i| bound_sqrt_with(i as f64, limit))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(len, limit, "driving sequence computed");
    Ok(values)
}
