//! Bounded square root
//!
//! Maps a non-negative real number into `[0, limit]` by taking its square
//! root and halving the result until it no longer exceeds the limit:
//! ```
//! # use bounded_sample::bound::{bound_sqrt, BoundError};
//! # fn main() -> Result<(), BoundError> {
//! assert_eq!(bound_sqrt(64.0)?, 2.0);
//! assert_eq!(bound_sqrt(2.25)?, 1.5);
//! # Ok(())}
//! ```
//!
use thiserror::Error;

/// Threshold used by [bound_sqrt]
pub const DEFAULT_LIMIT: f64 = 2.0;

///
/// Error raised when a value cannot be bounded
///
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundError {
    #[error("Square root of a negative number: {0}")]
    Negative(f64),
    /// NaN never compares and infinity never shrinks by halving
    #[error("Value is not finite: {0}")]
    NotFinite(f64),
    #[error("Limit must be finite and strictly positive, got: {0}")]
    InvalidLimit(f64),
}

/// Bound the square root of `x` by [DEFAULT_LIMIT]
///
pub fn bound_sqrt(x: f64) -> Result<f64, BoundError> {
    bound_sqrt_with(x, DEFAULT_LIMIT)
}

///
/// Bound the square root of `x` by `limit`
///
/// Computes `sqrt(x)` and divides it by 2 while it is larger than `limit`.
/// The result is in `(0, limit]` for positive `x` and `0` for `x == 0`.
///
/// # Errors
/// - `x` is negative
/// - `x` is NaN or infinite
/// - `limit` is not a finite positive number
///
pub fn bound_sqrt_with(x: f64, limit: f64) -> Result<f64, BoundError> {
    if !(limit.is_finite() && limit > 0.0) {
        return Err(BoundError::InvalidLimit(limit));
    } else if !x.is_finite() {
        return Err(BoundError::NotFinite(x));
    } else if x < 0.0 {
        return Err(BoundError::Negative(x));
    }

    let mut candidate = x.sqrt();
    let mut halvings = 0u32;
    while candidate > limit {
        candidate /= 2.0;
        halvings += 1;
    }
    tracing::trace!(x, candidate, halvings, "bounded square root");
    Ok(candidate)
}
