//! Random sample of bounded square roots
//!
//! Takes the integers `0..500`, maps each of them through a square root that
//! is halved until it does not exceed `2` and draws 12 of the results
//! uniformly without replacement.
//!
//! ```
//! # use bounded_sample::*;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let seq = driving_sequence(DEFAULT_LENGTH)?;
//! let s = sample(&mut rand::thread_rng(), &seq, DEFAULT_AMOUNT)?;
//!
//! assert_eq!(s.len(), 12);
//! assert!(s.values().iter().all(|v| (0.0..=2.0).contains(v)));
//! # Ok(())}
//! ```
//!
//! The [uniformity] module provides a statistical check that the sampler
//! picks positions evenly.
//!
pub mod bound;
pub mod sampler;
pub mod sequence;
pub mod uniformity;

pub use bound::{bound_sqrt, bound_sqrt_with, BoundError, DEFAULT_LIMIT};
pub use sampler::{sample, Sample, SampleError, DEFAULT_AMOUNT};
pub use sequence::{driving_sequence, driving_sequence_with, DEFAULT_LENGTH};
