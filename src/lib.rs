//! `cardinality-sketches` estimates the number of distinct elements in a
//! stream of 32-bit identifiers using sub-linear-memory probabilistic
//! sketches, and ships an exact baseline to validate them against.
//!
//! Five estimators implement the common [`Sketch`] contract:
//! - [`NaiveCounting`] - exact deduplicating-set baseline;
//! - [`ProbabilisticCounting`] - single-bitmap Flajolet-Martin;
//! - [`LogLog`] - arithmetic mean of per-bucket leading-zero runs;
//! - [`HyperLogLog`] - harmonic mean with small/large-range corrections;
//! - [`HyperLogLogPlusPlus`] - sparse/dense hybrid with empirical bias
//!   correction.
//!
//! All randomness comes from one deterministic splitmix64-style hash, so
//! estimates are reproducible across runs. Sketches built with identical
//! parameters merge algebraically; merging agrees with single-pass
//! processing (exactly for the register-based sketches, within a small
//! tolerance for HyperLogLog++'s bias-corrected dense mode).
//!
//! ```
//! use cardinality_sketches::{HyperLogLog, Sketch};
//!
//! let mut sketch = HyperLogLog::new(10, 32).unwrap();
//! for id in 0u32..10_000 {
//!     sketch.update(id % 1_000);
//! }
//! let estimate = sketch.estimate();
//! assert!((900..=1_100).contains(&estimate));
//! ```

mod bias;
pub mod hash;
mod hllpp;
mod hyperloglog;
mod loglog;
mod naive;
mod probabilistic;
mod sketch;

pub use hllpp::HyperLogLogPlusPlus;
pub use hyperloglog::HyperLogLog;
pub use loglog::LogLog;
pub use naive::NaiveCounting;
pub use probabilistic::ProbabilisticCounting;
pub use sketch::{AnySketch, Sketch, SketchError};
