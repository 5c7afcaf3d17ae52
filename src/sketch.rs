//! ## Sketch contract
//! The capability set every estimator implements, the error taxonomy shared
//! by all of them, and a type-erased wrapper over the closed set of sketch
//! kinds for callers that pick the algorithm at runtime.
//!
//! Merging is typed: each concrete sketch exposes `merge(&mut self, &Self)`,
//! checked at compile time. [`AnySketch::merge`] adds the one runtime check
//! a type-erased caller needs, failing fast with [`SketchError::TypeMismatch`]
//! when the operands belong to different algorithm families.

use enum_dispatch::enum_dispatch;
use thiserror::Error;

use crate::hllpp::HyperLogLogPlusPlus;
use crate::hyperloglog::HyperLogLog;
use crate::loglog::LogLog;
use crate::naive::NaiveCounting;
use crate::probabilistic::ProbabilisticCounting;

/// Errors surfaced by sketch construction and merging.
///
/// All operations are deterministic, so none of these are retryable: a
/// violation must be fixed by the caller, never clamped or coerced here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SketchError {
    /// A construction parameter fell outside its documented range.
    #[error("invalid parameter {param} = {value}, expected {range}")]
    InvalidParameter {
        param: &'static str,
        value: u32,
        range: &'static str,
    },
    /// Merge operands were constructed with different parameters.
    #[error("incompatible {name} merge: {details}")]
    IncompatibleMerge {
        name: &'static str,
        details: String,
    },
    /// Merge operands belong to different algorithm families.
    #[error("cannot merge {left} with {right}")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },
}

/// Capability set implemented by every cardinality estimator.
#[enum_dispatch(AnySketch)]
pub trait Sketch {
    /// Feed one stream identifier into the sketch.
    fn update(&mut self, id: u32);

    /// Current cardinality estimate. Pure and repeatable: calling it any
    /// number of times observes the same state and mutates nothing.
    fn estimate(&self) -> u64;

    /// Restore the freshly-constructed empty state, keeping parameters.
    fn reset(&mut self);

    /// Stable algorithm name used for reporting.
    fn name(&self) -> &'static str;
}

/// Type-erased sketch over the closed set of algorithm kinds.
#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum AnySketch {
    NaiveCounting,
    ProbabilisticCounting,
    LogLog,
    HyperLogLog,
    HyperLogLogPlusPlus,
}

impl AnySketch {
    /// Merge `other` into `self`.
    ///
    /// Requires both operands to be the same algorithm kind constructed with
    /// identical parameters; `self` is left unmodified on error.
    pub fn merge(&mut self, other: &AnySketch) -> Result<(), SketchError> {
        match (self, other) {
            (Self::NaiveCounting(lhs), Self::NaiveCounting(rhs)) => lhs.merge(rhs),
            (Self::ProbabilisticCounting(lhs), Self::ProbabilisticCounting(rhs)) => {
                lhs.merge(rhs)
            }
            (Self::LogLog(lhs), Self::LogLog(rhs)) => lhs.merge(rhs),
            (Self::HyperLogLog(lhs), Self::HyperLogLog(rhs)) => lhs.merge(rhs),
            (Self::HyperLogLogPlusPlus(lhs), Self::HyperLogLogPlusPlus(rhs)) => lhs.merge(rhs),
            (lhs, rhs) => Err(SketchError::TypeMismatch {
                left: lhs.name(),
                right: rhs.name(),
            }),
        }
    }
}
