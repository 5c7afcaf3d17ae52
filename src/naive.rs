//! ## NaiveCounting
//! Exact distinct count over a deduplicating set of raw identifiers.
//!
//! Memory grows linearly with the number of distinct values, so this is no
//! sketch at all; it exists as the ground-truth oracle the approximate
//! estimators are validated against.

use std::collections::HashSet;

use crate::sketch::{Sketch, SketchError};

/// Exact baseline estimator.
#[derive(Debug, Clone, Default)]
pub struct NaiveCounting {
    ids: HashSet<u32>,
}

impl NaiveCounting {
    /// Create an empty baseline counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `other` into `self` by set union. Always compatible.
    pub fn merge(&mut self, other: &Self) -> Result<(), SketchError> {
        self.ids.extend(&other.ids);
        Ok(())
    }
}

impl Sketch for NaiveCounting {
    #[inline]
    fn update(&mut self, id: u32) {
        self.ids.insert(id);
    }

    #[inline]
    fn estimate(&self) -> u64 {
        self.ids.len() as u64
    }

    fn reset(&mut self) {
        self.ids.clear();
    }

    fn name(&self) -> &'static str {
        "NaiveCounting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_on_duplicate_heavy_stream() {
        let mut naive = NaiveCounting::new();
        for i in 0..10_000u32 {
            naive.update(i % 1_000);
        }
        assert_eq!(naive.estimate(), 1_000);
    }

    #[test]
    fn test_merge_is_set_union() {
        let mut lhs = NaiveCounting::new();
        let mut rhs = NaiveCounting::new();
        for i in 0..600u32 {
            lhs.update(i);
        }
        for i in 400..1_000u32 {
            rhs.update(i);
        }
        lhs.merge(&rhs).unwrap();
        assert_eq!(lhs.estimate(), 1_000);
        // rhs untouched
        assert_eq!(rhs.estimate(), 600);
    }

    #[test]
    fn test_merge_idempotent_and_commutative() {
        let mut a = NaiveCounting::new();
        let mut b = NaiveCounting::new();
        for i in 0..100u32 {
            a.update(i * 3);
            b.update(i * 5);
        }
        let mut ab = a.clone();
        ab.merge(&b).unwrap();
        let mut ba = b.clone();
        ba.merge(&a).unwrap();
        assert_eq!(ab.estimate(), ba.estimate());

        let mut aa = a.clone();
        aa.merge(&a).unwrap();
        assert_eq!(aa.estimate(), a.estimate());
    }

    #[test]
    fn test_reset() {
        let mut naive = NaiveCounting::new();
        naive.update(7);
        naive.reset();
        assert_eq!(naive.estimate(), 0);
    }
}
