//! ## ProbabilisticCounting
//! Single-bitmap Flajolet-Martin sketch.
//!
//! Every distinct identifier sets at most one bit of an `L`-bit bitmap: bit
//! `i` records that some hash had exactly `i` trailing zeros. The position
//! `R` of the lowest unset bit then tracks `log2(phi * n)`, giving the
//! estimate `2^R / phi`.
//!
//! [Flajolet, Martin: Probabilistic Counting Algorithms for Data Base
//! Applications (1985)]

use crate::hash::{hash32, hash64};
use crate::sketch::{Sketch, SketchError};

/// Flajolet-Martin magic constant `phi`.
const PHI: f64 = 0.77351;

/// Single-bitmap Flajolet-Martin estimator.
#[derive(Debug, Clone)]
pub struct ProbabilisticCounting {
    /// Bitmap width in bits, in `[1, 31]`.
    width: u32,
    bitmap: u32,
}

impl ProbabilisticCounting {
    /// Create a sketch with an `L`-bit bitmap, `L` in `[1, 31]`.
    pub fn new(width: u32) -> Result<Self, SketchError> {
        if width == 0 || width > 31 {
            return Err(SketchError::InvalidParameter {
                param: "L",
                value: width,
                range: "[1, 31]",
            });
        }
        Ok(Self { width, bitmap: 0 })
    }

    /// Merge `other` into `self` by bitwise OR of the bitmaps.
    ///
    /// The union of set bits is exactly the bitmap a single sketch would have
    /// produced over the concatenated stream, so merge and serial processing
    /// agree bit for bit.
    pub fn merge(&mut self, other: &Self) -> Result<(), SketchError> {
        if self.width != other.width {
            return Err(SketchError::IncompatibleMerge {
                name: "ProbabilisticCounting",
                details: format!("L mismatch: {} vs {}", self.width, other.width),
            });
        }
        self.bitmap |= other.bitmap;
        Ok(())
    }
}

impl Sketch for ProbabilisticCounting {
    #[inline]
    fn update(&mut self, id: u32) {
        let h = hash32(hash64(id)) & ((1u32 << self.width) - 1);
        // An all-zero hash would mean rho > L; it carries no usable bit.
        if h == 0 {
            return;
        }
        self.bitmap |= 1 << h.trailing_zeros();
    }

    #[inline]
    fn estimate(&self) -> u64 {
        let r = self.bitmap.trailing_ones().min(self.width);
        (f64::from(1u32 << r) / PHI) as u64
    }

    fn reset(&mut self) {
        self.bitmap = 0;
    }

    fn name(&self) -> &'static str {
        "ProbabilisticCounting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0 => false; "zero width rejected")]
    #[test_case(1 => true; "one accepted")]
    #[test_case(16 => true; "sixteen accepted")]
    #[test_case(31 => true; "thirty one accepted")]
    #[test_case(32 => false; "thirty two rejected")]
    fn test_parameter_validation(width: u32) -> bool {
        ProbabilisticCounting::new(width).is_ok()
    }

    #[test]
    fn test_empty_estimate() {
        let pc = ProbabilisticCounting::new(16).unwrap();
        assert_eq!(pc.estimate(), 1); // R = 0 -> 2^0 / phi = 1.29
    }

    #[test]
    fn test_merge_equals_serial_exactly() {
        let mut serial = ProbabilisticCounting::new(16).unwrap();
        let mut lhs = ProbabilisticCounting::new(16).unwrap();
        let mut rhs = ProbabilisticCounting::new(16).unwrap();
        for i in 0..2_000u32 {
            serial.update(i);
            if i < 1_000 {
                lhs.update(i);
            } else {
                rhs.update(i);
            }
        }
        lhs.merge(&rhs).unwrap();
        assert_eq!(lhs.estimate(), serial.estimate());
    }

    #[test]
    fn test_merge_idempotent_and_commutative() {
        let mut a = ProbabilisticCounting::new(16).unwrap();
        let mut b = ProbabilisticCounting::new(16).unwrap();
        for i in 0..500u32 {
            a.update(i);
            b.update(i + 250);
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
    fn test_incompatible_widths() {
        let mut a = ProbabilisticCounting::new(16).unwrap();
        let b = ProbabilisticCounting::new(8).unwrap();
        assert!(matches!(
            a.merge(&b),
            Err(SketchError::IncompatibleMerge { .. })
        ));
    }

    #[test]
    fn test_reset() {
        let mut pc = ProbabilisticCounting::new(16).unwrap();
        for i in 0..100u32 {
            pc.update(i);
        }
        pc.reset();
        assert_eq!(pc.estimate(), 1);
    }
}
