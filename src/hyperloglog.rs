//! ## HyperLogLog
//! LogLog refined with harmonic-mean aggregation and small/large-range bias
//! corrections, per Flajolet-Fusy-Gandouet-Meunier (2007).
//!
//! The register bank is identical to LogLog's; only the aggregation differs.
//! Two aggregates are carried alongside the registers so `estimate` never
//! scans the bank: `sum_inverse_powers = sum(2^-reg[i])` and the number of
//! registers still at zero. Each single-element update changes one register
//! in a closed-form way, so both aggregates can be maintained in O(1);
//! after a merge they are rebuilt by a full scan instead, since a union is
//! not a sequence of single-element updates.

use crate::hash::{hash32, hash64, rho};
use crate::sketch::{Sketch, SketchError};

const MIN_K: u32 = 4;
const MAX_K: u32 = 16;
const PAPER_L: u32 = 32;

/// Harmonic-mean correction constant `alpha_m`.
///
/// Closed-form values for small register counts, asymptotic formula above.
#[inline]
pub(crate) fn alpha(m: usize) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / (m as f64)),
    }
}

/// Linear-counting estimate over `buckets` buckets with `zeros` still empty.
#[inline]
pub(crate) fn linear_counting(buckets: f64, zeros: f64) -> f64 {
    if zeros <= 0.0 {
        return buckets;
    }
    buckets * (buckets / zeros).ln()
}

/// Flajolet et al. HyperLogLog estimator.
#[derive(Debug, Clone)]
pub struct HyperLogLog {
    /// Register index bits; `m = 2^k`.
    k: u32,
    /// Hash width; paper-strict builds accept only 32.
    width: u32,
    registers: Vec<u8>,
    /// Running `sum(2^-reg[i])`.
    sum_inverse_powers: f64,
    /// Number of registers still at zero.
    zero_registers: u32,
}

impl HyperLogLog {
    /// Create a sketch with `m = 2^k` registers over an `L`-bit hash domain.
    pub fn new(k: u32, width: u32) -> Result<Self, SketchError> {
        if !(MIN_K..=MAX_K).contains(&k) {
            return Err(SketchError::InvalidParameter {
                param: "k",
                value: k,
                range: "[4, 16]",
            });
        }
        if width != PAPER_L {
            return Err(SketchError::InvalidParameter {
                param: "L",
                value: width,
                range: "{32}",
            });
        }
        let m = 1usize << k;
        Ok(Self {
            k,
            width,
            registers: vec![0; m],
            sum_inverse_powers: m as f64,
            zero_registers: m as u32,
        })
    }

    #[inline]
    fn buckets(&self) -> usize {
        1 << self.k
    }

    /// Merge `other` into `self` by registerwise max.
    pub fn merge(&mut self, other: &Self) -> Result<(), SketchError> {
        if self.k != other.k || self.width != other.width {
            return Err(SketchError::IncompatibleMerge {
                name: "HyperLogLog",
                details: format!(
                    "(k, L) mismatch: ({}, {}) vs ({}, {})",
                    self.k, self.width, other.k, other.width
                ),
            });
        }
        for (lhs, rhs) in self.registers.iter_mut().zip(&other.registers) {
            *lhs = (*lhs).max(*rhs);
        }
        self.rebuild_aggregates();
        Ok(())
    }

    /// Rebuild `sum_inverse_powers` and `zero_registers` by a full scan.
    fn rebuild_aggregates(&mut self) {
        self.sum_inverse_powers = self
            .registers
            .iter()
            .map(|&r| f64::powi(2.0, -i32::from(r)))
            .sum();
        self.zero_registers = self.registers.iter().filter(|&&r| r == 0).count() as u32;
    }

    #[cfg(test)]
    pub(crate) fn registers(&self) -> &[u8] {
        &self.registers
    }

    #[cfg(test)]
    pub(crate) fn aggregates(&self) -> (f64, u32) {
        (self.sum_inverse_powers, self.zero_registers)
    }
}

impl Sketch for HyperLogLog {
    #[inline]
    fn update(&mut self, id: u32) {
        let h = hash32(hash64(id));
        let idx = (h >> (self.width - self.k)) as usize;
        let wbits = self.width - self.k;
        let r = rho(u64::from(h), wbits);
        let old = self.registers[idx];
        if r > old {
            self.sum_inverse_powers +=
                f64::powi(2.0, -i32::from(r)) - f64::powi(2.0, -i32::from(old));
            if old == 0 {
                self.zero_registers -= 1;
            }
            self.registers[idx] = r;
        }
    }

    #[inline]
    fn estimate(&self) -> u64 {
        let m = self.buckets() as f64;
        let raw = alpha(self.buckets()) * m * m / self.sum_inverse_powers;

        if raw <= 2.5 * m {
            // Small-range correction: fall back to linear counting while any
            // bucket is still empty.
            if self.zero_registers != 0 {
                return linear_counting(m, f64::from(self.zero_registers)) as u64;
            }
            return raw as u64;
        }
        let two_pow_32 = f64::powi(2.0, 32);
        if raw <= two_pow_32 / 30.0 {
            raw as u64
        } else {
            // Large-range correction for hash collisions near the 32-bit
            // hash space limit.
            (-two_pow_32 * (1.0 - raw / two_pow_32).ln()) as u64
        }
    }

    fn reset(&mut self) {
        let m = self.buckets();
        self.registers.fill(0);
        self.sum_inverse_powers = m as f64;
        self.zero_registers = m as u32;
    }

    fn name(&self) -> &'static str {
        "HyperLogLog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(3, 32 => false; "k below range")]
    #[test_case(4, 32 => true; "k lower bound")]
    #[test_case(16, 32 => true; "k upper bound")]
    #[test_case(17, 32 => false; "k above range")]
    #[test_case(5, 31 => false; "narrow hash rejected")]
    #[test_case(10, 64 => false; "wide hash rejected")]
    fn test_parameter_validation(k: u32, width: u32) -> bool {
        HyperLogLog::new(k, width).is_ok()
    }

    #[test]
    fn test_empty_estimate_is_zero() {
        let hll = HyperLogLog::new(10, 32).unwrap();
        assert_eq!(hll.estimate(), 0);
    }

    #[test]
    fn test_linear_counting_small_range() {
        // With far fewer distinct values than buckets, the small-range path
        // keeps the estimate essentially exact.
        let mut hll = HyperLogLog::new(12, 32).unwrap();
        for i in 0..100u32 {
            hll.update(i);
        }
        let estimate = hll.estimate();
        assert!((95..=105).contains(&estimate), "estimate = {estimate}");
    }

    #[test]
    fn test_accuracy_within_three_rse() {
        // 10_000 samples over exactly 1_000 distinct values; k = 10 gives
        // RSE = 1.04 / sqrt(2^10), so the estimate must land within
        // 1000 * (1 +/- 3 * RSE) = [902, 1098].
        let mut hll = HyperLogLog::new(10, 32).unwrap();
        for i in 0..10_000u32 {
            hll.update(i % 1_000);
        }
        let estimate = hll.estimate();
        assert!((902..=1098).contains(&estimate), "estimate = {estimate}");
    }

    #[test]
    fn test_aggregates_match_rescan() {
        let mut hll = HyperLogLog::new(8, 32).unwrap();
        for i in 0..5_000u32 {
            hll.update(i);
        }
        let (sum, zeros) = hll.aggregates();
        let rescan_sum: f64 = hll
            .registers()
            .iter()
            .map(|&r| f64::powi(2.0, -i32::from(r)))
            .sum();
        let rescan_zeros = hll.registers().iter().filter(|&&r| r == 0).count() as u32;
        assert_eq!(sum, rescan_sum);
        assert_eq!(zeros, rescan_zeros);
    }

    #[test]
    fn test_registers_are_monotone() {
        let mut hll = HyperLogLog::new(8, 32).unwrap();
        let mut prev = hll.registers().to_vec();
        for i in 0..30_000u32 {
            hll.update(i % 9_000);
            if i % 1_000 == 999 {
                let cur = hll.registers().to_vec();
                assert!(prev.iter().zip(&cur).all(|(p, c)| c >= p));
                prev = cur;
            }
        }
    }

    #[test]
    fn test_merge_equals_serial_bit_identical() {
        let mut serial = HyperLogLog::new(10, 32).unwrap();
        let mut lhs = HyperLogLog::new(10, 32).unwrap();
        let mut rhs = HyperLogLog::new(10, 32).unwrap();
        for i in 0..30_000u32 {
            serial.update(i);
            if i < 10_000 {
                lhs.update(i);
            } else {
                rhs.update(i);
            }
        }
        lhs.merge(&rhs).unwrap();
        assert_eq!(lhs.registers(), serial.registers());
        assert_eq!(lhs.estimate(), serial.estimate());
        let (sum, zeros) = lhs.aggregates();
        let (serial_sum, serial_zeros) = serial.aggregates();
        assert_eq!(zeros, serial_zeros);
        assert!((sum - serial_sum).abs() < 1e-9);
    }

    #[test]
    fn test_merge_commutative_and_idempotent() {
        let mut a = HyperLogLog::new(10, 32).unwrap();
        let mut b = HyperLogLog::new(10, 32).unwrap();
        for i in 0..8_000u32 {
            a.update(i);
            b.update(i + 4_000);
        }
        let mut ab = a.clone();
        ab.merge(&b).unwrap();
        let mut ba = b.clone();
        ba.merge(&a).unwrap();
        assert_eq!(ab.registers(), ba.registers());

        let mut aa = a.clone();
        aa.merge(&a).unwrap();
        assert_eq!(aa.estimate(), a.estimate());
    }

    #[test]
    fn test_incompatible_parameters_leave_receiver_unmodified() {
        let mut a = HyperLogLog::new(10, 32).unwrap();
        for i in 0..1_000u32 {
            a.update(i);
        }
        let before = a.clone();
        let b = HyperLogLog::new(11, 32).unwrap();
        assert!(matches!(
            a.merge(&b),
            Err(SketchError::IncompatibleMerge { .. })
        ));
        assert_eq!(a.registers(), before.registers());
        assert_eq!(a.estimate(), before.estimate());
    }

    #[test]
    fn test_reset() {
        let mut hll = HyperLogLog::new(10, 32).unwrap();
        for i in 0..10_000u32 {
            hll.update(i);
        }
        hll.reset();
        assert_eq!(hll.estimate(), 0);
        let (sum, zeros) = hll.aggregates();
        assert_eq!(sum, 1024.0);
        assert_eq!(zeros, 1024);
    }
}
