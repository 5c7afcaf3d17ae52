//! ## LogLog
//! Multi-register estimator keeping only the position of the leftmost 1-bit
//! per bucket, aggregated by arithmetic mean.
//!
//! Paper-strict setting from Durand-Flajolet (2003): `k` index bits in
//! `[4, 16]` (`m = 2^k` registers) over a 32-bit hash domain.

use crate::hash::{hash32, hash64};
use crate::sketch::{Sketch, SketchError};

/// Asymptotic correction constant `alpha_infinity`.
const ALPHA_INF: f64 = 0.39701;

const MIN_K: u32 = 4;
const MAX_K: u32 = 16;
const PAPER_L: u32 = 32;

/// Durand-Flajolet LogLog estimator.
#[derive(Debug, Clone)]
pub struct LogLog {
    /// Register index bits; `m = 2^k`.
    k: u32,
    /// Hash width; paper-strict builds accept only 32.
    width: u32,
    /// One register per bucket, holding the max observed rho.
    registers: Vec<u8>,
    /// Running `sum(registers)`, kept in lockstep with the register bank so
    /// `estimate` stays O(1).
    sum_registers: f64,
}

impl LogLog {
    /// Create a sketch with `m = 2^k` registers over an `L`-bit hash domain.
    pub fn new(k: u32, width: u32) -> Result<Self, SketchError> {
        if width != PAPER_L {
            return Err(SketchError::InvalidParameter {
                param: "L",
                value: width,
                range: "{32}",
            });
        }
        if !(MIN_K..=MAX_K).contains(&k) {
            return Err(SketchError::InvalidParameter {
                param: "k",
                value: k,
                range: "[4, 16]",
            });
        }
        Ok(Self {
            k,
            width,
            registers: vec![0; 1 << k],
            sum_registers: 0.0,
        })
    }

    /// Number of registers.
    #[inline]
    fn buckets(&self) -> usize {
        1 << self.k
    }

    /// Merge `other` into `self` by registerwise max.
    ///
    /// Max is associative, commutative and idempotent, so the merged register
    /// bank is bit-identical to serially processing the concatenated stream.
    pub fn merge(&mut self, other: &Self) -> Result<(), SketchError> {
        if self.k != other.k || self.width != other.width {
            return Err(SketchError::IncompatibleMerge {
                name: "LogLog",
                details: format!(
                    "(k, L) mismatch: ({}, {}) vs ({}, {})",
                    self.k, self.width, other.k, other.width
                ),
            });
        }
        for (lhs, rhs) in self.registers.iter_mut().zip(&other.registers) {
            *lhs = (*lhs).max(*rhs);
        }
        // A union is not a sequence of single updates; rebuild the aggregate.
        self.sum_registers = self.registers.iter().map(|&r| f64::from(r)).sum();
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn registers(&self) -> &[u8] {
        &self.registers
    }
}

impl Sketch for LogLog {
    #[inline]
    fn update(&mut self, id: u32) {
        let h = hash32(hash64(id));
        let idx = (h >> (self.width - self.k)) as usize;
        // Remaining 32-k bits, left-aligned so leading_zeros counts within
        // exactly that width.
        let rem = h << self.k;
        let wbits = self.width - self.k;
        let rho = if rem == 0 {
            (wbits + 1) as u8
        } else {
            (rem.leading_zeros() + 1) as u8
        };
        let old = self.registers[idx];
        if rho > old {
            self.registers[idx] = rho;
            self.sum_registers += f64::from(rho - old);
        }
    }

    #[inline]
    fn estimate(&self) -> u64 {
        let m = self.buckets() as f64;
        let mean = self.sum_registers / m;
        (ALPHA_INF * m * mean.exp2()) as u64
    }

    fn reset(&mut self) {
        self.registers.fill(0);
        self.sum_registers = 0.0;
    }

    fn name(&self) -> &'static str {
        "LogLog"
    }
}
