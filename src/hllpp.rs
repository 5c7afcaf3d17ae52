//! ## HyperLogLogPlusPlus
//! HyperLogLog refined per Heule-Nunkesser-Hall (2013): a 64-bit hash
//! domain, an exact-ish sparse representation for low cardinalities, and an
//! empirical bias correction for the dense mid-range.
//!
//! The sketch is a one-way two-state machine. It starts **Sparse**: hashes
//! are packed into 32-bit entries at the higher sparse precision `p' = 25`,
//! buffered in an unordered set and periodically flushed into a canonical
//! sorted list (one entry per sparse index, larger rho wins). Once the
//! variable-length delta encoding of that list would outgrow the dense
//! register bank (`6m` bits), the sketch converts to **Normal** and behaves
//! like a 64-bit-domain HyperLogLog at precision `p`, with k-nearest-neighbor
//! bias correction from the calibration tables in [`crate::bias`].
//!
//! ### Sparse entry format
//! A packed entry either carries an explicit rho or lets the decoder derive
//! it from the index itself:
//! - `(idx' << 7) | (rho' << 1) | 1` when the low `p' - p` bits of the
//!   25-bit sparse index `idx'` are all zero: the bits that would determine
//!   the dense rho were truncated away, so the rho of the remaining
//!   `64 - p'` hash bits is stored in a 6-bit field;
//! - `idx' << 1` otherwise: the dense rho is the leading-zero run of the low
//!   `p' - p` index bits, which are deterministic given the index.
//! The LSB discriminates the two forms.

use std::collections::HashSet;

use crate::bias::{estimate_bias, threshold};
use crate::hash::{hash64, rho};
use crate::hyperloglog::{alpha, linear_counting};
use crate::sketch::{Sketch, SketchError};

/// Sparse-phase precision: sparse indices are the top 25 hash bits.
const SPARSE_P: u32 = 25;
/// Number of sparse buckets, `2^25`.
const SPARSE_BUCKETS: u64 = 1 << SPARSE_P;
/// Buffered entries that trigger a flush into the canonical sparse list.
const FLUSH_SIZE: usize = 4096;

const MIN_P: u32 = 4;
const MAX_P: u32 = 18;

/// Sparse index of a packed entry.
#[inline]
fn sparse_index(encoded: u32) -> u32 {
    if encoded & 1 == 1 {
        encoded >> 7
    } else {
        encoded >> 1
    }
}

/// Dense rho of a packed entry; `tail` is the index-tail width `p' - p`.
#[inline]
fn rho_from_encoded(encoded: u32, tail: u32) -> u8 {
    if encoded & 1 == 1 {
        // Explicit rho over the 64 - p' low hash bits; the run extends
        // through the all-zero index tail.
        (((encoded >> 1) & 0x3F) + tail) as u8
    } else {
        rho(u64::from(sparse_index(encoded)), tail)
    }
}

/// Sort `incoming` by `(index, rho desc)` and keep one entry per index.
fn sorted_dedup(mut incoming: Vec<u32>, tail: u32) -> Vec<u32> {
    incoming.sort_unstable_by(|&a, &b| {
        sparse_index(a)
            .cmp(&sparse_index(b))
            .then(rho_from_encoded(b, tail).cmp(&rho_from_encoded(a, tail)))
            .then(a.cmp(&b))
    });
    incoming.dedup_by_key(|e| sparse_index(*e));
    incoming
}

/// Merge two canonical sparse lists; on an index match the entry with the
/// larger rho survives.
fn merge_sparse_lists(lhs: &[u32], rhs: &[u32], tail: u32) -> Vec<u32> {
    let mut merged = Vec::with_capacity(lhs.len() + rhs.len());
    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        let idx_l = sparse_index(lhs[i]);
        let idx_r = sparse_index(rhs[j]);
        if idx_l < idx_r {
            merged.push(lhs[i]);
            i += 1;
        } else if idx_r < idx_l {
            merged.push(rhs[j]);
            j += 1;
        } else {
            let keep = if rho_from_encoded(rhs[j], tail) > rho_from_encoded(lhs[i], tail) {
                rhs[j]
            } else {
                lhs[i]
            };
            merged.push(keep);
            i += 1;
            j += 1;
        }
    }
    merged.extend_from_slice(&lhs[i..]);
    merged.extend_from_slice(&rhs[j..]);
    merged
}

/// Bit cost of a canonical list under variable-length delta encoding:
/// 8 bits per started 7-bit chunk of each normalized delta.
fn compressed_sparse_bits(list: &[u32]) -> usize {
    let mut bits = 0;
    let mut previous = 0u32;
    for (i, &encoded) in list.iter().enumerate() {
        let payload = if encoded & 1 == 1 { encoded & 0x7F } else { 0 };
        let normalized = (sparse_index(encoded) << 7) | payload;
        let mut delta = if i == 0 {
            normalized
        } else {
            normalized - previous
        };
        previous = normalized;
        loop {
            bits += 8;
            delta >>= 7;
            if delta == 0 {
                break;
            }
        }
    }
    bits
}

/// Sparse-phase state: an unordered buffer plus the canonical sorted list.
#[derive(Debug, Clone, Default)]
struct SparseRepr {
    tmp_set: HashSet<u32>,
    /// Sorted by sparse index, at most one entry per index.
    list: Vec<u32>,
}

/// Dense-phase state: the register bank plus O(1) estimate aggregates.
#[derive(Debug, Clone)]
struct DenseRepr {
    registers: Vec<u8>,
    sum_inverse_powers: f64,
    zero_registers: u32,
}

impl DenseRepr {
    fn empty(m: usize) -> Self {
        Self {
            registers: vec![0; m],
            sum_inverse_powers: m as f64,
            zero_registers: m as u32,
        }
    }

    /// Registerwise max update with O(1) aggregate maintenance.
    #[inline]
    fn update(&mut self, idx: usize, r: u8) {
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

    /// Insert a raw 64-bit hash: top `p` bits index, rho over the rest.
    #[inline]
    fn insert_hash(&mut self, hash: u64, p: u32) {
        let idx = (hash >> (64 - p)) as usize;
        let rem = hash << p;
        let r = if rem == 0 {
            (64 - p + 1) as u8
        } else {
            (rem.leading_zeros() + 1) as u8
        };
        self.update(idx, r);
    }

    /// Rebuild both aggregates by a full scan, required after any merge.
    fn rebuild_aggregates(&mut self) {
        self.sum_inverse_powers = self
            .registers
            .iter()
            .map(|&r| f64::powi(2.0, -i32::from(r)))
            .sum();
        self.zero_registers = self.registers.iter().filter(|&&r| r == 0).count() as u32;
    }
}

#[derive(Debug, Clone)]
enum Repr {
    Sparse(SparseRepr),
    Normal(DenseRepr),
}

/// Heule et al. HyperLogLog++ estimator.
#[derive(Debug, Clone)]
pub struct HyperLogLogPlusPlus {
    /// Dense register index bits; `m = 2^p`.
    p: u32,
    repr: Repr,
}

impl HyperLogLogPlusPlus {
    /// Create a sketch with `m = 2^p` dense registers, `p` in `[4, 18]`.
    pub fn new(p: u32) -> Result<Self, SketchError> {
        if !(MIN_P..=MAX_P).contains(&p) {
            return Err(SketchError::InvalidParameter {
                param: "p",
                value: p,
                range: "[4, 18]",
            });
        }
        Ok(Self {
            p,
            repr: Repr::Sparse(SparseRepr::default()),
        })
    }

    #[inline]
    fn buckets(&self) -> usize {
        1 << self.p
    }

    /// Index-tail bits a sparse index carries beyond the dense precision.
    #[inline]
    fn tail_bits(&self) -> u32 {
        SPARSE_P - self.p
    }

    /// Pack a 64-bit hash into a sparse entry.
    #[inline]
    fn encode_hash(&self, hash: u64) -> u32 {
        let idx = (hash >> (64 - SPARSE_P)) as u32;
        if idx & ((1 << self.tail_bits()) - 1) == 0 {
            let rho_prime = rho(hash, 64 - SPARSE_P);
            (idx << 7) | (u32::from(rho_prime) << 1) | 1
        } else {
            idx << 1
        }
    }

    /// Dense register index and rho of a packed entry.
    #[inline]
    fn decode_hash(&self, encoded: u32) -> (usize, u8) {
        let tail = self.tail_bits();
        let idx = (sparse_index(encoded) >> tail) as usize;
        (idx, rho_from_encoded(encoded, tail))
    }

    /// Drain the buffer into the canonical list. No-op when empty or dense.
    fn flush(&mut self) {
        let tail = self.tail_bits();
        let Repr::Sparse(sparse) = &mut self.repr else {
            return;
        };
        if sparse.tmp_set.is_empty() {
            return;
        }
        let incoming = sorted_dedup(sparse.tmp_set.drain().collect(), tail);
        let list = std::mem::take(&mut sparse.list);
        sparse.list = merge_sparse_lists(&list, &incoming, tail);
    }

    /// Convert to Normal when the sparse list outgrew the dense bank.
    fn maybe_convert(&mut self) {
        let dense_bits = self.buckets() * 6;
        let Repr::Sparse(sparse) = &self.repr else {
            return;
        };
        if compressed_sparse_bits(&sparse.list) > dense_bits {
            self.convert_to_normal();
        }
    }

    /// One-way Sparse -> Normal transition.
    fn convert_to_normal(&mut self) {
        if matches!(self.repr, Repr::Normal(_)) {
            return;
        }
        self.flush();
        let Repr::Sparse(sparse) = &self.repr else {
            unreachable!()
        };
        let mut dense = DenseRepr::empty(self.buckets());
        for &encoded in &sparse.list {
            let (idx, r) = self.decode_hash(encoded);
            dense.update(idx, r);
        }
        self.repr = Repr::Normal(dense);
    }

    /// Canonical sparse view including unflushed buffer entries, without
    /// mutating `self`. Used when `self` is the read-only merge operand.
    fn canonical_sparse(&self) -> Vec<u32> {
        let tail = self.tail_bits();
        let Repr::Sparse(sparse) = &self.repr else {
            unreachable!()
        };
        if sparse.tmp_set.is_empty() {
            return sparse.list.clone();
        }
        let incoming = sorted_dedup(sparse.tmp_set.iter().copied().collect(), tail);
        merge_sparse_lists(&sparse.list, &incoming, tail)
    }

    /// Merge `other` into `self`.
    ///
    /// Requires identical `p`; the receiver is unmodified on error and
    /// `other` is never mutated. Two sparse operands stay sparse (subject to
    /// the usual bit-cost crossover); any dense operand forces the result
    /// dense.
    pub fn merge(&mut self, other: &Self) -> Result<(), SketchError> {
        if self.p != other.p {
            return Err(SketchError::IncompatibleMerge {
                name: "HyperLogLog++",
                details: format!("p mismatch: {} vs {}", self.p, other.p),
            });
        }
        let both_sparse = matches!(
            (&self.repr, &other.repr),
            (Repr::Sparse(_), Repr::Sparse(_))
        );
        if both_sparse {
            self.flush();
            let tail = self.tail_bits();
            let incoming = other.canonical_sparse();
            let Repr::Sparse(sparse) = &mut self.repr else {
                unreachable!()
            };
            let list = std::mem::take(&mut sparse.list);
            sparse.list = merge_sparse_lists(&list, &incoming, tail);
            self.maybe_convert();
            return Ok(());
        }

        self.convert_to_normal();
        match &other.repr {
            Repr::Normal(rhs) => {
                let Repr::Normal(dense) = &mut self.repr else {
                    unreachable!()
                };
                for (lhs, rhs) in dense.registers.iter_mut().zip(&rhs.registers) {
                    *lhs = (*lhs).max(*rhs);
                }
                // A union is not a sequence of single-element updates;
                // rebuild the aggregates from scratch.
                dense.rebuild_aggregates();
            }
            Repr::Sparse(_) => {
                let entries = other.canonical_sparse();
                let decoded: Vec<(usize, u8)> =
                    entries.iter().map(|&e| self.decode_hash(e)).collect();
                let Repr::Normal(dense) = &mut self.repr else {
                    unreachable!()
                };
                for (idx, r) in decoded {
                    dense.update(idx, r);
                }
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn is_sparse(&self) -> bool {
        matches!(self.repr, Repr::Sparse(_))
    }

    #[cfg(test)]
    pub(crate) fn sparse_list_len(&self) -> usize {
        match &self.repr {
            Repr::Sparse(sparse) => sparse.list.len(),
            Repr::Normal(_) => 0,
        }
    }
}

impl Sketch for HyperLogLogPlusPlus {
    #[inline]
    fn update(&mut self, id: u32) {
        let hash = hash64(id);
        if let Repr::Normal(dense) = &mut self.repr {
            dense.insert_hash(hash, self.p);
            return;
        }
        let encoded = self.encode_hash(hash);
        let Repr::Sparse(sparse) = &mut self.repr else {
            unreachable!()
        };
        sparse.tmp_set.insert(encoded);
        if sparse.tmp_set.len() >= FLUSH_SIZE {
            self.flush();
            self.maybe_convert();
        }
    }

    fn estimate(&self) -> u64 {
        match &self.repr {
            Repr::Sparse(sparse) => {
                // Linear counting over the 2^25 sparse buckets. The buffer is
                // folded in without flushing so the call stays side-effect
                // free: occupied buckets are the canonical entries plus the
                // buffered indices not already in the list.
                let mut occupied = sparse.list.len() as u64;
                if !sparse.tmp_set.is_empty() {
                    let mut pending: Vec<u32> =
                        sparse.tmp_set.iter().map(|&e| sparse_index(e)).collect();
                    pending.sort_unstable();
                    pending.dedup();
                    occupied += pending
                        .iter()
                        .filter(|&&idx| {
                            sparse
                                .list
                                .binary_search_by_key(&idx, |&e| sparse_index(e))
                                .is_err()
                        })
                        .count() as u64;
                }
                let buckets = SPARSE_BUCKETS as f64;
                linear_counting(buckets, buckets - occupied as f64) as u64
            }
            Repr::Normal(dense) => {
                let m = self.buckets() as f64;
                let raw = alpha(self.buckets()) * m * m / dense.sum_inverse_powers;
                let corrected = if raw <= 5.0 * m {
                    (raw - estimate_bias(raw, self.p)).max(0.0)
                } else {
                    raw
                };
                if dense.zero_registers != 0 {
                    let linear = linear_counting(m, f64::from(dense.zero_registers));
                    if linear <= threshold(self.p) {
                        return linear as u64;
                    }
                }
                corrected as u64
            }
        }
    }

    fn reset(&mut self) {
        self.repr = Repr::Sparse(SparseRepr::default());
    }

    fn name(&self) -> &'static str {
        "HyperLogLog++"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(3 => false; "p below range")]
    #[test_case(4 => true; "p lower bound")]
    #[test_case(18 => true; "p upper bound")]
    #[test_case(19 => false; "p above range")]
    fn test_parameter_validation(p: u32) -> bool {
        HyperLogLogPlusPlus::new(p).is_ok()
    }

    #[test]
    fn test_sparse_encode_decode_implicit_rho() {
        let hllpp = HyperLogLogPlusPlus::new(14).unwrap();
        // Sparse index with a non-zero 11-bit tail: implicit-rho entry.
        // idx' = (5 << 11) | 0b100, so the dense index is 5 and the tail
        // 0b00000000100 has 8 leading zeros within 11 bits -> rho = 9.
        let idx_prime: u64 = (5 << 11) | 0b100;
        let hash = idx_prime << 39;
        let encoded = hllpp.encode_hash(hash);
        assert_eq!(encoded & 1, 0);
        assert_eq!(sparse_index(encoded), idx_prime as u32);
        let (idx, r) = hllpp.decode_hash(encoded);
        assert_eq!(idx, 5);
        assert_eq!(r, 9);
    }

    #[test]
    fn test_sparse_encode_decode_explicit_rho() {
        let hllpp = HyperLogLogPlusPlus::new(14).unwrap();
        // All-zero index tail: the encoder must store rho' explicitly.
        // Low 39 hash bits = 1 -> rho' = 39.
        let hash = (7u64 << (11 + 39)) | 1;
        let encoded = hllpp.encode_hash(hash);
        assert_eq!(encoded & 1, 1);
        let (idx, r) = hllpp.decode_hash(encoded);
        assert_eq!(idx, 7);
        // rho' = 39 plus the 11 all-zero tail bits.
        assert_eq!(r, 50);
    }

    #[test]
    fn test_sparse_all_zero_remainder() {
        let hllpp = HyperLogLogPlusPlus::new(14).unwrap();
        // Hash = index bits only, remainder all zero: rho' = 39 + 1.
        let hash = 7u64 << (11 + 39);
        let encoded = hllpp.encode_hash(hash);
        assert_eq!(encoded & 1, 1);
        let (_, r) = hllpp.decode_hash(encoded);
        assert_eq!(r, 40 + 11);
    }

    #[test]
    fn test_duplicate_index_keeps_larger_rho() {
        let hllpp = HyperLogLogPlusPlus::new(14).unwrap();
        // Implicit entries for one index are identical regardless of the
        // hash remainder.
        let idx_prime: u64 = (3 << 11) | 1;
        let e1 = hllpp.encode_hash((idx_prime << 39) | (1 << 38));
        let e2 = hllpp.encode_hash(idx_prime << 39);
        assert_eq!(e1, e2);

        // Explicit entries with the same index dedup to the larger rho.
        let idx_zero_tail: u64 = 9 << 11;
        let a = hllpp.encode_hash((idx_zero_tail << 39) | (1 << 38)); // rho' = 1
        let b = hllpp.encode_hash((idx_zero_tail << 39) | 1); // rho' = 39
        let deduped = sorted_dedup(vec![a, b], hllpp.tail_bits());
        assert_eq!(deduped, vec![b]);
    }

    #[test]
    fn test_sparse_estimate_is_nearly_exact() {
        let mut hllpp = HyperLogLogPlusPlus::new(14).unwrap();
        for i in 0..10_000u32 {
            hllpp.update(i % 1_000);
        }
        assert!(hllpp.is_sparse());
        assert_eq!(hllpp.estimate(), 1_000);
    }

    #[test]
    fn test_estimate_has_no_side_effects() {
        let mut hllpp = HyperLogLogPlusPlus::new(14).unwrap();
        for i in 0..2_000u32 {
            hllpp.update(i);
        }
        // Below the flush threshold nothing has been flushed yet.
        assert_eq!(hllpp.sparse_list_len(), 0);
        let first = hllpp.estimate();
        assert_eq!(hllpp.sparse_list_len(), 0, "estimate must not flush");
        assert_eq!(hllpp.estimate(), first);
    }

    #[test]
    fn test_flush_at_buffer_threshold() {
        // A few sparse-index collisions are expected among 5000 ids, so the
        // buffer crosses FLUSH_SIZE slightly after 4096 inserts.
        let mut hllpp = HyperLogLogPlusPlus::new(18).unwrap();
        for i in 0..5_000u32 {
            hllpp.update(i);
        }
        assert!(hllpp.is_sparse());
        assert_eq!(hllpp.sparse_list_len(), FLUSH_SIZE);
        assert_eq!(hllpp.estimate(), 4_998);
    }

    #[test]
    fn test_conversion_to_dense_at_bit_cost_crossover() {
        // p = 4: dense cost is 6 * 16 = 96 bits, so the first flush always
        // crosses over.
        let mut hllpp = HyperLogLogPlusPlus::new(4).unwrap();
        for i in 0..5_000u32 {
            hllpp.update(i);
        }
        assert!(!hllpp.is_sparse());

        // p = 18: dense cost is 1.5 Mbit; one flush of 4096 entries stays
        // sparse (see test_flush_at_buffer_threshold).
    }

    #[test]
    fn test_conversion_is_one_way_and_preserves_counts() {
        let mut hllpp = HyperLogLogPlusPlus::new(10).unwrap();
        let mut last_sparse_estimate = 0;
        for i in 0..60_000u32 {
            if hllpp.is_sparse() {
                last_sparse_estimate = hllpp.estimate();
            }
            hllpp.update(i);
        }
        assert!(!hllpp.is_sparse());
        let dense_estimate = hllpp.estimate();
        assert!(dense_estimate > last_sparse_estimate);
        // p = 10 keeps the estimate within a few RSE of the true 60k.
        assert!(
            (54_000..=66_000).contains(&dense_estimate),
            "estimate = {dense_estimate}"
        );
    }

    #[test]
    fn test_merge_requires_same_precision() {
        let mut a = HyperLogLogPlusPlus::new(12).unwrap();
        let b = HyperLogLogPlusPlus::new(13).unwrap();
        assert!(matches!(
            a.merge(&b),
            Err(SketchError::IncompatibleMerge { .. })
        ));
    }

    #[test]
    fn test_sparse_sparse_merge_equals_serial() {
        let mut serial = HyperLogLogPlusPlus::new(14).unwrap();
        let mut lhs = HyperLogLogPlusPlus::new(14).unwrap();
        let mut rhs = HyperLogLogPlusPlus::new(14).unwrap();
        for i in 0..3_000u32 {
            serial.update(i);
            if i % 2 == 0 {
                lhs.update(i);
            } else {
                rhs.update(i);
            }
        }
        lhs.merge(&rhs).unwrap();
        assert!(lhs.is_sparse());
        // Sparse merges are unions of canonical lists: exact agreement.
        assert_eq!(lhs.estimate(), serial.estimate());
    }

    #[test]
    fn test_merge_with_dense_operand_forces_conversion() {
        let mut sparse = HyperLogLogPlusPlus::new(10).unwrap();
        for i in 0..100u32 {
            sparse.update(i);
        }
        let mut dense = HyperLogLogPlusPlus::new(10).unwrap();
        for i in 100..60_000u32 {
            dense.update(i);
        }
        assert!(!dense.is_sparse());

        let mut merged = sparse.clone();
        merged.merge(&dense).unwrap();
        assert!(!merged.is_sparse());

        // Same union the other way round.
        let mut merged_rev = dense.clone();
        merged_rev.merge(&sparse).unwrap();
        assert_eq!(merged.estimate(), merged_rev.estimate());
    }

    #[test]
    fn test_merge_idempotent() {
        let mut hllpp = HyperLogLogPlusPlus::new(14).unwrap();
        for i in 0..2_000u32 {
            hllpp.update(i);
        }
        let before = hllpp.estimate();
        let copy = hllpp.clone();
        hllpp.merge(&copy).unwrap();
        assert_eq!(hllpp.estimate(), before);
    }

    #[test]
    fn test_reset_returns_to_sparse() {
        let mut hllpp = HyperLogLogPlusPlus::new(4).unwrap();
        for i in 0..10_000u32 {
            hllpp.update(i);
        }
        assert!(!hllpp.is_sparse());
        hllpp.reset();
        assert!(hllpp.is_sparse());
        assert_eq!(hllpp.estimate(), 0);
    }
}
