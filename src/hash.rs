//! ## Hashing
//! Deterministic splitmix64-style mixing used as the single source of
//! randomness for every bit-pattern extraction in the crate.
//!
//! The mixer is a bijection on `u64`, so distinct identifiers always map to
//! distinct 64-bit hashes. It is not a cryptographic hash and is never used
//! as one.

/// Mix a 64-bit value through the splitmix64 finalizer.
#[inline]
pub const fn mix64(x: u64) -> u64 {
    let mut x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Hash a 32-bit identifier into a uniformly distributed 64-bit value.
#[inline]
pub const fn hash64(id: u32) -> u64 {
    mix64(id as u64)
}

/// Truncate a 64-bit hash to 32 bits, keeping the upper half.
#[inline]
pub const fn hash32(h: u64) -> u32 {
    (h >> 32) as u32
}

/// Rho of the low `width` bits of `value` viewed as a `width`-bit string:
/// `1 +` the number of leading zero bits, or `width + 1` when all bits are
/// zero. `width` must be in `[1, 64]`.
#[inline]
pub(crate) const fn rho(value: u64, width: u32) -> u8 {
    debug_assert!(width >= 1 && width <= 64);
    let v = if width == 64 {
        value
    } else {
        value & ((1u64 << width) - 1)
    };
    if v == 0 {
        (width + 1) as u8
    } else {
        (v.leading_zeros() - (64 - width) + 1) as u8
    }
}
