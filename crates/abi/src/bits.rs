//! Bit-length calculators.
//!
//! The two's-complement variant is a separate function rather than a
//! sign-magnitude special case inside [`bit_len`]: the `-2^(n-1)`
//! boundary is easy to get wrong when the two are merged.

use num_bigint::{BigInt, Sign};

/// Number of bits in the binary representation of `val`; 0 for 0.
pub const fn bit_len(val: u64) -> usize {
    (u64::BITS - val.leading_zeros()) as usize
}

/// Bit length of a negative value as it appears in minimal
/// two's-complement form: the bit length of `(-val) - 1`, which is
/// `!val`.
///
/// `-1` requires 0 bits beyond the sign; `-128` requires 7 and so
/// exactly fits an 8-bit signed slot. `val` must be negative.
pub const fn twos_complement_bit_len(val: i64) -> usize {
    debug_assert!(val < 0);
    (i64::BITS - (!val).leading_zeros()) as usize
}

/// Bit length of an arbitrary-precision value, following the
/// `java.math.BigInteger::bitLength` convention: magnitude bits for
/// non-negative values, two's-complement bits for negative ones.
pub fn big_bit_len(val: &BigInt) -> u64 {
    match val.sign() {
        Sign::Minus => (val.magnitude() - 1u32).bits(),
        _ => val.bits(),
    }
}
