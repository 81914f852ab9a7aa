//! Minimal-length big-endian integer codec.
//!
//! The canonical representation of an unsigned integer is the shortest
//! big-endian byte sequence with no leading zero byte; zero is the empty
//! sequence. Decoding rejects a leading zero byte regardless of the RLP
//! decoder's canonicality mode, since no canonical encoding produces one.
//!
//! The arbitrary-precision variants operate on pure magnitudes: this
//! codec never represents negative numbers.

use crate::error::{DecodeError, Result};
use arrayvec::ArrayVec;
use bytes::BufMut;
use num_bigint::BigUint;

/// Minimal byte length of `val`'s big-endian representation; 0 for 0.
///
/// Agrees with `to_bytes(val).len()` for every value.
pub const fn num_bytes(val: u64) -> usize {
    ((u64::BITS - val.leading_zeros()) as usize + 7) / 8
}

/// Shortest big-endian form of `val`; empty for 0.
pub fn to_bytes(val: u64) -> ArrayVec<u8, 8> {
    let mut out = ArrayVec::new();
    out.extend(zeroless_view(&val.to_be_bytes()).iter().copied());
    out
}

/// Writes the minimal big-endian form of `val` at the buffer's cursor.
///
/// Returns the number of bytes written; writes nothing for 0.
pub fn put_u64(val: u64, out: &mut dyn BufMut) -> usize {
    let be = val.to_be_bytes();
    let trimmed = zeroless_view(&be);
    out.put_slice(trimmed);
    trimmed.len()
}

fn zeroless_view(v: &[u8]) -> &[u8] {
    &v[v.iter().take_while(|&&b| b == 0).count()..]
}

fn static_left_pad<const LEN: usize>(data: &[u8], offset: usize) -> Result<[u8; LEN]> {
    if data.len() > LEN {
        return Err(DecodeError::LengthOutOfRange { offset, got: data.len() })
    }

    let mut v = [0; LEN];

    if data.is_empty() {
        return Ok(v)
    }

    if data[0] == 0 {
        return Err(DecodeError::LeadingZero { offset })
    }

    v[LEN - data.len()..].copy_from_slice(data);
    Ok(v)
}

fn range_at(buffer: &[u8], index: usize, len: usize) -> Result<&[u8]> {
    index
        .checked_add(len)
        .and_then(|end| buffer.get(index..end))
        .ok_or(DecodeError::InputTooShort { offset: index })
}

macro_rules! impl_get_uint {
    ($(#[$attr:meta])* $name:ident, $t:ty) => {
        $(#[$attr])*
        pub fn $name(buffer: &[u8], index: usize, len: usize) -> Result<$t> {
            if len > core::mem::size_of::<$t>() {
                return Err(DecodeError::LengthOutOfRange { offset: index, got: len })
            }
            let bytes = range_at(buffer, index, len)?;
            Ok(<$t>::from_be_bytes(static_left_pad(bytes, index)?))
        }
    };
}

impl_get_uint!(
    /// Reconstructs a `u8` over exactly `len` bytes starting at `index`.
    ///
    /// `len == 0` decodes to 0 and never fails; a leading `0x00` byte is
    /// rejected with [`DecodeError::LeadingZero`]; `len` outside
    /// `[0, 1]` is rejected with [`DecodeError::LengthOutOfRange`].
    get_u8,
    u8
);
impl_get_uint!(
    /// Reconstructs a `u16` over exactly `len` bytes starting at `index`.
    get_u16,
    u16
);
impl_get_uint!(
    /// Reconstructs a `u32` over exactly `len` bytes starting at `index`.
    get_u32,
    u32
);
impl_get_uint!(
    /// Reconstructs a `u64` over exactly `len` bytes starting at `index`.
    get_u64,
    u64
);

/// Reconstructs a pure-magnitude big integer over exactly `len` bytes
/// starting at `index`.
///
/// Any width is in range; the leading-zero rule still applies.
pub fn get_biguint(buffer: &[u8], index: usize, len: usize) -> Result<BigUint> {
    let bytes = range_at(buffer, index, len)?;
    if bytes.first() == Some(&0) {
        return Err(DecodeError::LeadingZero { offset: index })
    }
    Ok(BigUint::from_bytes_be(bytes))
}

/// Minimal byte length of `val`'s big-endian representation; 0 for 0.
pub fn num_bytes_biguint(val: &BigUint) -> usize {
    ((val.bits() + 7) / 8) as usize
}

/// Shortest big-endian form of `val`; empty for 0.
pub fn to_bytes_biguint(val: &BigUint) -> Vec<u8> {
    if val.bits() == 0 {
        return Vec::new()
    }
    val.to_bytes_be()
}

/// Writes the minimal big-endian form of `val` at the buffer's cursor.
///
/// Returns the number of bytes written; writes nothing for 0.
pub fn put_biguint(val: &BigUint, out: &mut dyn BufMut) -> usize {
    let bytes = to_bytes_biguint(val);
    out.put_slice(&bytes);
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;
    use hex_literal::hex;
    use proptest::prelude::*;

    #[test]
    fn minimal_encoding_fixtures() {
        let fixtures: &[(u64, &[u8])] = &[
            (0, &[]),
            (1, &hex!("01")),
            (0x7F, &hex!("7f")),
            (0x80, &hex!("80")),
            (0xFF, &hex!("ff")),
            (0x100, &hex!("0100")),
            (0xFFFF, &hex!("ffff")),
            (0x10000, &hex!("010000")),
            (u64::MAX, &hex!("ffffffffffffffff")),
        ];
        for &(val, expected) in fixtures {
            assert_eq!(&to_bytes(val)[..], expected, "value {val}");
            assert_eq!(num_bytes(val), expected.len(), "value {val}");
        }
    }

    #[test]
    fn get_rejects_leading_zero() {
        assert_eq!(
            get_u64(&hex!("00f4"), 0, 2),
            Err(DecodeError::LeadingZero { offset: 0 })
        );
        assert_eq!(
            get_u16(&hex!("ff0005"), 1, 2),
            Err(DecodeError::LeadingZero { offset: 1 })
        );
        assert_eq!(
            get_biguint(&hex!("00ffffffffffffffffff"), 0, 10),
            Err(DecodeError::LeadingZero { offset: 0 })
        );
    }

    #[test]
    fn get_zero_length_is_zero() {
        assert_eq!(get_u8(&[], 0, 0), Ok(0));
        assert_eq!(get_u64(&hex!("ff"), 1, 0), Ok(0));
        assert_eq!(get_biguint(&[], 0, 0), Ok(BigUint::from(0_u8)));
    }

    #[test]
    fn get_rejects_length_out_of_range() {
        assert_eq!(
            get_u8(&hex!("0102"), 0, 2),
            Err(DecodeError::LengthOutOfRange { offset: 0, got: 2 })
        );
        assert_eq!(
            get_u64(&[0xFF; 9], 0, 9),
            Err(DecodeError::LengthOutOfRange { offset: 0, got: 9 })
        );
    }

    #[test]
    fn get_rejects_short_buffer() {
        assert_eq!(
            get_u32(&hex!("0102"), 0, 4),
            Err(DecodeError::InputTooShort { offset: 0 })
        );
        assert_eq!(
            get_u64(&hex!("01"), usize::MAX, 8),
            Err(DecodeError::InputTooShort { offset: usize::MAX })
        );
    }

    #[test]
    fn put_writes_at_cursor() {
        let mut out = BytesMut::new();
        out.put_u8(0xB7);
        assert_eq!(put_u64(0x0504, &mut out), 2);
        assert_eq!(&out[..], &hex!("b70504"));

        assert_eq!(put_u64(0, &mut out), 0);
        assert_eq!(&out[..], &hex!("b70504"));
    }

    #[test]
    fn biguint_roundtrip() {
        let val = BigUint::parse_bytes(b"0100020003000400050006000700080009", 16).unwrap();
        let bytes = to_bytes_biguint(&val);
        assert_eq!(bytes.len(), num_bytes_biguint(&val));
        assert_eq!(get_biguint(&bytes, 0, bytes.len()), Ok(val));

        let zero = BigUint::from(0_u8);
        assert!(to_bytes_biguint(&zero).is_empty());
        assert_eq!(num_bytes_biguint(&zero), 0);

        let mut out = BytesMut::new();
        assert_eq!(put_biguint(&zero, &mut out), 0);
        assert!(out.is_empty());
    }

    proptest! {
        #[test]
        fn minimality(val in any::<u64>()) {
            let bytes = to_bytes(val);
            prop_assert_eq!(bytes.len(), num_bytes(val));
            if val == 0 {
                prop_assert!(bytes.is_empty());
            } else {
                prop_assert_ne!(bytes[0], 0);
            }
            prop_assert_eq!(get_u64(&bytes, 0, bytes.len()).unwrap(), val);
        }
    }
}
