//! Header assembly and string encoding.
//!
//! List encoding from pre-encoded children lives on
//! [`RlpList::with_elements`](crate::RlpList::with_elements) and routes
//! through [`put_header`].

use crate::data_type::{
    LIST_LONG_OFFSET, LIST_SHORT_OFFSET, MIN_LONG_DATA_LEN, STRING_LONG_OFFSET,
    STRING_SHORT_OFFSET,
};
use crate::integers;
use bytes::{BufMut, Bytes, BytesMut};

/// Length of the header for a payload of `payload_length` bytes: one
/// lead byte, plus the minimal length field for long forms.
pub const fn length_of_length(payload_length: usize) -> usize {
    if payload_length < MIN_LONG_DATA_LEN {
        1
    } else {
        1 + integers::num_bytes(payload_length as u64)
    }
}

/// Writes an item header for a payload of `payload_length` bytes.
///
/// Returns the number of header bytes written. The single-byte form
/// (payload `< 0x80` encoded as itself) is the caller's concern; this
/// always emits an explicit header.
pub fn put_header(list: bool, payload_length: usize, out: &mut dyn BufMut) -> usize {
    if payload_length < MIN_LONG_DATA_LEN {
        let offset = if list { LIST_SHORT_OFFSET } else { STRING_SHORT_OFFSET };
        out.put_u8(offset + payload_length as u8);
        1
    } else {
        let offset = if list { LIST_LONG_OFFSET } else { STRING_LONG_OFFSET };
        out.put_u8(offset + integers::num_bytes(payload_length as u64) as u8);
        1 + integers::put_u64(payload_length as u64, out)
    }
}

/// Encoded length of `payload` as a string item.
pub fn string_length(payload: &[u8]) -> usize {
    if payload.len() == 1 && payload[0] < STRING_SHORT_OFFSET {
        1
    } else {
        length_of_length(payload.len()) + payload.len()
    }
}

/// Writes `payload` as a string item at the buffer's cursor.
///
/// A single byte below `0x80` is its own encoding; everything else gets
/// a header. Returns the number of bytes written.
pub fn put_string(payload: &[u8], out: &mut dyn BufMut) -> usize {
    if payload.len() == 1 && payload[0] < STRING_SHORT_OFFSET {
        out.put_u8(payload[0]);
        return 1
    }
    let header = put_header(false, payload.len(), out);
    out.put_slice(payload);
    header + payload.len()
}

/// Encodes `payload` as a string item.
pub fn encode_string(payload: &[u8]) -> Bytes {
    let mut out = BytesMut::with_capacity(string_length(payload));
    put_string(payload, &mut out);
    out.freeze()
}
