//! Recursive Length Prefix (RLP) encoding and decoding.
//!
//! Decoded items are zero-copy views over the input buffer: an
//! [`RlpItem`] records the positions of its lead byte and payload and
//! borrows the buffer it was decoded from. Lists are traversed lazily;
//! child items are decoded on demand and reference the same buffer, so
//! decoding never builds a nested owned tree.
//!
//! Two decoder configurations are exposed as process-wide constants:
//! [`RLP_STRICT`] rejects non-canonical encodings, [`RLP_LENIENT`]
//! tolerates non-minimal length encodings. Both reject truncated input.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod data_type;
mod decode;
mod error;
mod item;
mod list;

pub mod encode;
pub mod integers;

pub use data_type::{
    DataType, LIST_LONG_OFFSET, LIST_SHORT_OFFSET, MIN_LONG_DATA_LEN, STRING_LONG_OFFSET,
    STRING_SHORT_OFFSET,
};
pub use decode::{RlpDecoder, RLP_LENIENT, RLP_STRICT};
pub use encode::{encode_string, length_of_length};
pub use error::{DecodeError, Result};
pub use item::{RlpItem, RlpString};
pub use list::{RlpList, RlpListIter};

#[doc(no_inline)]
pub use bytes::{self, Buf, BufMut, Bytes, BytesMut};
