use crate::data_type::DataType;
use crate::decode::RlpDecoder;
use crate::error::{DecodeError, Result};
use crate::integers;
use crate::list::RlpList;
use bytes::Bytes;
use num_bigint::BigUint;

/// A decoded RLP item: a view over the buffer it was decoded from.
///
/// The item never copies payload bytes. It records the position of its
/// lead byte (`index`), of the first payload byte (`data_index`) and of
/// one past the last payload byte (`end_index`), with
/// `index <= data_index <= end_index <= buffer.len()`. Items are only
/// constructed by a [`RlpDecoder`] and are immutable afterwards.
#[derive(Clone, Copy, Debug)]
pub struct RlpItem<'a> {
    pub(crate) buffer: &'a [u8],
    pub(crate) index: usize,
    pub(crate) data_index: usize,
    pub(crate) end_index: usize,
    pub(crate) data_type: DataType,
    pub(crate) lenient: bool,
}

/// Items are equal when their encodings are byte-for-byte equal.
impl PartialEq for RlpItem<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.encoding() == other.encoding()
    }
}

impl Eq for RlpItem<'_> {}

macro_rules! impl_as_uint {
    ($(#[$attr:meta])* $name:ident, $get:ident, $t:ty) => {
        $(#[$attr])*
        pub fn $name(&self) -> Result<$t> {
            if self.is_list() {
                return Err(DecodeError::UnexpectedList { offset: self.index })
            }
            integers::$get(self.buffer, self.data_index, self.data_length())
        }
    };
}

impl<'a> RlpItem<'a> {
    /// Position of the lead byte.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Position of the first payload byte.
    pub const fn data_index(&self) -> usize {
        self.data_index
    }

    /// One past the last payload byte.
    pub const fn end_index(&self) -> usize {
        self.end_index
    }

    /// The first byte of the encoding.
    pub fn lead_byte(&self) -> u8 {
        self.buffer[self.index]
    }

    /// Shape of this item.
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    /// True when the payload is a concatenation of child encodings.
    pub const fn is_list(&self) -> bool {
        self.data_type.is_list()
    }

    /// The canonicality mode this item was decoded under.
    pub const fn is_lenient(&self) -> bool {
        self.lenient
    }

    /// The item's full encoding: lead byte, length field and payload.
    pub fn encoding(&self) -> &'a [u8] {
        &self.buffer[self.index..self.end_index]
    }

    /// The item's payload bytes.
    pub fn data(&self) -> &'a [u8] {
        &self.buffer[self.data_index..self.end_index]
    }

    /// `end_index - index`.
    pub const fn encoding_length(&self) -> usize {
        self.end_index - self.index
    }

    /// `end_index - data_index`.
    pub const fn data_length(&self) -> usize {
        self.end_index - self.data_index
    }

    /// Materializes the full encoding into an owned buffer.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.encoding())
    }

    /// Rewraps this item's own encoding from offset 0, yielding a
    /// structurally independent view over the same bytes.
    pub fn duplicate(&self, decoder: RlpDecoder) -> Result<RlpItem<'a>> {
        decoder.wrap(self.encoding())
    }

    /// Narrows to a string item, or fails with
    /// [`DecodeError::UnexpectedList`].
    pub fn as_string(self) -> Result<RlpString<'a>> {
        if self.is_list() {
            return Err(DecodeError::UnexpectedList { offset: self.index })
        }
        Ok(RlpString(self))
    }

    /// Narrows to a list item, or fails with
    /// [`DecodeError::UnexpectedString`].
    pub fn as_list(self) -> Result<RlpList<'a>> {
        if !self.is_list() {
            return Err(DecodeError::UnexpectedString { offset: self.index })
        }
        Ok(RlpList(self))
    }

    impl_as_uint!(
        /// Decodes the payload as a canonical minimal big-endian `u8`.
        ///
        /// Leading zeroes are rejected regardless of the mode this item
        /// was decoded under.
        as_u8,
        get_u8,
        u8
    );
    impl_as_uint!(
        /// Decodes the payload as a canonical minimal big-endian `u16`.
        as_u16,
        get_u16,
        u16
    );
    impl_as_uint!(
        /// Decodes the payload as a canonical minimal big-endian `u32`.
        as_u32,
        get_u32,
        u32
    );
    impl_as_uint!(
        /// Decodes the payload as a canonical minimal big-endian `u64`.
        as_u64,
        get_u64,
        u64
    );

    /// Decodes the payload as a canonical pure-magnitude big integer.
    pub fn as_biguint(&self) -> Result<BigUint> {
        if self.is_list() {
            return Err(DecodeError::UnexpectedList { offset: self.index })
        }
        integers::get_biguint(self.buffer, self.data_index, self.data_length())
    }

    /// Interprets the payload as UTF-8.
    pub fn as_str(&self) -> Result<&'a str> {
        if self.is_list() {
            return Err(DecodeError::UnexpectedList { offset: self.index })
        }
        core::str::from_utf8(self.data())
            .map_err(|_| DecodeError::InvalidUtf8 { offset: self.data_index })
    }
}

/// A leaf item whose payload is an opaque byte range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RlpString<'a>(pub(crate) RlpItem<'a>);

impl<'a> RlpString<'a> {
    /// The underlying item view.
    pub const fn item(&self) -> &RlpItem<'a> {
        &self.0
    }

    /// Widens back to an untyped item.
    pub const fn into_item(self) -> RlpItem<'a> {
        self.0
    }
}

impl<'a> std::ops::Deref for RlpString<'a> {
    type Target = RlpItem<'a>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
