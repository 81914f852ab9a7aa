use crate::data_type::{
    DataType, LIST_LONG_OFFSET, LIST_SHORT_OFFSET, MIN_LONG_DATA_LEN, STRING_LONG_OFFSET,
    STRING_SHORT_OFFSET,
};
use crate::error::{DecodeError, Result};
use crate::integers;
use crate::item::{RlpItem, RlpString};
use crate::list::RlpList;

/// An RLP decoder, fixed to one canonicality mode.
///
/// All classification and offset arithmetic is shared between the two
/// modes; only the canonicality checks branch on `lenient`. Use the
/// process-wide constants [`RLP_STRICT`] and [`RLP_LENIENT`] rather than
/// constructing decoders ad hoc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RlpDecoder {
    lenient: bool,
}

/// Rejects non-canonical encodings: leading-zero length fields, long
/// forms for payloads the short form covers, and redundant single-byte
/// headers.
pub const RLP_STRICT: RlpDecoder = RlpDecoder::new(false);

/// Tolerates the non-minimal encodings [`RLP_STRICT`] rejects. Truncated
/// input and out-of-range lengths are still errors.
pub const RLP_LENIENT: RlpDecoder = RlpDecoder::new(true);

impl RlpDecoder {
    /// A decoder with the given canonicality mode.
    pub const fn new(lenient: bool) -> Self {
        Self { lenient }
    }

    /// True when non-canonical encodings are tolerated.
    pub const fn is_lenient(&self) -> bool {
        self.lenient
    }

    /// Wraps the item at the start of `buffer`.
    pub fn wrap<'a>(&self, buffer: &'a [u8]) -> Result<RlpItem<'a>> {
        self.wrap_within(buffer, 0, buffer.len())
    }

    /// Wraps the item whose lead byte is at `index`.
    pub fn wrap_at<'a>(&self, buffer: &'a [u8], index: usize) -> Result<RlpItem<'a>> {
        self.wrap_within(buffer, index, buffer.len())
    }

    /// Wraps the item at the start of `buffer`, requiring it to be a
    /// string.
    pub fn wrap_string<'a>(&self, buffer: &'a [u8]) -> Result<RlpString<'a>> {
        self.wrap(buffer)?.as_string()
    }

    /// Wraps the item at the start of `buffer`, requiring it to be a
    /// list.
    pub fn wrap_list<'a>(&self, buffer: &'a [u8]) -> Result<RlpList<'a>> {
        self.wrap(buffer)?.as_list()
    }

    /// Wraps the list whose lead byte is at `index`.
    pub fn wrap_list_at<'a>(&self, buffer: &'a [u8], index: usize) -> Result<RlpList<'a>> {
        self.wrap_at(buffer, index)?.as_list()
    }

    /// Wraps the item at `index`, requiring it to end at or before
    /// `limit`. `limit` must not exceed `buffer.len()`.
    pub(crate) fn wrap_within<'a>(
        &self,
        buffer: &'a [u8],
        index: usize,
        limit: usize,
    ) -> Result<RlpItem<'a>> {
        if index >= limit {
            return Err(DecodeError::InputTooShort { offset: index })
        }
        let lead = *buffer.get(index).ok_or(DecodeError::InputTooShort { offset: index })?;
        let data_type = DataType::of(lead);

        let (data_index, end_index) = if lead < STRING_SHORT_OFFSET {
            // The byte is its own payload.
            (index, index + 1)
        } else if !data_type.is_long() {
            let offset = if data_type.is_list() { LIST_SHORT_OFFSET } else { STRING_SHORT_OFFSET };
            let payload_length = (lead - offset) as usize;
            let data_index = index + 1;

            if !self.lenient && !data_type.is_list() && payload_length == 1 {
                match buffer.get(data_index) {
                    Some(&b) if data_index < limit => {
                        if b < STRING_SHORT_OFFSET {
                            return Err(DecodeError::NonCanonicalSingleByte { offset: data_index })
                        }
                    }
                    _ => return Err(DecodeError::InputTooShort { offset: data_index }),
                }
            }

            (data_index, data_index + payload_length)
        } else {
            let offset = if data_type.is_list() { LIST_LONG_OFFSET } else { STRING_LONG_OFFSET };
            // 1..=8 by construction of the lead-byte ranges.
            let len_of_len = (lead - offset) as usize;
            let length_index = index + 1;
            let data_index = length_index + len_of_len;
            if data_index > limit {
                return Err(DecodeError::InputTooShort { offset: length_index })
            }

            let declared = if self.lenient {
                be_u64(&buffer[length_index..data_index])
            } else {
                integers::get_u64(buffer, length_index, len_of_len)?
            };
            let payload_length = usize::try_from(declared)
                .map_err(|_| DecodeError::Overflow { offset: length_index })?;
            if !self.lenient && payload_length < MIN_LONG_DATA_LEN {
                return Err(DecodeError::NonCanonicalSize { offset: length_index, payload_length })
            }

            let end_index = data_index
                .checked_add(payload_length)
                .ok_or(DecodeError::Overflow { offset: length_index })?;
            (data_index, end_index)
        };

        if end_index > limit {
            return Err(DecodeError::InputTooShort { offset: index })
        }

        Ok(RlpItem { buffer, index, data_index, end_index, data_type, lenient: self.lenient })
    }
}

/// Big-endian fold without the canonicality checks, for lenient-mode
/// length fields. At most 8 bytes.
fn be_u64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0, |acc, &b| (acc << 8) | u64::from(b))
}
