/// Lead byte at or above this encodes a string with an explicit length.
pub const STRING_SHORT_OFFSET: u8 = 0x80;
/// Base for long-string lead bytes; `lead - STRING_LONG_OFFSET` is the
/// byte count of the length field.
pub const STRING_LONG_OFFSET: u8 = 0xB7;
/// Base for short-list lead bytes.
pub const LIST_SHORT_OFFSET: u8 = 0xC0;
/// Base for long-list lead bytes.
pub const LIST_LONG_OFFSET: u8 = 0xF7;
/// Payloads of this length and above must use the long form.
pub const MIN_LONG_DATA_LEN: usize = 56;

/// Shape of an RLP item, as determined by its lead byte.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// `0x00..=0xB7`: payload follows the lead byte directly, or is the
    /// lead byte itself for `0x00..=0x7F`.
    StringShort,
    /// `0xB8..=0xBF`: a 1-8 byte big-endian length field follows.
    StringLong,
    /// `0xC0..=0xF7`: concatenated child encodings follow.
    ListShort,
    /// `0xF8..=0xFF`: a 1-8 byte big-endian length field follows.
    ListLong,
}

impl DataType {
    /// Classifies a lead byte. Total over all 256 values.
    pub const fn of(lead: u8) -> Self {
        match lead {
            0x00..=0xB7 => Self::StringShort,
            0xB8..=0xBF => Self::StringLong,
            0xC0..=0xF7 => Self::ListShort,
            0xF8..=0xFF => Self::ListLong,
        }
    }

    /// True for the two list shapes.
    pub const fn is_list(self) -> bool {
        matches!(self, Self::ListShort | Self::ListLong)
    }

    /// True for the two long forms, whose payload length lives in a
    /// separate length field.
    pub const fn is_long(self) -> bool {
        matches!(self, Self::StringLong | Self::ListLong)
    }
}
