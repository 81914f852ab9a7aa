use thiserror::Error;

/// RLP decoding result.
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Error produced while interpreting bytes as RLP or as a minimal-length
/// big-endian integer.
///
/// Every variant carries the byte offset at which the problem was
/// detected, relative to the start of the buffer handed to the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The item runs past the end of the readable region.
    #[error("input too short at offset {offset}")]
    InputTooShort {
        /// Position of the item that overran the buffer.
        offset: usize,
    },
    /// A declared integer length is outside the target type's byte width.
    #[error("length out of range at offset {offset}: {got} bytes")]
    LengthOutOfRange {
        /// Position of the integer.
        offset: usize,
        /// The declared byte count.
        got: usize,
    },
    /// A canonical integer never begins with a zero byte.
    #[error("leading zero at offset {offset}")]
    LeadingZero {
        /// Position of the offending byte.
        offset: usize,
    },
    /// Long form used for a payload the short form covers.
    #[error("non-canonical length at offset {offset}: long form for {payload_length} payload bytes")]
    NonCanonicalSize {
        /// Position of the length field.
        offset: usize,
        /// The declared payload length.
        payload_length: usize,
    },
    /// A single byte below 0x80 must be its own encoding.
    #[error("non-canonical length at offset {offset}: redundant single-byte header")]
    NonCanonicalSingleByte {
        /// Position of the payload byte.
        offset: usize,
    },
    /// The declared payload length does not fit in `usize`.
    #[error("payload length overflow at offset {offset}")]
    Overflow {
        /// Position of the length field.
        offset: usize,
    },
    /// Expected a list, found a string.
    #[error("unexpected string at offset {offset}")]
    UnexpectedString {
        /// Position of the item.
        offset: usize,
    },
    /// Expected a string, found a list.
    #[error("unexpected list at offset {offset}")]
    UnexpectedList {
        /// Position of the item.
        offset: usize,
    },
    /// String payload is not valid UTF-8.
    #[error("invalid utf-8 at offset {offset}")]
    InvalidUtf8 {
        /// Position of the payload.
        offset: usize,
    },
}

impl DecodeError {
    /// Byte offset at which the problem was detected.
    pub const fn offset(&self) -> usize {
        match *self {
            Self::InputTooShort { offset } |
            Self::LengthOutOfRange { offset, .. } |
            Self::LeadingZero { offset } |
            Self::NonCanonicalSize { offset, .. } |
            Self::NonCanonicalSingleByte { offset } |
            Self::Overflow { offset } |
            Self::UnexpectedString { offset } |
            Self::UnexpectedList { offset } |
            Self::InvalidUtf8 { offset } => offset,
        }
    }
}
