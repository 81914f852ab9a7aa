use thiserror::Error;

/// A syntactically well-formed integer that violates its declared slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value needs more bits than the slot declares.
    #[error("exceeds bit limit: {bit_len} > {limit}")]
    ExceedsBitLimit {
        /// Bits the value requires, sign bit included for negatives.
        bit_len: usize,
        /// The declared slot width.
        limit: usize,
    },
    /// A negative value offered to an unsigned slot.
    #[error("negative value for unsigned type")]
    NegativeUnsigned,
}

/// Error reported by a type-signature parser: a human-readable message
/// tagged with the character offset at which parsing failed.
///
/// The parser is an external collaborator; this crate consumes these
/// errors and never constructs one except through
/// [`ParseError::empty_parameter`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub message: String,
    /// Character offset into the signature text.
    pub offset: usize,
}

impl ParseError {
    /// An offset-tagged parse error.
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self { message: message.into(), offset }
    }

    /// A type-parameter slot with no characters, e.g. the leading slot
    /// of `"(,uint256)"`, reported at the offset of the empty slot.
    pub fn empty_parameter(offset: usize) -> Self {
        Self::new("empty parameter", offset)
    }
}
