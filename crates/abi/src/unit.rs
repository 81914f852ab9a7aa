use crate::bits;
use crate::error::ValidationError;
use num_bigint::{BigInt, Sign};

/// Width in bytes of the fixed slot every unit value is emitted into.
pub const UNIT_LENGTH_BYTES: usize = 32;

/// Declared shape of a fixed-width integer slot: bit width plus
/// signedness.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitType {
    /// Number of bits in the slot, sign bit included for signed slots.
    pub bit_length: usize,
    /// True when the slot holds only non-negative values.
    pub unsigned: bool,
}

impl UnitType {
    /// A slot declaration.
    pub const fn new(bit_length: usize, unsigned: bool) -> Self {
        Self { bit_length, unsigned }
    }

    /// Validates that `val` fits this slot: bit width and signedness.
    pub fn validate(&self, val: i64) -> Result<(), ValidationError> {
        self.validate_element(val)?;
        if self.unsigned && val < 0 {
            return Err(ValidationError::NegativeUnsigned)
        }
        Ok(())
    }

    /// Bit-width check alone, for elements of a fixed-size array whose
    /// signedness is validated once for the whole array.
    pub fn validate_element(&self, val: i64) -> Result<(), ValidationError> {
        // A negative value needs its sign bit on top of the
        // two's-complement magnitude bits.
        let bit_len = if val >= 0 {
            bits::bit_len(val as u64)
        } else {
            bits::twos_complement_bit_len(val) + 1
        };
        if bit_len > self.bit_length {
            return Err(ValidationError::ExceedsBitLimit { bit_len, limit: self.bit_length })
        }
        Ok(())
    }

    /// [`validate`](Self::validate) for arbitrary-precision values.
    pub fn validate_big(&self, val: &BigInt) -> Result<(), ValidationError> {
        self.validate_big_element(val)?;
        if self.unsigned && val.sign() == Sign::Minus {
            return Err(ValidationError::NegativeUnsigned)
        }
        Ok(())
    }

    /// [`validate_element`](Self::validate_element) for
    /// arbitrary-precision values.
    pub fn validate_big_element(&self, val: &BigInt) -> Result<(), ValidationError> {
        let bit_len = match val.sign() {
            Sign::Minus => bits::big_bit_len(val) + 1,
            _ => bits::big_bit_len(val),
        };
        if bit_len > self.bit_length as u64 {
            return Err(ValidationError::ExceedsBitLimit {
                bit_len: bit_len as usize,
                limit: self.bit_length,
            })
        }
        Ok(())
    }
}
