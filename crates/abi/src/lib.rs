//! Fixed-width integer validation for ABI encoding.
//!
//! An ABI encoder emits integers into fixed-width slots (for example a
//! 256-bit signed or unsigned field). Before a value is emitted it must
//! be checked against the slot's declared bit width and signedness;
//! this crate provides the bit-length calculators and the [`UnitType`]
//! validator that perform that check.
//!
//! The type-signature parser that produces slot declarations is an
//! external collaborator; only its offset-tagged [`ParseError`] is
//! defined here.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod bits;

mod error;
mod unit;

pub use error::{ParseError, ValidationError};
pub use unit::{UnitType, UNIT_LENGTH_BYTES};
