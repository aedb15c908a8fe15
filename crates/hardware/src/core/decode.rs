//! Operand decode logic.
//!
//! Splits a packed 16-bit half-precision operand into the fields consumed
//! by the multiply stage: sign, biased exponent, implicit-one-augmented
//! significand, and an exact-zero flag. Decoding is purely combinational;
//! it is recomputed every tick from whichever operand pair is presented to
//! the pipeline and holds no state of its own.

use crate::common::constants::IMPLICIT_BIT;
use crate::common::fields::HalfBits;

/// A half-precision operand decoded into its arithmetic components.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct DecodedOperand {
    /// Sign bit; `true` for negative.
    pub sign: bool,
    /// 5-bit biased exponent, zero-extended.
    pub exponent: u16,
    /// 11-bit significand: the implicit leading one (when the stored
    /// exponent is nonzero) above the 10 stored fraction bits.
    pub significand: u16,
    /// Whether the operand encodes exact zero (exponent and fraction both zero).
    pub is_zero: bool,
}

/// Decodes a packed 16-bit operand.
///
/// The implicit leading significand bit is appended only when the stored
/// exponent is nonzero. Subnormal encodings (zero exponent, nonzero
/// fraction) therefore decode with no implicit bit and are *not* flagged
/// as zero; they flow through the ordinary datapath. NaN and Infinity
/// patterns are likewise not special-cased.
pub fn decode(bits: u16) -> DecodedOperand {
    let exponent = bits.exponent();
    let fraction = bits.fraction();
    let implicit = if exponent != 0 { IMPLICIT_BIT } else { 0 };
    DecodedOperand {
        sign: bits.sign(),
        exponent,
        significand: implicit | fraction,
        is_zero: exponent == 0 && fraction == 0,
    }
}
