//! Half-precision field extraction and packing utilities.
//!
//! Provides bit extraction functions for pulling the sign, exponent, and
//! fraction fields out of packed 16-bit half-precision encodings, and the
//! inverse packing helper used when assembling results.

use super::constants::{EXPONENT_MASK, EXPONENT_SHIFT, FRACTION_MASK, SIGN_SHIFT};

/// Trait for extracting half-precision fields from packed 16-bit values.
///
/// Implemented on `u16` so raw operand words can be queried directly.
pub trait HalfBits {
    /// Extracts the sign bit (bit 15). Returns `true` for negative values.
    fn sign(&self) -> bool;

    /// Extracts the 5-bit biased exponent field (bits 14..10).
    fn exponent(&self) -> u16;

    /// Extracts the 10-bit fraction field (bits 9..0).
    fn fraction(&self) -> u16;
}

impl HalfBits for u16 {
    #[inline(always)]
    fn sign(&self) -> bool {
        (self >> SIGN_SHIFT) & 1 != 0
    }

    #[inline(always)]
    fn exponent(&self) -> u16 {
        (self >> EXPONENT_SHIFT) & EXPONENT_MASK
    }

    #[inline(always)]
    fn fraction(&self) -> u16 {
        self & FRACTION_MASK
    }
}

/// Packs sign, biased exponent, and fraction fields into a 16-bit value.
///
/// The exponent and fraction arguments are masked to their field widths;
/// callers are expected to have already range-checked them.
///
/// # Arguments
///
/// * `sign` - Sign bit; `true` for negative.
/// * `exponent` - Biased exponent, low 5 bits used.
/// * `fraction` - Fraction, low 10 bits used.
#[inline]
pub fn pack(sign: bool, exponent: u16, fraction: u16) -> u16 {
    (u16::from(sign) << SIGN_SHIFT)
        | ((exponent & EXPONENT_MASK) << EXPONENT_SHIFT)
        | (fraction & FRACTION_MASK)
}
