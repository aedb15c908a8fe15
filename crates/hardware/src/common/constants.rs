//! Global Datapath Constants.
//!
//! This module defines the bit-level constants of the half-precision
//! (binary16) format and of the multiplier datapath. It includes:
//! 1. **Format Constants:** Field widths, shifts, and masks for sign, exponent, and fraction.
//! 2. **Datapath Constants:** Significand, product, and rounding bit positions.
//! 3. **Classification Constants:** Exponent range limits and the overflow saturation pattern.
//! 4. **Pipeline Constants:** Register depth of the multiplier pipeline.

/// Bit position of the sign bit in a packed half-precision value.
pub const SIGN_SHIFT: u32 = 15;

/// Bit position of the exponent field in a packed half-precision value.
pub const EXPONENT_SHIFT: u32 = 10;

/// Mask for the 5-bit biased exponent field (after shifting).
pub const EXPONENT_MASK: u16 = 0x1F;

/// Mask for the 10-bit fraction field.
pub const FRACTION_MASK: u16 = 0x3FF;

/// Exponent bias of the half-precision format.
pub const EXPONENT_BIAS: i16 = 15;

/// All-ones biased exponent; the smallest exponent value that overflows.
pub const EXPONENT_SATURATED: i16 = 31;

/// Implicit leading significand bit, present for all normal operands.
pub const IMPLICIT_BIT: u16 = 1 << 10;

/// Width of the implicit-one-augmented significand in bits.
pub const SIGNIFICAND_BITS: u32 = 11;

/// Width of the raw significand product in bits (11 x 11 multiply).
pub const PRODUCT_BITS: u32 = 22;

/// Top bit of the 22-bit significand product.
///
/// Set when the product lies in `[2,4)` and one normalization right-shift
/// is required; clear after normalization for any nonzero product.
pub const PRODUCT_TOP_BIT: u32 = 1 << 21;

/// Right-shift that aligns the retained 11-bit mantissa within the product.
pub const MANTISSA_ALIGN_SHIFT: u32 = 10;

/// Guard bit of the normalized product (first bit below the retained mantissa).
pub const GUARD_BIT: u32 = 1 << 9;

/// Round bit of the normalized product (second bit below the retained mantissa).
pub const ROUND_BIT: u32 = 1 << 8;

/// Sticky mask of the normalized product (all bits below the round bit).
pub const STICKY_MASK: u32 = 0xFF;

/// Carry-out bit of the 12-bit rounded mantissa.
///
/// Set when rounding pushed the significand to exactly 2.0; the exponent
/// absorbs the doubling and the packed fraction is forced to zero.
pub const MANTISSA_CARRY_BIT: u32 = 1 << 11;

/// Saturation pattern emitted on overflow: exponent all-ones, fraction
/// bits below bit 7 clear. The sign of the true result is discarded.
pub const OVERFLOW_PATTERN: u16 = 0b0111_1111_1000_0000;

/// Number of register sets between operand issue and visible result.
///
/// An operand pair accepted on a given tick produces its result after
/// exactly this many clock edges; a driver must delay expected outputs
/// by the same depth.
pub const PIPELINE_DEPTH: usize = 3;
