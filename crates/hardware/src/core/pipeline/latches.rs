//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the register sets carried between the three stages
//! of the multiplier pipeline: Multiply → Normalize → Round/Assemble.
//!
//! 1. **Full Replacement:** Every field of every latch is rewritten on each
//!    clock edge; there are no partial updates and no per-field staleness.
//! 2. **Widened Exponents:** Intermediate exponents travel as `i16`, strictly
//!    wider than the final 5-bit field, so below-zero and above-30 values
//!    survive untruncated until classification.
//! 3. **Reset:** Synchronous reset forces every latch to its `Default`
//!    (all-zero) value in place of the computed one.

/// Entry in the Multiply/Normalize latch (Stage 1 output).
///
/// Holds the raw combination of two decoded operands: sign XOR, the
/// bias-adjusted exponent sum, and the unnormalized significand product.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MulNormEntry {
    /// Result sign (XOR of the operand signs).
    pub sign: bool,
    /// Bias-adjusted exponent sum, `exp_a + exp_b - 15`, in signed
    /// arithmetic wide enough to go negative or exceed 30 without wrapping.
    pub exp_sum: i16,
    /// Unnormalized 22-bit significand product (11 x 11 unsigned multiply).
    pub product: u32,
    /// Whether either operand decoded to exact zero.
    pub is_zero: bool,
}

/// Entry in the Normalize/Round latch (Stage 2 output).
///
/// The product has been shifted into canonical `1.xxxx` form: bit 21 is
/// clear unless `is_zero` is set.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct NormRoundEntry {
    /// Result sign, passed through from Stage 1.
    pub sign: bool,
    /// Exponent after normalization adjustment, still widened and unclamped.
    pub exp: i16,
    /// Normalized 22-bit significand product, value in `[1,2)` scaled terms.
    pub product: u32,
    /// Zero flag, passed through from Stage 1.
    pub is_zero: bool,
}

/// The visible output register (Stage 3 output).
///
/// This is the only externally observable state of the pipeline; it
/// reflects the operand pair accepted three clock edges earlier.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MulOutput {
    /// Packed 16-bit half-precision result (or a clamped/flushed pattern).
    pub bits: u16,
    /// Result exceeded the representable exponent range and was saturated.
    pub overflow: bool,
    /// Result fell below the normal range and was flushed to zero.
    pub underflow: bool,
}
