//! Multiply Stage (Stage 1).
//!
//! This module implements the first stage of the pipeline. It performs the following:
//! 1. **Sign Combination:** XOR of the two operand signs.
//! 2. **Exponent Arithmetic:** Bias-adjusted signed exponent sum, computed wide.
//! 3. **Significand Multiply:** 11 x 11-bit unsigned multiply producing 22 bits.
//! 4. **Zero Propagation:** OR of the operand zero flags.

use crate::common::constants::EXPONENT_BIAS;
use crate::core::decode::DecodedOperand;
use crate::core::pipeline::latches::MulNormEntry;

/// Executes the multiply stage.
///
/// Combines two decoded operands into the Stage-1 latch entry. The
/// exponent sum is computed in `i16` so that values below zero or above
/// 30 are representable until the round stage classifies them; the
/// significand product is computed in `u32` to hold the full 22 bits.
pub fn multiply_stage(a: DecodedOperand, b: DecodedOperand) -> MulNormEntry {
    MulNormEntry {
        sign: a.sign ^ b.sign,
        exp_sum: (a.exponent + b.exponent) as i16 - EXPONENT_BIAS,
        product: u32::from(a.significand) * u32::from(b.significand),
        is_zero: a.is_zero || b.is_zero,
    }
}
