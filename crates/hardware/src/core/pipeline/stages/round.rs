//! Round and Assemble Stage (Stage 3).
//!
//! This module implements the final stage of the pipeline. It performs the following:
//! 1. **Rounding:** Round-to-nearest-ties-to-even over guard/round/sticky bits.
//! 2. **Carry Correction:** Detects mantissa carry-out and bumps the exponent.
//! 3. **Classification:** Priority-ordered zero/overflow/underflow/normal decision.
//! 4. **Assembly:** Packs (or clamps) the final 16-bit result and output flags.

use crate::common::constants::{
    EXPONENT_SATURATED, GUARD_BIT, MANTISSA_ALIGN_SHIFT, MANTISSA_CARRY_BIT, OVERFLOW_PATTERN,
    ROUND_BIT, STICKY_MASK,
};
use crate::common::fields::pack;
use crate::core::pipeline::latches::{MulOutput, NormRoundEntry};

/// Executes the round/assemble stage.
///
/// Rounding examines four bits of the normalized product: the retained
/// least-significant bit (bit 10), the guard bit (bit 9), the round bit
/// (bit 8), and the sticky OR of bits 7..0. The mantissa increments when
/// the discarded part is strictly more than half an ULP, or exactly half
/// with an odd retained mantissa (tie to even).
///
/// Classification is evaluated in priority order, first match wins:
/// 1. a zero operand forces an exact zero result with both flags clear,
///    even when the other operand would have overflowed;
/// 2. a carry-corrected exponent of 31 or more saturates to
///    [`OVERFLOW_PATTERN`] with the overflow flag set (the sign is
///    discarded in this path);
/// 3. an exponent of zero or less flushes to zero with the underflow flag
///    set — no subnormal result is produced;
/// 4. otherwise the sign, clamped exponent, and rounded fraction are
///    packed normally. When rounding carried into bit 11, the fraction
///    field is forced to zero because the incremented exponent already
///    accounts for the doubled significand.
pub fn round_stage(entry: NormRoundEntry) -> MulOutput {
    let lsb = entry.product >> MANTISSA_ALIGN_SHIFT & 1 != 0;
    let guard = entry.product & GUARD_BIT != 0;
    let round = entry.product & ROUND_BIT != 0;
    let sticky = entry.product & STICKY_MASK != 0;

    let round_up = (guard && (round || sticky)) || (guard && !(round || sticky) && lsb);

    let mantissa_rounded = (entry.product >> MANTISSA_ALIGN_SHIFT) + u32::from(round_up);
    let carry = mantissa_rounded & MANTISSA_CARRY_BIT != 0;
    let final_exp = entry.exp + i16::from(carry);

    if entry.is_zero {
        MulOutput::default()
    } else if final_exp >= EXPONENT_SATURATED {
        MulOutput {
            bits: OVERFLOW_PATTERN,
            overflow: true,
            underflow: false,
        }
    } else if final_exp <= 0 {
        MulOutput {
            bits: 0,
            overflow: false,
            underflow: true,
        }
    } else {
        let fraction = if carry { 0 } else { mantissa_rounded as u16 };
        MulOutput {
            bits: pack(entry.sign, final_exp as u16, fraction),
            overflow: false,
            underflow: false,
        }
    }
}
