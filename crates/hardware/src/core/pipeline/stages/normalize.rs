//! Normalize Stage (Stage 2).
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Normalization:** At most one right-shift of the significand product.
//! 2. **Exponent Adjustment:** Increments the exponent when a shift occurred.
//! 3. **Passthrough:** Sign and zero flag travel through unchanged.

use crate::common::constants::PRODUCT_TOP_BIT;
use crate::core::pipeline::latches::{MulNormEntry, NormRoundEntry};

/// Executes the normalize stage.
///
/// A product of two significands each in `[1,2)` lies in `[1,4)`, so a
/// single conditional right-shift suffices: if bit 21 of the product is
/// set the value is in `[2,4)` and is halved while the exponent is
/// incremented; otherwise both pass through. After this stage bit 21 is
/// clear for any nonzero product.
pub fn normalize_stage(entry: MulNormEntry) -> NormRoundEntry {
    let shift = entry.product & PRODUCT_TOP_BIT != 0;
    NormRoundEntry {
        sign: entry.sign,
        exp: entry.exp_sum + i16::from(shift),
        product: if shift { entry.product >> 1 } else { entry.product },
        is_zero: entry.is_zero,
    }
}
