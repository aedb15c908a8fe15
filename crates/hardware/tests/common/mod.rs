//! Shared test infrastructure.
//!
//! Helpers used across the unit tests: field-level encoders for building
//! half-precision operands, a pipelined driver that aligns outputs with
//! issue order, and builders for mid-pipeline latch entries.

use hfmul_core::Multiplier;
use hfmul_core::core::pipeline::latches::{MulOutput, NormRoundEntry};

/// Packs a half-precision encoding from raw fields.
///
/// No range checking beyond masking; tests use this to build both normal
/// values and edge patterns (subnormal, infinity, NaN).
pub fn half(sign: u16, exponent: u16, fraction: u16) -> u16 {
    ((sign & 1) << 15) | ((exponent & 0x1F) << 10) | (fraction & 0x3FF)
}

/// Builds an expected normal output value.
pub fn normal(bits: u16) -> MulOutput {
    MulOutput {
        bits,
        overflow: false,
        underflow: false,
    }
}

/// Streams operand pairs through a fresh pipeline, one per tick, and
/// returns the outputs aligned with issue order: `outs[i]` is the result
/// of `pairs[i]`, observed three edges after its issue. Trailing zero
/// pairs drain the pipeline.
pub fn run_pipelined(pairs: &[(u16, u16)]) -> Vec<MulOutput> {
    let mut mult = Multiplier::new();
    let mut outs = Vec::with_capacity(pairs.len());
    for tick in 0..pairs.len() + 2 {
        let (a, b) = pairs.get(tick).copied().unwrap_or((0, 0));
        let out = mult.tick(a, b, false);
        if tick >= 2 {
            outs.push(out);
        }
    }
    outs
}

/// Builds a Stage-2 latch entry for round-stage tests.
///
/// `mantissa` is the 11-bit retained field (bits 20..10 of the product);
/// `grs` packs the guard/round/sticky tail into the low ten bits.
pub fn norm_entry(sign: bool, exp: i16, mantissa: u32, grs: u32) -> NormRoundEntry {
    NormRoundEntry {
        sign,
        exp,
        product: (mantissa << 10) | (grs & 0x3FF),
        is_zero: false,
    }
}
