//! Multiplier pipeline implementation.
//!
//! This module contains the three-stage synchronous pipeline and its
//! stepping discipline. It includes:
//! 1. **Latches:** Register sets carried between stages (Stage 1, Stage 2, output).
//! 2. **Stages:** Combinational multiply, normalize, and round/assemble logic.
//! 3. **Controller:** The tick discipline that advances all register sets
//!    together once per clock edge and applies synchronous reset.
//!
//! Data flows strictly Decode → Multiply → Normalize → Round, one
//! direction, no feedback, no stalls, no backpressure. Latency from
//! accepting an operand pair to observing its result is exactly
//! [`PIPELINE_DEPTH`](crate::common::constants::PIPELINE_DEPTH) clock
//! edges; throughput is one pair per tick, sustained.

use tracing::trace;

use crate::core::decode::decode;

/// Inter-stage pipeline latches.
pub mod latches;

/// Pipeline stage implementations.
pub mod stages;

use latches::{MulNormEntry, MulOutput, NormRoundEntry};
use stages::{multiply_stage, normalize_stage, round_stage};

/// The complete register state of the pipeline.
///
/// Advancing the state is a pure function: the next state and visible
/// output are computed entirely from the pre-tick register values and the
/// operand pair presented this tick, then applied in one logical instant.
/// A stage never observes a same-tick update of an earlier stage.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PipelineState {
    /// Stage-1 register set (multiply results).
    pub stage1: MulNormEntry,
    /// Stage-2 register set (normalized results).
    pub stage2: NormRoundEntry,
    /// Stage-3 register set; the externally visible output.
    pub output: MulOutput,
}

impl PipelineState {
    /// Computes the post-edge state for one clock tick.
    ///
    /// Stage 3 consumes the *previous* Stage-2 register, Stage 2 the
    /// *previous* Stage-1 register, and Stage 1 the operand pair presented
    /// this tick. When `reset` is asserted every register set is forced to
    /// its zero value instead, discarding all in-flight operands — a
    /// flush, not a drain. Reset does not affect operands issued on later
    /// ticks.
    pub fn advance(self, a: u16, b: u16, reset: bool) -> Self {
        if reset {
            return Self::default();
        }
        Self {
            stage1: multiply_stage(decode(a), decode(b)),
            stage2: normalize_stage(self.stage1),
            output: round_stage(self.stage2),
        }
    }
}

/// The pipelined half-precision multiplier.
///
/// Owns the three register sets and advances them under a single global
/// synchronous stepping discipline. There is exactly one writer — the
/// [`tick`](Self::tick) function — and no other shared mutable state, so
/// no locking discipline is required. Once a pair is accepted on a tick it
/// completes after exactly three edges unless a reset discards it;
/// cancellation is otherwise not supported.
#[derive(Clone, Copy, Default, Debug)]
pub struct Multiplier {
    state: PipelineState,
}

impl Multiplier {
    /// Creates a multiplier with all register sets cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the pipeline by one clock edge.
    ///
    /// Accepts one operand pair, applies synchronous reset if asserted,
    /// and returns the newly latched output register — the result of the
    /// pair accepted three edges earlier (or the reset-cleared value if a
    /// reset occurred within that window).
    pub fn tick(&mut self, a: u16, b: u16, reset: bool) -> MulOutput {
        self.state = self.state.advance(a, b, reset);
        trace!(
            a = format_args!("{a:#06x}"),
            b = format_args!("{b:#06x}"),
            reset,
            exp_sum = self.state.stage1.exp_sum,
            product = format_args!("{:#08x}", self.state.stage1.product),
            bits = format_args!("{:#06x}", self.state.output.bits),
            overflow = self.state.output.overflow,
            underflow = self.state.output.underflow,
            "tick"
        );
        self.state.output
    }

    /// Returns the current visible output register without advancing.
    ///
    /// This is the value a driver sampling outputs before the clock edge
    /// observes; it reflects the operand pair accepted three edges ago.
    pub fn output(&self) -> MulOutput {
        self.state.output
    }

    /// Returns the full register state (for inspection and tracing).
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Clears every register set, equivalent to one tick with reset held.
    pub fn flush(&mut self) {
        self.state = PipelineState::default();
    }
}

/// Evaluates one multiplication atomically, bypassing the registers.
///
/// Composes the three stage functions over a single operand pair. The
/// pipeline produces bit-identical results three ticks apart; this form is
/// the reference the verification harness uses when a vector file carries
/// no explicit expectations.
pub fn multiply_once(a: u16, b: u16) -> MulOutput {
    round_stage(normalize_stage(multiply_stage(decode(a), decode(b))))
}
