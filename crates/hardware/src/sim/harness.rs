//! Verification harness.
//!
//! This module drives the pipelined multiplier with operand streams and
//! checks delayed expected outputs. It implements the driver contract of
//! the pipeline:
//! 1. **Issue:** One operand pair per tick, no gaps, no backpressure.
//! 2. **Delay matching:** A shift register of expectations exactly as deep
//!    as the pipeline aligns comparisons with the three-tick latency.
//! 3. **Fill handling:** The first three ticks after construction or after
//!    any reset are treated as filling and are not compared.
//! 4. **Drain:** After the last vector, zero operand pairs are clocked in
//!    until every in-flight result has been observed.

use std::collections::VecDeque;

use tracing::debug;

use crate::common::constants::PIPELINE_DEPTH;
use crate::config::Config;
use crate::core::Multiplier;
use crate::core::pipeline::latches::MulOutput;
use crate::sim::loader::TestVector;
use crate::stats::SimStats;

/// One result that did not match its expectation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// Index of the vector within the issued stream.
    pub index: usize,
    /// First operand of the mismatching pair.
    pub a: u16,
    /// Second operand of the mismatching pair.
    pub b: u16,
    /// Output observed three ticks after issue.
    pub got: MulOutput,
    /// Expected output.
    pub want: MulOutput,
}

/// Harness: owns the multiplier and the delayed-expectation queue.
///
/// The queue mirrors the pipeline registers slot for slot: each tick
/// pushes the expectation of the pair being issued (or a filler for drain
/// ticks) and, once the queue is as deep as the pipeline, pops the
/// expectation whose result left Stage 3 on that same edge.
#[derive(Debug)]
pub struct Harness {
    mult: Multiplier,
    inflight: VecDeque<Option<(usize, TestVector)>>,
    /// Run statistics (ticks, classification counts, comparisons).
    pub stats: SimStats,
    stop_on_mismatch: bool,
    max_report: usize,
}

impl Harness {
    /// Creates a harness around a freshly cleared multiplier.
    pub fn new(config: &Config) -> Self {
        Self {
            mult: Multiplier::new(),
            inflight: VecDeque::with_capacity(PIPELINE_DEPTH),
            stats: SimStats::default(),
            stop_on_mismatch: config.harness.stop_on_mismatch,
            max_report: config.harness.max_report,
        }
    }

    /// Runs a vector set through the pipeline and reports mismatches.
    ///
    /// Issues one vector per tick, compares each output against the
    /// expectation issued three ticks earlier, then drains the pipeline
    /// with zero operand pairs so the trailing vectors are observed too.
    /// With `stop_on_mismatch` set, returns at the first failure without
    /// draining.
    ///
    /// At most `max_report` mismatches are returned in full; the remainder
    /// are only counted in [`SimStats::mismatches`].
    pub fn run(&mut self, vectors: &[TestVector]) -> Vec<Mismatch> {
        let mut mismatches = Vec::new();

        for (index, vector) in vectors.iter().enumerate() {
            self.step(Some((index, *vector)), &mut mismatches);
            if self.stop_on_mismatch && !mismatches.is_empty() {
                return mismatches;
            }
        }

        // Drain: in-flight vectors still need their remaining edges.
        while self.inflight.iter().any(Option::is_some) {
            self.step(None, &mut mismatches);
            if self.stop_on_mismatch && !mismatches.is_empty() {
                return mismatches;
            }
        }

        mismatches
    }

    /// Asserts reset for one tick, flushing all in-flight state.
    ///
    /// Pending expectations are discarded along with the register sets;
    /// vectors issued after the reset are unaffected.
    pub fn reset(&mut self) {
        let _ = self.mult.tick(0, 0, true);
        self.inflight.clear();
        self.stats.ticks += 1;
        self.stats.resets += 1;
    }

    /// Returns the multiplier under test.
    pub fn multiplier(&self) -> &Multiplier {
        &self.mult
    }

    /// Applies one clock tick: issue, advance, and compare if due.
    ///
    /// `item` is the expectation of the pair issued this tick, or `None`
    /// for a drain tick carrying a zero operand pair. No comparison
    /// happens until the queue is as deep as the pipeline; those are fill
    /// ticks whose outputs predate the current stream.
    fn step(&mut self, item: Option<(usize, TestVector)>, mismatches: &mut Vec<Mismatch>) {
        let (a, b) = item.map_or((0, 0), |(_, v)| (v.a, v.b));
        self.inflight.push_back(item);

        let out = self.mult.tick(a, b, false);
        self.stats.ticks += 1;
        if item.is_some() {
            self.stats.pairs_issued += 1;
        }

        if self.inflight.len() < PIPELINE_DEPTH {
            return;
        }
        if let Some(Some((index, vector))) = self.inflight.pop_front() {
            self.stats.compared += 1;
            self.stats.record_result(out.bits, out.overflow, out.underflow);
            if out != vector.expect {
                self.stats.mismatches += 1;
                debug!(
                    index,
                    a = format_args!("{:#06x}", vector.a),
                    b = format_args!("{:#06x}", vector.b),
                    got = format_args!("{:#06x}", out.bits),
                    want = format_args!("{:#06x}", vector.expect.bits),
                    "result mismatch"
                );
                if mismatches.len() < self.max_report {
                    mismatches.push(Mismatch {
                        index,
                        a: vector.a,
                        b: vector.b,
                        got: out,
                        want: vector.expect,
                    });
                }
            }
        }
    }
}
