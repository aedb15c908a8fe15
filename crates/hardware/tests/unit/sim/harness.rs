//! Verification harness tests.
//!
//! Verifies the delayed-expectation discipline: comparisons land three
//! ticks after issue, fill and drain ticks are never compared, mismatch
//! reporting honors its knobs, and reset discards pending expectations.

use hfmul_core::Config;
use hfmul_core::config::HarnessConfig;
use hfmul_core::core::pipeline::latches::MulOutput;
use hfmul_core::multiply_once;
use hfmul_core::sim::{Harness, Mismatch, TestVector};

fn vector(a: u16, b: u16) -> TestVector {
    TestVector {
        a,
        b,
        expect: multiply_once(a, b),
    }
}

/// A vector whose expectation is deliberately wrong.
fn bad_vector(a: u16, b: u16) -> TestVector {
    TestVector {
        a,
        b,
        expect: MulOutput {
            bits: 0xDEAD,
            overflow: false,
            underflow: false,
        },
    }
}

fn harness_with(stop_on_mismatch: bool, max_report: usize) -> Harness {
    Harness::new(&Config {
        harness: HarnessConfig {
            stop_on_mismatch,
            max_report,
        },
        ..Config::default()
    })
}

// ══════════════════════════════════════════════════════════
// 1. Clean runs
// ══════════════════════════════════════════════════════════

#[test]
fn correct_vectors_produce_no_mismatches() {
    let vectors = [
        vector(0x4120, 0x4180),
        vector(0x7BFF, 0x4200),
        vector(0x1C00, 0x1C00),
        vector(0xC480, 0x0000),
        vector(0xC000, 0xC000),
    ];
    let mut harness = Harness::new(&Config::default());
    let mismatches = harness.run(&vectors);

    assert!(mismatches.is_empty());
    assert_eq!(harness.stats.compared, 5);
    assert_eq!(harness.stats.pairs_issued, 5);
    assert_eq!(harness.stats.mismatches, 0);
}

#[test]
fn drain_ticks_cover_the_pipeline_depth() {
    // Every vector needs three edges; the trailing two are drain ticks.
    let vectors = [vector(0x4120, 0x4180)];
    let mut harness = Harness::new(&Config::default());
    let _ = harness.run(&vectors);

    assert_eq!(harness.stats.ticks, 3);
    assert_eq!(harness.stats.pairs_issued, 1);
    assert_eq!(harness.stats.compared, 1);
}

#[test]
fn classification_counts_follow_results() {
    let vectors = [
        vector(0x4120, 0x4180), // normal
        vector(0x7BFF, 0x4200), // overflow
        vector(0x1C00, 0x1C00), // underflow
        vector(0xC480, 0x0000), // exact zero
    ];
    let mut harness = Harness::new(&Config::default());
    let _ = harness.run(&vectors);

    assert_eq!(harness.stats.results_normal, 1);
    assert_eq!(harness.stats.overflows, 1);
    assert_eq!(harness.stats.underflows, 1);
    assert_eq!(harness.stats.results_zero, 1);
}

// ══════════════════════════════════════════════════════════
// 2. Mismatch reporting
// ══════════════════════════════════════════════════════════

#[test]
fn mismatch_carries_index_operands_and_both_outputs() {
    // Capture the harness's debug events instead of polluting test output.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let vectors = [
        vector(0x4120, 0x4180),
        bad_vector(0x3CA0, 0x4000),
        vector(0xC000, 0xC000),
    ];
    let mut harness = Harness::new(&Config::default());
    let mismatches = harness.run(&vectors);

    assert_eq!(
        mismatches,
        vec![Mismatch {
            index: 1,
            a: 0x3CA0,
            b: 0x4000,
            got: multiply_once(0x3CA0, 0x4000),
            want: bad_vector(0x3CA0, 0x4000).expect,
        }]
    );
    assert_eq!(harness.stats.mismatches, 1);
    assert_eq!(harness.stats.compared, 3);
}

#[test]
fn max_report_caps_collected_mismatches_but_not_the_count() {
    let vectors = [
        bad_vector(0x4120, 0x4180),
        bad_vector(0x3CA0, 0x4000),
        bad_vector(0xC000, 0xC000),
    ];
    let mut harness = harness_with(false, 1);
    let mismatches = harness.run(&vectors);

    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].index, 0);
    assert_eq!(harness.stats.mismatches, 3);
}

#[test]
fn stop_on_mismatch_returns_at_first_failure() {
    let vectors = [
        bad_vector(0x4120, 0x4180),
        vector(0x3CA0, 0x4000),
        vector(0xC000, 0xC000),
        vector(0x1C00, 0x1C00),
    ];
    let mut harness = harness_with(true, 32);
    let mismatches = harness.run(&vectors);

    assert_eq!(mismatches.len(), 1);
    // The first comparison happens on the third tick; later vectors were
    // never compared.
    assert_eq!(harness.stats.compared, 1);
    assert_eq!(harness.stats.ticks, 3);
}

// ══════════════════════════════════════════════════════════
// 3. Reset
// ══════════════════════════════════════════════════════════

#[test]
fn reset_discards_pending_expectations() {
    let mut harness = Harness::new(&Config::default());

    let first = harness.run(&[vector(0x4120, 0x4180), vector(0x7BFF, 0x4200)]);
    assert!(first.is_empty());

    harness.reset();
    assert_eq!(harness.stats.resets, 1);
    assert_eq!(harness.multiplier().state(), Default::default());

    // A fresh batch after the reset verifies exactly as before.
    let second = harness.run(&[vector(0x3CA0, 0x4000)]);
    assert!(second.is_empty());
    assert_eq!(harness.stats.compared, 3);
}
