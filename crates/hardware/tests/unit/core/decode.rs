//! Operand decode tests.
//!
//! Verifies field splitting, the implicit-bit rule, and the exact-zero
//! flag, including the non-special-cased edge patterns (subnormal,
//! infinity, NaN encodings) that must flow through undisturbed.

use hfmul_core::core::decode::{DecodedOperand, decode};

use crate::common::half;

#[test]
fn decode_normal_operand() {
    let d = decode(0x4120);
    assert_eq!(
        d,
        DecodedOperand {
            sign: false,
            exponent: 16,
            significand: 0x520,
            is_zero: false,
        }
    );
}

#[test]
fn decode_negative_operand() {
    let d = decode(half(1, 16, 0x080));
    assert!(d.sign);
    assert_eq!(d.exponent, 16);
    assert_eq!(d.significand, 0x480);
    assert!(!d.is_zero);
}

#[test]
fn decode_implicit_bit_only_for_nonzero_exponent() {
    // Normal: implicit one above the fraction.
    assert_eq!(decode(half(0, 1, 0)).significand, 0x400);
    // Zero exponent: no implicit bit.
    assert_eq!(decode(half(0, 0, 0x155)).significand, 0x155);
}

#[test]
fn decode_positive_and_negative_zero() {
    for bits in [0x0000u16, 0x8000] {
        let d = decode(bits);
        assert!(d.is_zero, "{bits:#06x} should decode as zero");
        assert_eq!(d.exponent, 0);
        assert_eq!(d.significand, 0);
    }
}

#[test]
fn decode_subnormal_is_not_zero() {
    let d = decode(0x0001);
    assert!(!d.is_zero);
    assert_eq!(d.significand, 1);
}

#[test]
fn decode_infinity_and_nan_patterns_flow_through() {
    // No special-casing: these decode like any other operand.
    let inf = decode(0x7C00);
    assert_eq!(inf.exponent, 31);
    assert_eq!(inf.significand, 0x400);
    assert!(!inf.is_zero);

    let nan = decode(0x7E01);
    assert_eq!(nan.exponent, 31);
    assert_eq!(nan.significand, 0x400 | 0x201);
    assert!(!nan.is_zero);
}

#[test]
fn decode_is_pure() {
    assert_eq!(decode(0x4120), decode(0x4120));
}
