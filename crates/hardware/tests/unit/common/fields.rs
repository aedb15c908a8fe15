//! Half-precision field extraction and packing tests.

use hfmul_core::common::fields::{HalfBits, pack};

#[test]
fn sign_extraction() {
    assert!(!0x0000u16.sign());
    assert!(0x8000u16.sign());
    assert!(0xC120u16.sign());
    assert!(!0x7FFFu16.sign());
}

#[test]
fn exponent_extraction() {
    assert_eq!(0x0000u16.exponent(), 0);
    assert_eq!(0x3C00u16.exponent(), 15);
    assert_eq!(0x7C00u16.exponent(), 31);
    // Sign bit does not leak into the exponent field.
    assert_eq!(0xFC00u16.exponent(), 31);
}

#[test]
fn fraction_extraction() {
    assert_eq!(0x0000u16.fraction(), 0);
    assert_eq!(0x03FFu16.fraction(), 0x3FF);
    assert_eq!(0x4120u16.fraction(), 0x120);
    // Exponent bits do not leak into the fraction field.
    assert_eq!(0x7C00u16.fraction(), 0);
}

#[test]
fn pack_assembles_fields() {
    assert_eq!(pack(false, 16, 0x120), 0x4120);
    assert_eq!(pack(true, 16, 0), 0xC000);
    assert_eq!(pack(false, 0, 0), 0x0000);
    assert_eq!(pack(true, 31, 0x3FF), 0xFFFF);
}

#[test]
fn pack_masks_oversized_fields() {
    // Exponent above 5 bits and fraction above 10 bits are truncated.
    assert_eq!(pack(false, 0x3F, 0), pack(false, 0x1F, 0));
    assert_eq!(pack(false, 0, 0x7FF), pack(false, 0, 0x3FF));
}

#[test]
fn pack_extract_round_trip() {
    for bits in [0x0000u16, 0x0001, 0x3C00, 0x4120, 0x7BFF, 0x8000, 0xFC01] {
        assert_eq!(pack(bits.sign(), bits.exponent(), bits.fraction()), bits);
    }
}
