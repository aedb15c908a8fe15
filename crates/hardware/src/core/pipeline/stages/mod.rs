//! Pipeline stage implementations.
//!
//! This module contains the combinational logic for the three stages of
//! the multiplier pipeline. It includes:
//! 1. **Multiply:** Combines two decoded operands into sign, exponent sum, and raw product.
//! 2. **Normalize:** Shifts the product into canonical `1.xxxx` form.
//! 3. **Round:** Applies tie-to-even rounding, classifies, and assembles the result.
//!
//! Each stage is a pure function over its input latch; the pipeline
//! controller decides what feeds it and when its output is captured.

/// Multiply stage implementation.
pub mod multiply;

/// Normalize stage implementation.
pub mod normalize;

/// Round/assemble stage implementation.
pub mod round;

/// Multiply stage entry point (Stage 1).
pub use multiply::multiply_stage;
/// Normalize stage entry point (Stage 2).
pub use normalize::normalize_stage;
/// Round/assemble stage entry point (Stage 3).
pub use round::round_stage;
