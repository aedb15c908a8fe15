//! Multiplier core (decode and pipeline).
//!
//! This module contains the arithmetic heart of the simulator. It includes:
//! 1. **Decode:** Splitting packed operands into sign, exponent, and significand.
//! 2. **Pipeline:** The three-stage registered datapath and its tick discipline.

/// Operand decode logic.
pub mod decode;

/// Three-stage multiplier pipeline.
pub mod pipeline;

/// Main multiplier type; owns the pipeline register sets.
pub use pipeline::Multiplier;
/// Atomic (unregistered) reference evaluation of one multiplication.
pub use pipeline::multiply_once;
