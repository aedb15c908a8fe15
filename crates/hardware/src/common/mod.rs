//! Common utilities and types used throughout the multiplier simulator.
//!
//! This module provides fundamental building blocks shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** Bit-level constants of the half-precision format and datapath.
//! 2. **Fields:** Extraction and packing of sign/exponent/fraction fields.
//! 3. **Error Handling:** Error types for vector loading and configuration.

/// Datapath and format constants.
pub mod constants;

/// Error types for simulation setup.
pub mod error;

/// Half-precision field extraction and packing.
pub mod fields;

pub use constants::{EXPONENT_BIAS, OVERFLOW_PATTERN, PIPELINE_DEPTH};
pub use error::SimError;
pub use fields::{HalfBits, pack};
