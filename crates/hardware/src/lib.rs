//! Half-precision multiplier pipeline simulator library.
//!
//! This crate implements a cycle-accurate model of a fixed-latency, fully
//! pipelined half-precision (binary16) floating-point multiplier with the following:
//! 1. **Core:** Operand decode and a three-stage registered datapath
//!    (multiply, normalize, round/assemble) with round-to-nearest-ties-to-even.
//! 2. **Classification:** Priority-ordered zero/overflow/underflow/normal
//!    detection with saturation and flush-to-zero.
//! 3. **Stepping:** A single synchronous tick that advances all register
//!    sets atomically, with destructive synchronous reset.
//! 4. **Simulation:** Vector file loader, verification harness, configuration,
//!    and statistics collection.

/// Common types and constants (format fields, datapath widths, errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// Multiplier core (decode, pipeline stages, tick discipline).
pub mod core;
/// Vector loading and verification harness.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main multiplier type; holds the three pipeline register sets.
pub use crate::core::Multiplier;
/// Atomic reference evaluation of one multiplication.
pub use crate::core::multiply_once;
