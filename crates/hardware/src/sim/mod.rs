//! Simulation driving: vector loading and the verification harness.
//!
//! This module contains everything that sits between a front end and the
//! multiplier core. It includes:
//! 1. **Loader:** Parsing operand vector files into test vectors.
//! 2. **Harness:** Driving the pipeline one pair per tick and checking
//!    delayed expectations against observed outputs.

/// Verification harness.
pub mod harness;

/// Vector file loader.
pub mod loader;

pub use harness::{Harness, Mismatch};
pub use loader::{TestVector, load_vectors, parse_vectors};
