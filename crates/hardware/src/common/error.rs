//! Simulator error definitions.
//!
//! This module defines the error taxonomy for everything *around* the
//! multiplier core: vector file loading, configuration parsing, and harness
//! setup. The core datapath itself never fails — out-of-range results are
//! signaled through the `overflow`/`underflow` output flags, and every tick
//! is total and deterministic.

use thiserror::Error;

/// Errors raised while preparing or driving a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A vector file could not be read from disk.
    #[error("could not read vector file '{path}': {source}")]
    VectorIo {
        /// Path of the file that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A vector file line could not be parsed.
    #[error("vector file line {line}: {reason}")]
    VectorParse {
        /// 1-based line number of the offending line.
        line: usize,
        /// Description of the parse failure.
        reason: String,
    },

    /// A configuration file could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
