//! Configuration system for the multiplier simulator.
//!
//! This module defines the configuration structures used to parameterize
//! a simulation run. It provides:
//! 1. **Defaults:** Baseline knobs for tracing and harness behavior.
//! 2. **Structures:** Hierarchical config for general and harness settings.
//!
//! Configuration is supplied as JSON (see [`Config::from_json`]) or via
//! `Config::default()` for the CLI. The datapath itself is fixed —
//! half-precision operands, round-to-nearest-ties-to-even, three stages —
//! and deliberately not configurable.

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Whether per-tick trace events are emitted by default.
    pub const TRACE_TICKS: bool = false;

    /// Whether the harness aborts on the first mismatching result.
    pub const STOP_ON_MISMATCH: bool = false;

    /// Maximum number of mismatches reported before summarizing.
    pub const MAX_REPORT: usize = 32;
}

/// Root configuration type.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings.
    pub general: GeneralConfig,
    /// Verification harness settings.
    pub harness: HarnessConfig,
}

/// General simulation settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable per-tick trace output. The core always emits `tracing`
    /// events; this knob tells the front end to install a TRACE-level
    /// subscriber so they become visible.
    pub trace_ticks: bool,
}

/// Verification harness settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Stop at the first mismatching result instead of running the whole
    /// vector set.
    pub stop_on_mismatch: bool,
    /// Maximum number of mismatches collected in full before the rest are
    /// only counted.
    pub max_report: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_ticks: defaults::TRACE_TICKS,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            stop_on_mismatch: defaults::STOP_ON_MISMATCH,
            max_report: defaults::MAX_REPORT,
        }
    }
}

impl Config {
    /// Deserializes a configuration from JSON text.
    ///
    /// Missing fields fall back to their defaults, so a partial document
    /// such as `{"harness": {"stop_on_mismatch": true}}` is valid.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] when the text is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }
}
