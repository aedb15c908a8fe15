//! Simulation statistics collection and reporting.
//!
//! This module tracks metrics for the multiplier simulator. It provides:
//! 1. **Cycle counts:** Total ticks, accepted operand pairs, and resets.
//! 2. **Result classification:** Normal, exact-zero, overflow, and underflow counts.
//! 3. **Verification:** Compared results and mismatches.
//! 4. **Throughput:** Host wall-clock time and simulated tick rate.

use std::time::Instant;

/// Simulation statistics structure tracking all run metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total clock ticks applied.
    pub ticks: u64,
    /// Operand pairs accepted into the pipeline (one per non-reset tick).
    pub pairs_issued: u64,
    /// Reset ticks applied.
    pub resets: u64,

    /// Results classified as normal (in-range, packed ordinarily).
    pub results_normal: u64,
    /// Results forced to exact zero by a zero operand.
    pub results_zero: u64,
    /// Results saturated with the overflow flag set.
    pub overflows: u64,
    /// Results flushed to zero with the underflow flag set.
    pub underflows: u64,

    /// Results compared against expectations by the harness.
    pub compared: u64,
    /// Compared results that did not match.
    pub mismatches: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            pairs_issued: 0,
            resets: 0,
            results_normal: 0,
            results_zero: 0,
            overflows: 0,
            underflows: 0,
            compared: 0,
            mismatches: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"classification"`, `"verification"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "classification", "verification"];

impl SimStats {
    /// Records the classification of one completed result.
    ///
    /// # Arguments
    ///
    /// * `bits` - Packed result bits.
    /// * `overflow` - Overflow flag of the result.
    /// * `underflow` - Underflow flag of the result.
    pub fn record_result(&mut self, bits: u16, overflow: bool, underflow: bool) {
        if overflow {
            self.overflows += 1;
        } else if underflow {
            self.underflows += 1;
        } else if bits == 0 {
            self.results_zero += 1;
        } else {
            self.results_normal += 1;
        }
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`,
    /// `"classification"`, or `"verification"`. Pass an empty slice to
    /// print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let ticks = if self.ticks == 0 { 1 } else { self.ticks };

        if want("summary") {
            let khz = (self.ticks as f64 / seconds) / 1000.0;
            println!("\n==========================================================");
            println!("HALF-PRECISION MULTIPLIER SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {:.4} s", seconds);
            println!("sim_ticks                {}", self.ticks);
            println!("sim_freq                 {:.2} kHz", khz);
            println!("pairs_issued             {}", self.pairs_issued);
            println!("resets                   {}", self.resets);
            println!("----------------------------------------------------------");
        }
        if want("classification") {
            let total = self.results_normal + self.results_zero + self.overflows + self.underflows;
            let total_f = if total == 0 { 1.0 } else { total as f64 };
            println!("RESULT CLASSIFICATION");
            println!(
                "  result.normal          {} ({:.2}%)",
                self.results_normal,
                (self.results_normal as f64 / total_f) * 100.0
            );
            println!(
                "  result.zero            {} ({:.2}%)",
                self.results_zero,
                (self.results_zero as f64 / total_f) * 100.0
            );
            println!(
                "  result.overflow        {} ({:.2}%)",
                self.overflows,
                (self.overflows as f64 / total_f) * 100.0
            );
            println!(
                "  result.underflow       {} ({:.2}%)",
                self.underflows,
                (self.underflows as f64 / total_f) * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("verification") {
            let acc = if self.compared > 0 {
                100.0 * ((self.compared - self.mismatches) as f64 / self.compared as f64)
            } else {
                0.0
            };
            println!("VERIFICATION");
            println!("  verify.compared        {}", self.compared);
            println!("  verify.mismatches      {}", self.mismatches);
            println!("  verify.pass_rate       {:.2}%", acc);
            println!(
                "  verify.fill_ticks      {}",
                ticks.saturating_sub(self.compared + self.resets)
            );
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
