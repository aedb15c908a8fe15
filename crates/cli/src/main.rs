//! Half-precision multiplier simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Vector run:** Stream a vector file through the pipeline, one pair per
//!    tick, and check delayed expectations.
//! 2. **Self-verification:** Sweep exponent/fraction combinations and check
//!    the pipelined datapath against the atomic reference evaluation.

use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

use hfmul_core::config::Config;
use hfmul_core::sim::loader::{self, TestVector};
use hfmul_core::sim::{Harness, Mismatch};
use hfmul_core::stats::STATS_SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Half-precision multiplier pipeline simulator",
    long_about = "Run operand vector files through a cycle-accurate three-stage \
half-precision multiplier pipeline, or self-verify the pipeline against its \
combinational reference.\n\nExamples:\n  sim run -f vectors/basic.txt\n  sim run -f vectors/basic.txt --trace\n  sim verify --mantissa-samples 8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a vector file through the pipeline and check expectations.
    Run {
        /// Vector file: `<a> <b> [<result> <ov> <uf>]` per line, hex fields.
        #[arg(short, long)]
        file: String,

        /// JSON configuration file (defaults used when omitted).
        #[arg(long)]
        config: Option<String>,

        /// Emit per-tick trace events to stderr.
        #[arg(long)]
        trace: bool,

        /// Statistics sections to print, comma-separated
        /// (summary, classification, verification). Prints all when omitted.
        #[arg(long, value_delimiter = ',')]
        stats_sections: Vec<String>,
    },

    /// Sweep exponent/fraction combinations, checking the pipelined output
    /// against the atomic reference evaluation.
    Verify {
        /// Fraction values sampled per operand (strided across all 1024).
        #[arg(long, default_value_t = 4)]
        mantissa_samples: u16,

        /// Emit per-tick trace events to stderr.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            trace,
            stats_sections,
        } => cmd_run(&file, config, trace, stats_sections),
        Commands::Verify {
            mantissa_samples,
            trace,
        } => cmd_verify(mantissa_samples, trace),
    }
}

/// Installs the tracing subscriber: TRACE level when requested, otherwise
/// whatever `RUST_LOG` asks for (default `warn`).
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads a configuration file, falling back to defaults when none is given.
///
/// Exits the process with an error message on unreadable or invalid files.
fn load_config(path: Option<String>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = std::fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read config '{}': {}", path, e);
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    })
}

/// Runs a vector file: loads it, streams it through the harness, prints
/// mismatches and statistics. Exits with code 1 on any mismatch.
fn cmd_run(file: &str, config: Option<String>, trace: bool, stats_sections: Vec<String>) {
    let config = load_config(config);
    init_tracing(trace || config.general.trace_ticks);

    for section in &stats_sections {
        if !STATS_SECTIONS.contains(&section.as_str()) {
            eprintln!(
                "\n[!] FATAL: Unknown stats section '{}' (valid: {})",
                section,
                STATS_SECTIONS.join(", ")
            );
            process::exit(1);
        }
    }

    let vectors = loader::load_vectors(file).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    });
    println!("[*] Vector run: {} ({} vectors)", file, vectors.len());

    let mut harness = Harness::new(&config);
    let mismatches = harness.run(&vectors);
    finish(&harness, &mismatches, &stats_sections);
}

/// Ceiling for `--mantissa-samples`. 32 samples per operand already
/// sweeps over a million vectors; the full 1024 would not fit in memory.
const MAX_MANTISSA_SAMPLES: u16 = 32;

/// Builds the self-verification sweep: every biased exponent pair with
/// strided fraction samples, expectations from the atomic reference.
///
/// Returns the clamped per-operand sample count alongside the vectors.
fn sweep_vectors(mantissa_samples: u16) -> (u16, Vec<TestVector>) {
    let samples = mantissa_samples.clamp(1, MAX_MANTISSA_SAMPLES);
    let stride = 1024 / samples;

    let mut vectors = Vec::new();
    for exp_a in 0..32u16 {
        for exp_b in 0..32u16 {
            for i in 0..samples {
                for j in 0..samples {
                    let a = (exp_a << 10) | (i * stride);
                    let b = (exp_b << 10) | (j * stride) | 0x8000;
                    vectors.push(TestVector {
                        a,
                        b,
                        expect: hfmul_core::multiply_once(a, b),
                    });
                }
            }
        }
    }
    (samples, vectors)
}

/// Sweeps all biased exponent pairs with strided fraction samples and
/// checks the pipeline against the atomic reference.
fn cmd_verify(mantissa_samples: u16, trace: bool) {
    let config = Config::default();
    init_tracing(trace);

    let (samples, vectors) = sweep_vectors(mantissa_samples);
    println!(
        "[*] Self-verification sweep: {} exponent pairs x {} fraction samples ({} vectors)",
        32 * 32,
        u32::from(samples) * u32::from(samples),
        vectors.len()
    );

    let mut harness = Harness::new(&config);
    let mismatches = harness.run(&vectors);
    finish(&harness, &mismatches, &[]);
}

/// Prints mismatches and statistics, then exits with the appropriate code.
fn finish(harness: &Harness, mismatches: &[Mismatch], stats_sections: &[String]) {
    for m in mismatches {
        println!(
            "  MISMATCH vector {}: {:#06x} x {:#06x} -> {:#06x} (ov={} uf={}), expected {:#06x} (ov={} uf={})",
            m.index,
            m.a,
            m.b,
            m.got.bits,
            u8::from(m.got.overflow),
            u8::from(m.got.underflow),
            m.want.bits,
            u8::from(m.want.overflow),
            u8::from(m.want.underflow),
        );
    }

    harness.stats.print_sections(stats_sections);

    if harness.stats.mismatches > 0 {
        eprintln!("\n[!] {} mismatching results", harness.stats.mismatches);
        process::exit(1);
    }
    println!("\n[*] All results match");
}
