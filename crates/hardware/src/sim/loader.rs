//! Vector file loader.
//!
//! This module parses operand vector files for the verification harness. It performs:
//! 1. **Reading:** Loads a vector file from disk into test vectors.
//! 2. **Parsing:** One test case per line, hex operands with optional expectations.
//! 3. **Reference fill-in:** Lines without expectations get them from the
//!    atomic reference model.
//!
//! # Format
//!
//! ```text
//! # comment
//! <a> <b>                      — expectation computed by the reference model
//! <a> <b> <result> <ov> <uf>   — explicit expectation
//! ```
//!
//! Operands and results are hexadecimal (optional `0x` prefix); flags are
//! `0` or `1`. Blank lines and `#` comments (full-line or trailing) are
//! ignored. Parse failures report the 1-based line number.

use std::fs;

use crate::common::error::SimError;
use crate::core::multiply_once;
use crate::core::pipeline::latches::MulOutput;

/// One test case: an operand pair and its expected pipeline output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestVector {
    /// First 16-bit operand.
    pub a: u16,
    /// Second 16-bit operand.
    pub b: u16,
    /// Expected output three ticks after issue.
    pub expect: MulOutput,
}

/// Loads and parses a vector file from disk.
///
/// # Arguments
///
/// * `path` - Path to the vector file.
///
/// # Errors
///
/// Returns [`SimError::VectorIo`] if the file cannot be read and
/// [`SimError::VectorParse`] on the first malformed line.
pub fn load_vectors(path: &str) -> Result<Vec<TestVector>, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::VectorIo {
        path: path.to_string(),
        source,
    })?;
    parse_vectors(&text)
}

/// Parses vector file text into test vectors.
///
/// # Errors
///
/// Returns [`SimError::VectorParse`] with the 1-based line number on the
/// first malformed line.
pub fn parse_vectors(text: &str) -> Result<Vec<TestVector>, SimError> {
    let mut vectors = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        match fields.as_slice() {
            [a, b] => {
                let a = parse_hex16(a, line)?;
                let b = parse_hex16(b, line)?;
                vectors.push(TestVector {
                    a,
                    b,
                    expect: multiply_once(a, b),
                });
            }
            [a, b, bits, ov, uf] => {
                let a = parse_hex16(a, line)?;
                let b = parse_hex16(b, line)?;
                vectors.push(TestVector {
                    a,
                    b,
                    expect: MulOutput {
                        bits: parse_hex16(bits, line)?,
                        overflow: parse_flag(ov, line)?,
                        underflow: parse_flag(uf, line)?,
                    },
                });
            }
            _ => {
                return Err(SimError::VectorParse {
                    line,
                    reason: format!(
                        "expected 2 or 5 fields, found {}: '{}'",
                        fields.len(),
                        content
                    ),
                });
            }
        }
    }
    Ok(vectors)
}

/// Parses one 16-bit hexadecimal field, with or without a `0x` prefix.
fn parse_hex16(field: &str, line: usize) -> Result<u16, SimError> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    u16::from_str_radix(digits, 16).map_err(|e| SimError::VectorParse {
        line,
        reason: format!("invalid hex value '{field}': {e}"),
    })
}

/// Parses one boolean flag field (`0` or `1`).
fn parse_flag(field: &str, line: usize) -> Result<bool, SimError> {
    match field {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(SimError::VectorParse {
            line,
            reason: format!("invalid flag '{field}' (expected 0 or 1)"),
        }),
    }
}
