//! Fill runs and codepoint counting.
//!
//! Width is always measured in Unicode scalar values, while fill is
//! replicated in bytes: a run of `n` codepoints of a `w`-byte character is
//! exactly `n * w` bytes, each copy a complete encoding.

use crate::error::{PadError, Result};

/// `count` repetitions of one character's UTF-8 encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRun {
    bytes: Vec<u8>,
    count: usize,
}

impl FillRun {
    /// Builds a run of exactly `count` copies of `fill`.
    ///
    /// Fails with [`PadError::Allocation`] if the run's byte length does not
    /// fit in `usize` or its storage cannot be reserved.
    pub fn build(count: usize, fill: char) -> Result<Self> {
        let mut encoded = [0u8; 4];
        let encoded = fill.encode_utf8(&mut encoded).as_bytes();

        let total = count.checked_mul(encoded.len()).ok_or_else(|| {
            PadError::Allocation(format!(
                "fill run of {count} x {} bytes overflows usize",
                encoded.len()
            ))
        })?;

        let mut bytes = Vec::new();
        bytes.try_reserve_exact(total)?;
        if encoded.len() == 1 {
            bytes.resize(total, encoded[0]);
        } else {
            for _ in 0..count {
                bytes.extend_from_slice(encoded);
            }
        }

        tracing::trace!(count, bytes = total, fill = %fill.escape_debug(), "built fill run");

        Ok(Self { bytes, count })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of codepoints in the run.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Counts codepoints in `bytes`.
///
/// Valid UTF-8 is counted scalar by scalar. Each maximal run of undecodable
/// bytes counts as a single codepoint, the same way a lossy decode would
/// replace it with one U+FFFD. Never reads past the end of `bytes`.
pub fn codepoint_len(bytes: &[u8]) -> usize {
    bytes
        .utf8_chunks()
        .map(|chunk| chunk.valid().chars().count() + usize::from(!chunk.invalid().is_empty()))
        .sum()
}
