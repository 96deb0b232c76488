//! Report payload: ABI encoding of `(uint192 median, uint32 observationsTimestamp)`.
//!
//! Two big-endian 32-byte words, 64 bytes in total. The median must fit a
//! non-negative `i128`; everything above that is rejected instead of being
//! truncated.

use crate::types::AggregatorError;
use soroban_sdk::{Bytes, Env};

const WORD: usize = 32;
pub const REPORT_LEN: u32 = 2 * WORD as u32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Report {
    pub median: i128,
    pub observations_timestamp: u32,
}

impl Report {
    pub fn decode(report: &Bytes) -> Result<Self, AggregatorError> {
        if report.len() != REPORT_LEN {
            return Err(AggregatorError::InvalidReport);
        }
        let mut raw = [0u8; 2 * WORD];
        report.copy_into_slice(&mut raw);

        let (median_word, timestamp_word) = raw.split_at(WORD);

        // i128 occupies the low 16 bytes; its sign bit must be clear
        if median_word[..16].iter().any(|b| *b != 0) || median_word[16] & 0x80 != 0 {
            return Err(AggregatorError::InvalidReport);
        }
        let mut median = [0u8; 16];
        median.copy_from_slice(&median_word[16..]);

        if timestamp_word[..WORD - 4].iter().any(|b| *b != 0) {
            return Err(AggregatorError::InvalidReport);
        }
        let mut timestamp = [0u8; 4];
        timestamp.copy_from_slice(&timestamp_word[WORD - 4..]);

        Ok(Self {
            median: i128::from_be_bytes(median),
            observations_timestamp: u32::from_be_bytes(timestamp),
        })
    }

    /// Fails for negative medians, which the wire format cannot carry.
    pub fn encode(&self, env: &Env) -> Result<Bytes, AggregatorError> {
        if self.median < 0 {
            return Err(AggregatorError::InvalidReport);
        }
        let mut raw = [0u8; 2 * WORD];
        raw[16..WORD].copy_from_slice(&self.median.to_be_bytes());
        raw[2 * WORD - 4..].copy_from_slice(&self.observations_timestamp.to_be_bytes());
        Ok(Bytes::from_array(env, &raw))
    }
}
