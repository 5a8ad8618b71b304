//! Key-length scanning via the Index of Coincidence method
//!
//! For each candidate key length k, the normalized ciphertext is split into
//! k interleaved columns (one per key position). Under the correct key
//! length each column is monoalphabetic and shows natural-language-like
//! coincidence, so the candidate whose aggregate IC lands closest to the
//! expected plaintext IC is the most likely key length.

use crate::error::{AnalysisError, Result};
use crate::ic::index_of_coincidence;
use crate::ENGLISH_IC;

/// Default upper bound on candidate key lengths.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Tunable parameters for a key-length scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Largest key length to try; clamped to the text length.
    pub max_key_length: usize,
    /// Expected IC of the assumed plaintext language.
    pub reference_ic: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            reference_ic: ENGLISH_IC,
        }
    }
}

/// One candidate key length and its aggregate IC.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLengthCandidate {
    pub key_length: usize,
    pub aggregate_ic: f64,
}

/// Full result of a scan: every candidate in ascending key-length order,
/// plus the selected best candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLengthScan {
    pub candidates: Vec<KeyLengthCandidate>,
    pub best: KeyLengthCandidate,
}

/// Splits text into interleaved columns based on key length.
/// Column i contains the characters at positions congruent to i mod
/// `key_length`, i.e. the characters encrypted with the same key character.
pub fn split_into_columns(text: &str, key_length: usize) -> Vec<String> {
    let mut columns = vec![String::new(); key_length];

    for (i, c) in text.chars().enumerate() {
        columns[i % key_length].push(c);
    }

    columns
}

/// Length-weighted mean IC over the columns of one candidate key length.
///
/// Columns with fewer than 2 characters have IC 0 and carry their own
/// length as weight, so empty columns drop out of both sums and singleton
/// columns pull the aggregate toward 0 without distorting the weighting.
fn aggregate_column_ic(columns: &[String]) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0usize;

    for column in columns {
        weighted_sum += column.len() as f64 * index_of_coincidence(column);
        total_weight += column.len();
    }

    if total_weight == 0 {
        return 0.0;
    }

    weighted_sum / total_weight as f64
}

/// Scans candidate key lengths 1..=max and selects the one whose aggregate
/// IC is closest to the configured reference IC.
///
/// The candidate bound is `min(config.max_key_length, text.len())`, floored
/// at 1. Ties on distance to the reference are broken toward the smallest
/// key length, so results are reproducible.
///
/// # Arguments
///
/// * `text` - The normalized ciphertext (uppercase letters only).
/// * `config` - Scan bounds and the reference IC.
///
/// # Returns
///
/// The full candidate list and the best candidate, or
/// [`AnalysisError::InsufficientData`] if `text` is empty.
pub fn scan_key_lengths(text: &str, config: &ScanConfig) -> Result<KeyLengthScan> {
    if text.is_empty() {
        return Err(AnalysisError::InsufficientData);
    }

    let bound = config.max_key_length.min(text.len()).max(1);
    let mut candidates: Vec<KeyLengthCandidate> = Vec::with_capacity(bound);

    for key_length in 1..=bound {
        let columns = split_into_columns(text, key_length);
        let aggregate_ic = aggregate_column_ic(&columns);
        candidates.push(KeyLengthCandidate {
            key_length,
            aggregate_ic,
        });
    }

    // Strict < while iterating ascending keeps the smallest k on ties
    let mut best = candidates[0].clone();
    let mut best_delta = (best.aggregate_ic - config.reference_ic).abs();

    for candidate in &candidates[1..] {
        let delta = (candidate.aggregate_ic - config.reference_ic).abs();
        if delta < best_delta {
            best_delta = delta;
            best = candidate.clone();
        }
    }

    Ok(KeyLengthScan { candidates, best })
}
