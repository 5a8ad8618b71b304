//! Index of Coincidence calculation

use crate::frequency::count_frequencies;

/// Calculates the Index of Coincidence (IC) for the given text.
///
/// The IC is the probability that two letters drawn at random from the text
/// are identical: sum of n_i * (n_i - 1) over all letters, divided by
/// N * (N - 1).
///
/// # Arguments
///
/// * `text` - The input text to analyze.
///
/// # Returns
///
/// The Index of Coincidence in [0, 1], or 0.0 if the text has fewer than
/// 2 alphabetic characters. Callers aggregating over many sequences must
/// treat that 0.0 as "no data", not as a low-coincidence measurement.
pub fn index_of_coincidence(text: &str) -> f64 {
    let frequencies = count_frequencies(text);
    let total: u32 = frequencies.iter().sum();

    // Below 2 letters the denominator N * (N - 1) would be 0
    if total < 2 {
        return 0.0;
    }

    let numerator: f64 = frequencies
        .iter()
        .map(|&freq| (freq * freq.saturating_sub(1)) as f64)
        .sum();
    let denominator = (total as u64 * (total - 1) as u64) as f64;

    numerator / denominator
}
