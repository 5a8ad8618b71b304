//! Input normalization for frequency analysis

/// Normalizes raw ciphertext for analysis by keeping only ASCII alphabetic
/// characters and converting them to uppercase.
///
/// Order is preserved; everything else (whitespace, punctuation, digits,
/// non-ASCII letters) is dropped. Total over all inputs, may return an
/// empty string.
///
/// # Arguments
///
/// * `raw` - The raw input text.
///
/// # Returns
///
/// The normalized uppercase letter sequence.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
