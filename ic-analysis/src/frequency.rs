//! Letter frequency counting

use crate::ALPHABET_SIZE;

/// Counts the frequency of each letter in the given text.
///
/// # Arguments
///
/// * `content` - The input text to analyze.
///
/// # Returns
///
/// An array of 26 frequencies for letters A-Z.
pub fn count_frequencies(content: &str) -> [u32; ALPHABET_SIZE] {
    let mut frequencies: [u32; ALPHABET_SIZE] = [0; ALPHABET_SIZE];

    // Iterate through each character in the content
    for c in content.chars() {
        // Only process alphabetic characters
        if c.is_ascii_alphabetic() {
            // Convert to uppercase and calculate array index (A=0, B=1, etc.)
            let index: usize = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            frequencies[index] += 1;
        }
    }

    frequencies
}
