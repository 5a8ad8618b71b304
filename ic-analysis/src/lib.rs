//! # IC Analysis Library
//!
//! Index of Coincidence (IC) analysis for estimating the key length of a
//! polyalphabetic substitution cipher, such as a repeating-key shift cipher.
//!
//! The IC of a text is the probability that two letters drawn at random
//! from it are identical. English prose sits near 0.0667; uniformly random
//! letters sit near 1/26. Splitting a ciphertext into k interleaved columns
//! and checking how English-like the columns look therefore reveals the
//! key period: at the correct k each column is monoalphabetic.
//!
//! ## Usage
//!
//! ```rust
//! use ic_analysis::{normalize, scan_key_lengths, ScanConfig};
//!
//! let ciphertext = "Lipps asvph, lipps asvph, lipps asvph!";
//! let text = normalize(ciphertext);
//! let scan = scan_key_lengths(&text, &ScanConfig::default())?;
//! println!("most likely key length: {}", scan.best.key_length);
//! # Ok::<(), ic_analysis::AnalysisError>(())
//! ```

// Public modules
pub mod error;
pub mod frequency;
pub mod ic;
pub mod normalize;
pub mod scanner;

// Re-exports for easy access
pub use error::{AnalysisError, Result};
pub use frequency::count_frequencies;
pub use ic::index_of_coincidence;
pub use normalize::normalize;
pub use scanner::{
    scan_key_lengths, split_into_columns, KeyLengthCandidate, KeyLengthScan, ScanConfig,
    DEFAULT_MAX_KEY_LENGTH,
};

/// Standard index of coincidence for English.
pub const ENGLISH_IC: f64 = 0.0667;

/// Number of letters in the analyzed alphabet (A-Z).
pub const ALPHABET_SIZE: usize = 26;
