//! Error types for coincidence analysis

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("insufficient data to estimate key length")]
    InsufficientData,
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
