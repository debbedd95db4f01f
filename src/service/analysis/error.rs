//! Error types for ToS analysis

use thiserror::Error;

/// Error type for ToS analysis
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    #[error("No document text provided for analysis")]
    EmptyInput,

    #[error("LLM analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Analysis output failed validation: {0}")]
    InvalidOutput(String),
}
