//! Error types for legal document extraction

use thiserror::Error;

/// Error type for legal document extraction
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractionError {
    #[error("Insufficient content found on the page for analysis")]
    InsufficientContent,

    #[error("No Terms of Service found on this page. {0}")]
    NoDocumentFound(String),

    #[error("Terms of Service content appears to be empty or invalid")]
    EmptyDocument,

    #[error("LLM extraction failed: {0}")]
    ExtractionFailed(String),
}
