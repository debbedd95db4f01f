//! Unified API error handling
//!
//! Converts pipeline failures into a consistent error response format with a
//! single user-readable message, per endpoint.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use uuid::Uuid;

use crate::fetcher::FetcherError;
use crate::service::analysis::AnalysisError;
use crate::service::extraction::ExtractionError;
use crate::service::PipelineError;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Bad request / validation error (400)
    #[error("{0}")]
    BadRequest(String),

    /// No legal document could be extracted (422)
    #[error("{0}")]
    NoDocument(String),

    /// Upstream fetch failure (502)
    #[error("{0}")]
    ExternalService(String),

    /// Internal server error (500)
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NoDocument(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NoDocument(_) => "no_document_found",
            ApiError::ExternalService(_) => "external_service_error",
            ApiError::Internal(_) => "internal_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        let message = err.to_string();
        match err {
            PipelineError::Fetch(
                FetcherError::InvalidUrl(_)
                | FetcherError::UnsupportedScheme
                | FetcherError::Blocked(_),
            ) => ApiError::BadRequest(message),
            PipelineError::Fetch(_) => ApiError::ExternalService(message),
            PipelineError::Extraction(
                ExtractionError::NoDocumentFound(_)
                | ExtractionError::EmptyDocument
                | ExtractionError::InsufficientContent,
            ) => ApiError::NoDocument(message),
            PipelineError::Extraction(ExtractionError::ExtractionFailed(_)) => {
                ApiError::Internal(message)
            }
            PipelineError::Analysis(AnalysisError::EmptyInput) => ApiError::BadRequest(message),
            PipelineError::Analysis(_) => ApiError::Internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_maps_to_bad_request() {
        let err: ApiError =
            PipelineError::Fetch(FetcherError::InvalidUrl("nope".to_string())).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn fetch_failure_maps_to_bad_gateway() {
        let err: ApiError =
            PipelineError::Fetch(FetcherError::BadStatus("503 Service Unavailable".into())).into();
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn missing_document_maps_to_unprocessable() {
        let err: ApiError = PipelineError::Extraction(ExtractionError::NoDocumentFound(
            "The page is a product listing.".to_string(),
        ))
        .into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn llm_failure_maps_to_internal() {
        let err: ApiError =
            PipelineError::Analysis(AnalysisError::AnalysisFailed("timeout".to_string())).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
