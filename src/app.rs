//! Application state and service initialization
//!
//! This module centralizes service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::fetcher::PageFetcher;
use crate::model::Config;
use crate::service::{
    LegalDocumentExtractionService, LiveDocumentPipeline, LlmClient, SessionService,
    TosAnalysisService,
};

/// Application state containing all services
pub struct AppState {
    /// The shared analyzer session service
    pub session_service: Arc<SessionService>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. LLM client initialization (requires OPENAI_API_KEY)
    /// 2. Service dependency graph construction
    pub fn new(config: Config) -> Result<Self, AppError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::MissingConfig("OPENAI_API_KEY"))?;

        let llm_client = LlmClient::new(&api_key);

        let pipeline = Arc::new(LiveDocumentPipeline::new(
            PageFetcher::new(config.fetcher),
            LegalDocumentExtractionService::new(llm_client.clone()),
            TosAnalysisService::new(llm_client),
        ));

        Ok(Self {
            session_service: Arc::new(SessionService::new(pipeline)),
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),
}
