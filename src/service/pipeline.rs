//! Document pipeline: the two external operations behind the session flow
//!
//! The trait seam lets the session orchestration be exercised without a live
//! fetcher or model behind it.

use async_trait::async_trait;

use crate::fetcher::{FetcherError, PageFetcher};
use crate::model::AnalysisResult;
use crate::service::analysis::{AnalysisError, TosAnalysisService};
use crate::service::extraction::{ExtractionError, LegalDocumentExtractionService};

/// Error from any stage of the pipeline
///
/// Display output is the single user-facing message the session surfaces.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetcherError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// The two external operations the session orchestrates
#[async_trait]
pub trait DocumentPipeline: Send + Sync {
    /// Fetch a page by user-supplied URL and extract its legal document text
    async fn extract_from_url(&self, url: &str) -> Result<String, PipelineError>;

    /// Analyze ToS text into a structured risk analysis
    async fn analyze(&self, tos_text: &str) -> Result<AnalysisResult, PipelineError>;
}

/// Live pipeline backed by the page fetcher and the LLM services
pub struct LiveDocumentPipeline {
    fetcher: PageFetcher,
    extraction: LegalDocumentExtractionService,
    analysis: TosAnalysisService,
}

impl LiveDocumentPipeline {
    pub fn new(
        fetcher: PageFetcher,
        extraction: LegalDocumentExtractionService,
        analysis: TosAnalysisService,
    ) -> Self {
        Self {
            fetcher,
            extraction,
            analysis,
        }
    }
}

#[async_trait]
impl DocumentPipeline for LiveDocumentPipeline {
    async fn extract_from_url(&self, url: &str) -> Result<String, PipelineError> {
        let url = self.fetcher.validate_url(url)?;
        let page = self.fetcher.fetch(&url).await?;
        let text = self.extraction.extract_from_html(&page.raw_html).await?;
        Ok(text)
    }

    async fn analyze(&self, tos_text: &str) -> Result<AnalysisResult, PipelineError> {
        Ok(self.analysis.analyze(tos_text).await?)
    }
}
