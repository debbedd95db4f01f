pub mod analysis;
pub mod extraction;
pub mod llm;
pub mod pipeline;
pub mod session;

pub use analysis::TosAnalysisService;
pub use extraction::LegalDocumentExtractionService;
pub use llm::LlmClient;
pub use pipeline::{LiveDocumentPipeline, PipelineError};
pub use session::SessionService;
