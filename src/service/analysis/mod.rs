//! ToS analysis service using LLM
//!
//! Produces the structured risk analysis (summary, critical warnings, points
//! of interest) from extracted legal text.

use rig::client::CompletionClient;

use crate::model::extracted::ExtractedAnalysis;
use crate::model::AnalysisResult;
use crate::service::analysis::converters::convert_analysis;
use crate::service::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM_PROMPT};
use crate::service::analysis::validation::validate_extracted_analysis;
use crate::service::llm::LlmClient;

pub mod converters;
pub mod error;
pub mod prompts;
pub mod validation;

pub use error::AnalysisError;

/// Service for analyzing Terms-of-Service text
pub struct TosAnalysisService {
    llm_client: LlmClient,
    model: String,
}

impl TosAnalysisService {
    /// Creates a new analysis service
    ///
    /// Uses a shared LLM client passed from startup.
    /// Optionally uses ANALYSIS_MODEL env var (defaults to gpt-4o)
    pub fn new(llm_client: LlmClient) -> Self {
        let model = LlmClient::analysis_model();

        tracing::info!(
            model = %model,
            "ToS analysis service initialized"
        );

        Self { llm_client, model }
    }

    /// Analyze the given ToS text into a structured risk analysis
    pub async fn analyze(&self, tos_text: &str) -> Result<AnalysisResult, AnalysisError> {
        if tos_text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let start_time = std::time::Instant::now();

        let prompt = build_analysis_prompt(tos_text);
        let prompt_length = prompt.len();

        tracing::debug!(
            model = %self.model,
            prompt_length = prompt_length,
            "Initiating OpenAI API call for ToS analysis"
        );

        let extractor = self
            .llm_client
            .openai_client()
            .extractor::<ExtractedAnalysis>(&self.model)
            .preamble(ANALYSIS_SYSTEM_PROMPT)
            .build();

        let extracted = match extractor.extract(&prompt).await {
            Ok(result) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    warnings = result.critical_warnings.len(),
                    points = result.points_of_interest.len(),
                    "OpenAI API call for ToS analysis completed"
                );
                result
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "OpenAI API call for ToS analysis failed"
                );
                return Err(AnalysisError::AnalysisFailed(e.to_string()));
            }
        };

        let validation = validate_extracted_analysis(&extracted);
        for warning in &validation.warnings {
            tracing::warn!(warning = %warning, "Analysis quality issue");
        }
        if !validation.is_valid {
            return Err(AnalysisError::InvalidOutput(validation.errors.join("; ")));
        }

        Ok(convert_analysis(extracted))
    }
}
