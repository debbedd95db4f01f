//! Legal document extraction service using LLM
//!
//! Prunes fetched HTML with the heuristic extractor, then asks the model to
//! classify and extract the legal document text.

use rig::client::CompletionClient;

use crate::extract::extract_clean_content;
use crate::model::extracted::ExtractedLegalDocument;
use crate::service::extraction::prompts::{build_extraction_prompt, EXTRACTION_SYSTEM_PROMPT};
use crate::service::llm::LlmClient;

pub mod error;
pub mod prompts;

pub use error::ExtractionError;

/// Pruned content below this length cannot plausibly hold a legal document
const MIN_CONTENT_LEN: usize = 100;

/// Service for extracting legal document text from web page content
pub struct LegalDocumentExtractionService {
    llm_client: LlmClient,
    model: String,
}

impl LegalDocumentExtractionService {
    /// Creates a new extraction service
    ///
    /// Uses a shared LLM client passed from startup.
    /// Optionally uses EXTRACTION_MODEL env var (defaults to gpt-4o-mini)
    pub fn new(llm_client: LlmClient) -> Self {
        let model = LlmClient::extraction_model();

        tracing::info!(
            model = %model,
            "Legal document extraction service initialized"
        );

        Self { llm_client, model }
    }

    /// Extract legal document text from raw page HTML
    pub async fn extract_from_html(&self, raw_html: &str) -> Result<String, ExtractionError> {
        let cleaned = prepare_content(raw_html)?;
        let extracted = self.extract_document(&cleaned).await?;
        resolve_extraction(extracted)
    }

    /// Run the schema-constrained extraction call on pruned page content
    async fn extract_document(
        &self,
        page_content: &str,
    ) -> Result<ExtractedLegalDocument, ExtractionError> {
        let start_time = std::time::Instant::now();

        let prompt = build_extraction_prompt(page_content);
        let prompt_length = prompt.len();

        tracing::debug!(
            model = %self.model,
            prompt_length = prompt_length,
            "Initiating OpenAI API call for legal document extraction"
        );

        let extractor = self
            .llm_client
            .openai_client()
            .extractor::<ExtractedLegalDocument>(&self.model)
            .preamble(EXTRACTION_SYSTEM_PROMPT)
            .build();

        match extractor.extract(&prompt).await {
            Ok(result) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    document_found = result.document_found,
                    document_type = ?result.document_type,
                    "OpenAI API call for legal document extraction completed"
                );
                Ok(result)
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "OpenAI API call for legal document extraction failed"
                );
                Err(ExtractionError::ExtractionFailed(e.to_string()))
            }
        }
    }
}

/// Prune raw HTML down to candidate legal text
///
/// Errors when the pruned output is too small to plausibly hold a legal
/// document.
fn prepare_content(raw_html: &str) -> Result<String, ExtractionError> {
    let cleaned = extract_clean_content(raw_html);

    if cleaned.trim().len() < MIN_CONTENT_LEN {
        tracing::debug!(pruned_len = cleaned.len(), "Pruned content below threshold");
        return Err(ExtractionError::InsufficientContent);
    }

    Ok(cleaned)
}

/// Turn the model's classification into the document text or a failure
///
/// "Not found" and "empty text" stay distinct so the user sees the model's
/// reason in the first case.
fn resolve_extraction(extracted: ExtractedLegalDocument) -> Result<String, ExtractionError> {
    if !extracted.document_found {
        return Err(ExtractionError::NoDocumentFound(extracted.reason));
    }

    match extracted.extracted_text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ExtractionError::EmptyDocument),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extracted::ExtractedDocumentType;

    fn extraction(
        found: bool,
        text: Option<&str>,
        reason: &str,
    ) -> ExtractedLegalDocument {
        ExtractedLegalDocument {
            document_found: found,
            document_type: if found {
                ExtractedDocumentType::TermsOfService
            } else {
                ExtractedDocumentType::None
            },
            extracted_text: text.map(|t| t.to_string()),
            reason: reason.to_string(),
        }
    }

    #[test]
    fn tiny_pruned_content_is_insufficient() {
        // Prunes to almost nothing even though the raw HTML is large
        let html = format!(
            "<html><body><script>{}</script><p>ok</p></body></html>",
            "var filler = 0; ".repeat(50)
        );
        assert!(matches!(
            prepare_content(&html),
            Err(ExtractionError::InsufficientContent)
        ));
    }

    #[test]
    fn substantial_content_passes_preparation() {
        let clause = "You agree to binding arbitration for all disputes. ";
        let html = format!(
            "<html><body><div class=\"terms\">{}</div></body></html>",
            clause.repeat(20)
        );
        let cleaned = prepare_content(&html).unwrap();
        assert!(cleaned.contains("arbitration"));
    }

    #[test]
    fn missing_document_surfaces_model_reason() {
        let result = resolve_extraction(extraction(
            false,
            None,
            "The page is a product listing.",
        ));
        match result {
            Err(ExtractionError::NoDocumentFound(reason)) => {
                assert_eq!(reason, "The page is a product listing.");
            }
            other => panic!("expected NoDocumentFound, got {:?}", other),
        }
    }

    #[test]
    fn found_document_with_blank_text_is_empty() {
        let result = resolve_extraction(extraction(true, Some("   "), "Found a ToS"));
        assert!(matches!(result, Err(ExtractionError::EmptyDocument)));

        let result = resolve_extraction(extraction(true, None, "Found a ToS"));
        assert!(matches!(result, Err(ExtractionError::EmptyDocument)));
    }

    #[test]
    fn found_document_returns_its_text() {
        let result = resolve_extraction(extraction(
            true,
            Some("1. Acceptance of Terms ..."),
            "Found a ToS",
        ));
        assert_eq!(result.unwrap(), "1. Acceptance of Terms ...");
    }
}
