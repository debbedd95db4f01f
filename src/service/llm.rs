//! Shared LLM client and model selection
//!
//! Provides a common interface for OpenAI API interactions used by the
//! extraction and analysis services.

use rig::providers::openai;

const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";
const ENV_EXTRACTION_MODEL: &str = "EXTRACTION_MODEL";

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Self {
        Self {
            client: openai::Client::new(api_key),
        }
    }

    /// Get a reference to the underlying OpenAI client
    /// Use this to create extractors with custom configuration
    pub fn openai_client(&self) -> &openai::Client {
        &self.client
    }

    /// Model used for the ToS analysis call (defaults to gpt-4o)
    pub fn analysis_model() -> String {
        std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| openai::GPT_4O.to_string())
    }

    /// Model used for legal document extraction (defaults to gpt-4o-mini)
    pub fn extraction_model() -> String {
        std::env::var(ENV_EXTRACTION_MODEL).unwrap_or_else(|_| openai::GPT_4O_MINI.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_constructs_without_network() {
        let client = LlmClient::new("test-key");
        let _ = client.openai_client();
    }
}
