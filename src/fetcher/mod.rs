//! Fetching of user-supplied web pages

use chrono::{DateTime, Utc};
use reqwest::Client;
use url::Url;

use crate::model::FetcherConfig;

/// Browser-like user agent; some legal pages refuse obvious bot traffic
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, thiserror::Error)]
pub enum FetcherError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid URL: Only HTTP and HTTPS protocols are supported")]
    UnsupportedScheme,

    #[error("URL blocked by configuration: {0}")]
    Blocked(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to fetch content from URL: {0}")]
    BadStatus(String),

    #[error("No content found at the provided URL")]
    EmptyBody,
}

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    pub raw_html: String,
    pub content_type: Option<String>,
    pub retrieved_at: DateTime<Utc>,
}

/// Fetches arbitrary user-supplied pages over HTTP(S)
pub struct PageFetcher {
    client: Client,
    config: FetcherConfig,
}

impl PageFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        if !config.allow.is_empty() {
            tracing::info!(allow = ?config.allow, "Fetcher whitelist configured");
        }
        if !config.deny.is_empty() {
            tracing::info!(deny = ?config.deny, "Fetcher blacklist configured");
        }

        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    /// Validate a user-supplied URL string: parseable, http/https, not blocked
    pub fn validate_url(&self, raw: &str) -> Result<Url, FetcherError> {
        let url = Url::parse(raw.trim()).map_err(|_| FetcherError::InvalidUrl(raw.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetcherError::UnsupportedScheme);
        }

        if !self.config.is_url_allowed(&url) {
            tracing::debug!(url = %url, "URL blocked by configuration");
            return Err(FetcherError::Blocked(url.to_string()));
        }

        Ok(url)
    }

    /// Fetch the page at the given URL
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetcherError> {
        tracing::debug!(url = %url, "Fetching web page");

        let response = self.client.get(url.as_str()).send().await?;

        if !response.status().is_success() {
            return Err(FetcherError::BadStatus(format!(
                "{} {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("")
            )));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let raw_html = response.text().await?;

        if raw_html.trim().is_empty() {
            return Err(FetcherError::EmptyBody);
        }

        tracing::debug!(
            url = %url,
            bytes = raw_html.len(),
            content_type = content_type.as_deref().unwrap_or("unknown"),
            "Page fetched"
        );

        Ok(FetchedPage {
            url: url.clone(),
            raw_html,
            content_type,
            retrieved_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_url() {
        let fetcher = PageFetcher::new(FetcherConfig::default());
        assert!(matches!(
            fetcher.validate_url("not a url"),
            Err(FetcherError::InvalidUrl(_))
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let fetcher = PageFetcher::new(FetcherConfig::default());
        assert!(matches!(
            fetcher.validate_url("ftp://example.com/terms"),
            Err(FetcherError::UnsupportedScheme)
        ));
        assert!(matches!(
            fetcher.validate_url("file:///etc/passwd"),
            Err(FetcherError::UnsupportedScheme)
        ));
    }

    #[test]
    fn accepts_http_and_https() {
        let fetcher = PageFetcher::new(FetcherConfig::default());
        assert!(fetcher.validate_url("http://example.com/terms").is_ok());
        assert!(fetcher.validate_url("https://example.com/terms").is_ok());
    }

    #[test]
    fn rejects_denied_host() {
        let fetcher = PageFetcher::new(FetcherConfig {
            allow: vec![],
            deny: vec!["internal.example".to_string()],
        });
        assert!(matches!(
            fetcher.validate_url("https://internal.example/tos"),
            Err(FetcherError::Blocked(_))
        ));
    }
}
