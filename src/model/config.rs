use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

const ENV_CONFIG_PATH: &str = "TOS_AGENT_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Fetcher filtering configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetcherConfig {
    /// Allowed domains (whitelist). If empty, all domains are allowed.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Denied domains (blacklist). Applied after allow list.
    #[serde(default)]
    pub deny: Vec<String>,
}

impl FetcherConfig {
    /// Check if a URL is allowed based on the allow/deny lists
    pub fn is_url_allowed(&self, url: &Url) -> bool {
        let host = match url.host_str() {
            Some(h) => h.to_lowercase(),
            None => return false,
        };

        if self.deny.iter().any(|d| host.contains(&d.to_lowercase())) {
            return false;
        }

        if self.allow.is_empty() {
            return true;
        }

        self.allow.iter().any(|a| host.contains(&a.to_lowercase()))
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetcher: FetcherConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let fetcher = Self::load_config_file(&config_path)
            .map(|cf| cf.fetcher)
            .unwrap_or_default();

        Self {
            fetcher,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn empty_lists_allow_everything() {
        let config = FetcherConfig::default();
        assert!(config.is_url_allowed(&url("https://example.com/terms")));
    }

    #[test]
    fn deny_list_blocks_host() {
        let config = FetcherConfig {
            allow: vec![],
            deny: vec!["blocked.example".to_string()],
        };
        assert!(!config.is_url_allowed(&url("https://blocked.example/tos")));
        assert!(config.is_url_allowed(&url("https://other.example/tos")));
    }

    #[test]
    fn allow_list_restricts_hosts() {
        let config = FetcherConfig {
            allow: vec!["trusted.example".to_string()],
            deny: vec![],
        };
        assert!(config.is_url_allowed(&url("https://trusted.example/legal")));
        assert!(!config.is_url_allowed(&url("https://anything.else/legal")));
    }

    #[test]
    fn deny_wins_over_allow() {
        let config = FetcherConfig {
            allow: vec!["example.com".to_string()],
            deny: vec!["bad.example.com".to_string()],
        };
        assert!(!config.is_url_allowed(&url("https://bad.example.com/")));
    }
}
