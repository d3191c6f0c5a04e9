//! Generation configuration: trait and env-based implementation.

use std::env;

use super::{GenerationError, Result};

/// Configuration interface for the generation API.
pub trait GenerationConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
}

/// Generation config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvGenerationConfig {
    pub cohere_api_key: String,
    pub cohere_base_url: String,
    pub cohere_model: String,
}

impl GenerationConfig for EnvGenerationConfig {
    fn api_key(&self) -> &str {
        &self.cohere_api_key
    }
    fn base_url(&self) -> &str {
        &self.cohere_base_url
    }
    fn model(&self) -> &str {
        &self.cohere_model
    }
}

impl EnvGenerationConfig {
    /// Load from environment variables. `api_key` overrides COHERE_API_KEY if provided.
    pub fn load(api_key: Option<String>) -> Result<Self> {
        let cohere_api_key = match api_key {
            Some(key) => key,
            None => env::var("COHERE_API_KEY")
                .map_err(|_| GenerationError::Config("COHERE_API_KEY not set".to_string()))?,
        };
        let cohere_base_url = env::var("COHERE_BASE_URL")
            .unwrap_or_else(|_| cohere_client::DEFAULT_BASE_URL.to_string());
        let cohere_model = env::var("COHERE_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "command".to_string());
        Ok(Self {
            cohere_api_key,
            cohere_base_url,
            cohere_model,
        })
    }

    /// Load from environment variables only.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }
}
