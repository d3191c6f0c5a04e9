//! # Text generation client abstraction
//!
//! Defines the [`GenerationClient`] trait and a Cohere implementation. Transport-agnostic;
//! used by genbot's chat sessions. One call per prompt, fixed parameters, no retries.

use async_trait::async_trait;
use thiserror::Error;

mod cohere_generation;
mod config;

pub use cohere_client::mask_token;
pub use cohere_generation::CohereGenerationClient;
pub use config::{EnvGenerationConfig, GenerationConfig};

/// Errors from a generation call.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The API answered successfully but returned no candidates.
    #[error("generation API returned no candidates")]
    NoCandidates,

    /// The client could not be configured (missing key, bad URL).
    #[error("generation client config error: {0}")]
    Config(String),

    /// Transport, auth or quota error from the API, passed through as-is.
    #[error(transparent)]
    Api(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// Fixed parameter set sent with every prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// 0 means unrestricted.
    pub top_k: u32,
    pub stop_sequences: Vec<String>,
    pub return_likelihoods: String,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: "command".to_string(),
            max_tokens: 300,
            temperature: 0.9,
            top_k: 0,
            stop_sequences: Vec::new(),
            return_likelihoods: "NONE".to_string(),
        }
    }
}

impl GenerationParams {
    /// Same parameters with a different model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Generation client interface: one prompt in, the first candidate's text out.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generates text for `prompt`. Empty prompts are passed through unchanged.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
