//! Cohere-backed [`GenerationClient`]: builds the generate request from [`GenerationParams`].

use async_trait::async_trait;
use cohere_client::{CohereClient, GenerateRequest};
use tracing::{instrument, warn};

use super::{GenerationClient, GenerationConfig, GenerationError, GenerationParams, Result};

/// [`GenerationClient`] implementation on top of `cohere-client`.
#[derive(Clone)]
pub struct CohereGenerationClient {
    client: CohereClient,
    params: GenerationParams,
}

impl CohereGenerationClient {
    /// Creates a client with the default base URL and default parameters.
    pub fn new(api_key: String) -> Result<Self> {
        let client = CohereClient::new(api_key).map_err(|e| GenerationError::Config(e.to_string()))?;
        Ok(Self {
            client,
            params: GenerationParams::default(),
        })
    }

    /// Creates a client from config: key, base URL and model.
    pub fn from_config(config: &dyn GenerationConfig) -> Result<Self> {
        let client = CohereClient::with_base_url(
            config.api_key().to_string(),
            config.base_url().to_string(),
        )
        .map_err(|e| GenerationError::Config(e.to_string()))?;
        Ok(Self {
            client,
            params: GenerationParams::default().with_model(config.model()),
        })
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    fn build_request(&self, prompt: &str) -> GenerateRequest {
        GenerateRequest {
            model: self.params.model.clone(),
            prompt: prompt.to_string(),
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            k: self.params.top_k,
            stop_sequences: self.params.stop_sequences.clone(),
            return_likelihoods: self.params.return_likelihoods.clone(),
        }
    }
}

#[async_trait]
impl GenerationClient for CohereGenerationClient {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = self.build_request(prompt);
        let response = self.client.generate(&request).await?;
        match response.generations.into_iter().next() {
            Some(first) => Ok(first.text),
            None => {
                warn!(model = %self.params.model, "Generation returned no candidates");
                Err(GenerationError::NoCandidates)
            }
        }
    }
}
