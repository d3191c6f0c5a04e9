//! # Cohere API client
//!
//! Thin wrapper around [reqwest] for the Cohere `generate` endpoint.
//! Provides token masking for safe logging and a simple request/response API.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default API base URL (no trailing slash, no version segment).
pub const DEFAULT_BASE_URL: &str = "https://api.cohere.ai";

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Body of `POST /v1/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Top-k sampling; 0 disables the restriction.
    pub k: u32,
    pub stop_sequences: Vec<String>,
    /// One of `NONE`, `GENERATION`, `ALL`.
    pub return_likelihoods: String,
}

/// One generation candidate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Generation {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
}

/// Response of `POST /v1/generate`. Candidates keep the API's order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub generations: Vec<Generation>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Cohere client. Holds a shared reqwest client, the API key and the base URL.
#[derive(Clone)]
pub struct CohereClient {
    http: Arc<reqwest::Client>,
    api_key: String,
    base_url: String,
}

impl CohereClient {
    /// Builds a client using the given API key and [`DEFAULT_BASE_URL`].
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client with a custom base URL (proxies, mock servers).
    pub fn with_base_url(api_key: String, base_url: String) -> anyhow::Result<Self> {
        if api_key.trim().is_empty() {
            anyhow::bail!("Cohere API key is empty");
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http: Arc::new(http),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a generate request and returns the decoded response.
    ///
    /// Non-2xx statuses are returned as errors carrying the status and the API's `message`.
    pub async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        let url = format!("{}/v1/generate", self.base_url);

        tracing::info!(
            model = %request.model,
            prompt_len = request.prompt.len(),
            max_tokens = request.max_tokens,
            api_key = %mask_token(&self.api_key),
            "Cohere generate request"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            tracing::warn!(status = %status, message = %message, "Cohere generate failed");
            anyhow::bail!("Cohere API error ({}): {}", status, message);
        }

        let decoded: GenerateResponse = response.json().await?;
        tracing::info!(
            generations = decoded.generations.len(),
            "Cohere generate response"
        );
        Ok(decoded)
    }
}
