// Embedding Client
//
// Blocking client for an Ollama-compatible `/api/embed` endpoint. One call, one
// request: no batching, caching or retries happen here.

use super::{EmbedError, EmbeddingConfig};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Anything that can turn text into an embedding vector
pub trait TextEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
}

/// HTTP embedding client
///
/// Wraps `reqwest::blocking::Client`, so it is `Send + Sync` and may be shared
/// across threads. Do not call it from inside an async runtime.
#[derive(Debug, Clone)]
pub struct EmbeddingClient {
    config: EmbeddingConfig,
    http: reqwest::blocking::Client,
}

impl EmbeddingClient {
    pub fn new(config: EmbeddingConfig) -> Self {
        Self::with_http_client(config, reqwest::blocking::Client::new())
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, TLS roots)
    pub fn with_http_client(config: EmbeddingConfig, http: reqwest::blocking::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    /// Request the embedding of `text`
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let endpoint = self.config.endpoint();
        let request = EmbedRequest {
            model: &self.config.model,
            input: text,
        };

        let response = self
            .http
            .post(&endpoint)
            .json(&request)
            .send()?
            .error_for_status()?;
        let body = response.text()?;

        let vector = parse_embedding_response(&body)?;
        debug!(
            "Embedded {} chars with {} into {} dimensions",
            text.len(),
            self.config.model,
            vector.len()
        );
        Ok(vector)
    }
}

impl TextEmbedder for EmbeddingClient {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        EmbeddingClient::embed(self, text)
    }
}

/// First vector of an `{"embeddings": [[...], ...]}` body
fn parse_embedding_response(body: &str) -> Result<Vec<f32>, EmbedError> {
    let value: serde_json::Value =
        serde_json::from_str(body).context("embedding response is not valid JSON")?;

    let embeddings = value
        .get("embeddings")
        .ok_or_else(|| EmbedError::shape("missing `embeddings` field"))?;

    let first = embeddings
        .as_array()
        .ok_or_else(|| EmbedError::shape("`embeddings` is not an array"))?
        .first()
        .ok_or_else(|| EmbedError::shape("`embeddings` holds no vectors"))?;

    Vec::<f32>::deserialize(first).map_err(|e| EmbedError::ResponseShape {
        reason: "first embedding is not an array of numbers".to_string(),
        source: Some(e),
    })
}
