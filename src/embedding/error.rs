// Embedding Client Errors

use thiserror::Error;

/// Failure of a single embedding request
#[derive(Debug, Error)]
pub enum EmbedError {
    /// The request could not be sent, its body could not be read, or the
    /// endpoint answered with a non-success status
    #[error("embedding request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with JSON that does not carry an embedding vector
    #[error("unexpected embedding response shape: {reason}")]
    ResponseShape {
        reason: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl EmbedError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::ResponseShape {
            reason: reason.into(),
            source: None,
        }
    }
}
