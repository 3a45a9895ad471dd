//! Embedding Support
//!
//! Turns record source text into vectors through an Ollama-compatible HTTP
//! endpoint and stores them, L2-normalized, in each record's embedding slot.
//!
//! - `config` - Endpoint URL and model, with environment overrides
//! - `client` - Blocking `/api/embed` client
//! - `normalize` - Unit-length scaling
//! - `attach` - Filling the slots of a class and its members

pub mod attach;
pub mod client;
pub mod config;
pub mod error;
pub mod normalize;

#[cfg(test)]
mod test_server;

pub use attach::{attach_embeddings, embed_record, Embeddable};
pub use client::{EmbeddingClient, TextEmbedder};
pub use config::EmbeddingConfig;
pub use error::EmbedError;
pub use normalize::normalize;
