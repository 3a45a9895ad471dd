//! Language Support - Shared tree-sitter language configuration
//!
//! Centralized front-end setup: language lookup by name, extension detection,
//! and parsing source text into a tree-sitter tree. Extraction itself never
//! parses; it consumes the tree produced here (or by any caller-owned parser).

use anyhow::{Context, Result};
use tree_sitter::{Parser, Tree};

/// Languages with a structural extractor
pub const SUPPORTED_LANGUAGES: &[&str] = &["csharp"];

/// Get tree-sitter language parser for a given language name
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "csharp" => Ok(tree_sitter_c_sharp::LANGUAGE.into()),
        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: {}",
            language,
            SUPPORTED_LANGUAGES.join(", ")
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "cs" => Some("csharp"),
        _ => None,
    }
}

/// Parse `content` with the grammar registered for `language`
pub fn parse_source(language: &str, content: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    let tree_sitter_language = get_tree_sitter_language(language)?;

    parser
        .set_language(&tree_sitter_language)
        .with_context(|| format!("Failed to set parser language for {}", language))?;

    parser
        .parse(content, None)
        .with_context(|| format!("Parser produced no tree for {} source", language))
}
