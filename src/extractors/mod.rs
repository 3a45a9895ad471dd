//! Class Metadata Extractors Module
//!
//! Tree-sitter based extraction of class-level metadata from C# source.
//!
//! # Architecture
//!
//! - `base` - Record types, source-text helpers and tree traversal shared by extractors
//! - `csharp` - Class, member and relationship extraction for C#
//! - `manager` - ExtractorManager public API (parsing, batches)

pub mod base;
pub mod csharp;
pub mod manager;

// Re-export the public API
pub use base::{
    ClassRecord, ConstructorRecord, EmbeddingAlreadySet, EmbeddingSlot, EventRecord,
    ExtractionOptions, FieldRecord, MethodRecord, NestedMemberPolicy, PropertyRecord,
};
pub use csharp::CSharpExtractor;
pub use manager::{ExtractorManager, FileExtraction};
