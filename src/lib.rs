// Codemeta Core - tree-sitter powered class metadata for C# code search
//
// Extracts classes and their members (with documentation summaries and
// name-based call/event relationships), embeds their source text, and lists the
// files a repository changed since its last commit.

pub mod embedding;
pub mod extractors;
pub mod git;
pub mod language;

pub use embedding::{
    attach_embeddings, normalize, EmbedError, Embeddable, EmbeddingClient, EmbeddingConfig,
    TextEmbedder,
};
pub use extractors::{
    ClassRecord, ConstructorRecord, CSharpExtractor, EmbeddingAlreadySet, EmbeddingSlot,
    EventRecord, ExtractionOptions, ExtractorManager, FieldRecord, FileExtraction, MethodRecord,
    NestedMemberPolicy, PropertyRecord,
};
pub use git::{changed_files, changed_files_with, changed_source_files, ChangedFileOptions, GitError};
pub use language::{detect_language_from_extension, parse_source, SUPPORTED_LANGUAGES};
