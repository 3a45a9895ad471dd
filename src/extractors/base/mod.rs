// Base Extractor Types and Helpers
//
// - types.rs: Record structures (ClassRecord, member records, EmbeddingSlot, options)
// - kinds.rs: Typed declaration kinds over tree-sitter node kinds
// - extractor.rs: BaseExtractor (node text, leading trivia, doc comments)
// - tree_methods.rs: Tree navigation and traversal methods

pub mod extractor;
pub mod kinds;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use kinds::DeclarationKind;
pub use types::{
    ClassRecord, ConstructorRecord, EmbeddingAlreadySet, EmbeddingSlot, EventRecord,
    ExtractionOptions, FieldRecord, MethodRecord, NestedMemberPolicy, PropertyRecord,
};
