// C# Language Extractor
//
// Walks a tree-sitter-c-sharp tree and assembles one ClassRecord per class
// declaration, at any nesting depth, in depth-first source order:
// - Class name, base type, XML doc summary and verbatim source
// - Methods (with calls / event subscriptions / event raises)
// - Properties, fields, events and constructors

mod helpers;
mod members;
mod relationships;
pub mod summary;


use crate::extractors::base::{
    BaseExtractor, ClassRecord, DeclarationKind, EmbeddingSlot, ExtractionOptions,
};
use tree_sitter::{Node, Tree};

/// C# extractor using tree-sitter-c-sharp parser
pub struct CSharpExtractor {
    base: BaseExtractor,
    options: ExtractionOptions,
}

impl CSharpExtractor {
    /// Create new C# extractor for `content`, stamping `file_path` on its records
    pub fn new(file_path: String, content: String) -> Self {
        Self::with_options(file_path, content, ExtractionOptions::default())
    }

    pub fn with_options(file_path: String, content: String, options: ExtractionOptions) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
            options,
        }
    }

    /// Extract every class declaration in document order
    ///
    /// `tree` must have been parsed from the content this extractor holds.
    pub fn extract_classes(&self, tree: &Tree) -> Vec<ClassRecord> {
        self.base
            .find_nodes_by_type(&tree.root_node(), DeclarationKind::Class.node_kind())
            .iter()
            .filter_map(|node| self.extract_class(node))
            .collect()
    }

    /// Names of every interface declaration in document order
    pub fn extract_interface_names(&self, tree: &Tree) -> Vec<String> {
        self.base
            .find_nodes_by_type(&tree.root_node(), DeclarationKind::Interface.node_kind())
            .iter()
            .filter_map(|node| helpers::declaration_name(&self.base, node))
            .collect()
    }

    fn extract_class(&self, node: &Node) -> Option<ClassRecord> {
        let base = &self.base;
        let policy = self.options.nested_members;
        let name = helpers::declaration_name(base, node)?;

        Some(ClassRecord {
            name,
            summary: summary::resolve_summary(base, node),
            file_path: base.file_path.clone(),
            base_type: helpers::extract_base_list(base, node).into_iter().next(),
            source_code: base.get_full_text(node),
            methods: members::extract_methods(base, node, policy),
            properties: members::extract_properties(base, node, policy),
            events: members::extract_events(base, node, policy),
            fields: members::extract_fields(base, node, policy),
            constructors: members::extract_constructors(base, node, policy),
            embedding: EmbeddingSlot::default(),
        })
    }
}
