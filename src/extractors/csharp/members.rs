// C# Member Declaration Extraction
//
// Each extractor scans a class declaration's descendants for one declaration kind
// and returns records in source order. Declarations whose identifier cannot be
// found are skipped rather than failing the class.

use super::{helpers, relationships, summary};
use crate::extractors::base::{
    BaseExtractor, ConstructorRecord, DeclarationKind, EmbeddingSlot, EventRecord, FieldRecord,
    MethodRecord, NestedMemberPolicy, PropertyRecord,
};
use tree_sitter::Node;

/// Member declarations of the given kinds under `class`, honoring the nesting policy
fn member_nodes<'a>(
    base: &BaseExtractor,
    class: &Node<'a>,
    kinds: &[DeclarationKind],
    policy: NestedMemberPolicy,
) -> Vec<Node<'a>> {
    base.find_descendants(
        class,
        |n| DeclarationKind::from_node_kind(n.kind()).is_some_and(|k| kinds.contains(&k)),
        |n| {
            policy == NestedMemberPolicy::Exclude
                && DeclarationKind::from_node_kind(n.kind()).is_some_and(|k| k.is_type_declaration())
        },
    )
}

/// Extract methods with their call and event relationships
pub fn extract_methods(
    base: &BaseExtractor,
    class: &Node,
    policy: NestedMemberPolicy,
) -> Vec<MethodRecord> {
    member_nodes(base, class, &[DeclarationKind::Method], policy)
        .iter()
        .filter_map(|node| extract_method(base, node))
        .collect()
}

fn extract_method(base: &BaseExtractor, node: &Node) -> Option<MethodRecord> {
    let name = helpers::declaration_name(base, node)?;
    let relationships = relationships::extract_method_relationships(base, node);

    Some(MethodRecord {
        name,
        summary: summary::resolve_summary(base, node),
        parameters: helpers::render_parameters(base, node),
        return_type: helpers::extract_return_type(base, node).unwrap_or_else(|| "void".to_string()),
        source_code: base.get_full_text(node),
        calls: relationships.calls,
        subscribes_to_events: relationships.subscribes_to_events,
        raises_events: relationships.raises_events,
        embedding: EmbeddingSlot::default(),
    })
}

/// Extract properties
pub fn extract_properties(
    base: &BaseExtractor,
    class: &Node,
    policy: NestedMemberPolicy,
) -> Vec<PropertyRecord> {
    member_nodes(base, class, &[DeclarationKind::Property], policy)
        .iter()
        .filter_map(|node| {
            Some(PropertyRecord {
                name: helpers::declaration_name(base, node)?,
                type_name: helpers::extract_declared_type(base, node).unwrap_or_default(),
                modifiers: helpers::extract_modifiers(base, node),
                summary: summary::resolve_summary(base, node),
                source_code: base.get_full_text(node),
                embedding: EmbeddingSlot::default(),
            })
        })
        .collect()
}

/// Extract fields, one record per declared variable
pub fn extract_fields(
    base: &BaseExtractor,
    class: &Node,
    policy: NestedMemberPolicy,
) -> Vec<FieldRecord> {
    let mut fields = Vec::new();

    for node in member_nodes(base, class, &[DeclarationKind::Field], policy) {
        let Some((type_name, names)) = helpers::extract_variable_declaration(base, &node) else {
            continue;
        };
        let modifiers = helpers::extract_modifiers(base, &node);
        let summary = summary::resolve_summary(base, &node);
        let source_code = base.get_full_text(&node);

        fields.extend(names.into_iter().map(|name| FieldRecord {
            name,
            type_name: type_name.clone(),
            modifiers: modifiers.clone(),
            summary: summary.clone(),
            source_code: source_code.clone(),
            embedding: EmbeddingSlot::default(),
        }));
    }

    fields
}

/// Extract events, both accessor-form and field-like declarations
///
/// A field-like declaration `event Action A, B;` yields one record per name.
pub fn extract_events(
    base: &BaseExtractor,
    class: &Node,
    policy: NestedMemberPolicy,
) -> Vec<EventRecord> {
    let mut events = Vec::new();
    let kinds = [DeclarationKind::Event, DeclarationKind::EventField];

    for node in member_nodes(base, class, &kinds, policy) {
        let modifiers = helpers::extract_modifiers(base, &node);
        let summary = summary::resolve_summary(base, &node);
        let source_code = base.get_full_text(&node);

        let (type_name, names) = if node.kind() == DeclarationKind::EventField.node_kind() {
            match helpers::extract_variable_declaration(base, &node) {
                Some(declaration) => declaration,
                None => continue,
            }
        } else {
            let Some(name) = helpers::declaration_name(base, &node) else {
                continue;
            };
            let type_name = helpers::extract_declared_type(base, &node).unwrap_or_default();
            (type_name, vec![name])
        };

        events.extend(names.into_iter().map(|name| EventRecord {
            name,
            type_name: type_name.clone(),
            modifiers: modifiers.clone(),
            summary: summary.clone(),
            source_code: source_code.clone(),
            embedding: EmbeddingSlot::default(),
        }));
    }

    events
}

/// Extract constructors
pub fn extract_constructors(
    base: &BaseExtractor,
    class: &Node,
    policy: NestedMemberPolicy,
) -> Vec<ConstructorRecord> {
    member_nodes(base, class, &[DeclarationKind::Constructor], policy)
        .iter()
        .filter_map(|node| {
            Some(ConstructorRecord {
                name: helpers::declaration_name(base, node)?,
                summary: summary::resolve_summary(base, node),
                source_code: base.get_full_text(node),
                parameters: helpers::render_parameters(base, node),
                modifiers: helpers::extract_modifiers(base, node),
                embedding: EmbeddingSlot::default(),
            })
        })
        .collect()
}
