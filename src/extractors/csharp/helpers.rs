// C# Helper Methods
//
// Collection of utility functions for reading names, types, modifiers and
// parameter lists off C# declaration nodes

use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// Node kinds that can spell a type in declaration position
const TYPE_NODE_KINDS: &[&str] = &[
    "predefined_type",
    "identifier",
    "qualified_name",
    "generic_name",
    "array_type",
    "nullable_type",
    "tuple_type",
    "pointer_type",
    "ref_type",
];

/// Child kinds that end the header part of a declaration; the name comes before them
const NAME_TERMINATORS: &[&str] = &[
    "type_parameter_list",
    "parameter_list",
    "base_list",
    "accessor_list",
    "arrow_expression_clause",
    "equals_value_clause",
    "declaration_list",
    "=",
    ";",
    "{",
];

/// Declared identifier of a class, member or parameter
///
/// Uses the grammar's `name` field and falls back to the last identifier in the
/// declaration header, so an identifier-typed member (`Foo Bar()`) yields `Bar`.
pub fn declaration_name(base: &BaseExtractor, node: &Node) -> Option<String> {
    let name_node = match node.child_by_field_name("name") {
        Some(name) if name.kind() == "identifier" => Some(name),
        _ => {
            let mut cursor = node.walk();
            let mut last_identifier = None;
            for child in node.children(&mut cursor) {
                if NAME_TERMINATORS.contains(&child.kind()) {
                    break;
                }
                if child.kind() == "identifier" {
                    last_identifier = Some(child);
                }
            }
            last_identifier
        }
    }?;

    let name = base.get_node_text(&name_node);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Extract modifier keywords (`public`, `static`, ...) in declaration order
///
/// Attribute lists are not modifiers and are left out.
pub fn extract_modifiers(base: &BaseExtractor, node: &Node) -> Vec<String> {
    base.find_children_by_type(node, "modifier")
        .iter()
        .map(|modifier| base.get_node_text(modifier))
        .collect()
}

/// Extract base list (inheritance/implementation classes and interfaces)
pub fn extract_base_list(base: &BaseExtractor, node: &Node) -> Vec<String> {
    let Some(base_list) = base.find_child_by_type(node, "base_list") else {
        return Vec::new();
    };

    let mut base_cursor = base_list.walk();
    base_list
        .children(&mut base_cursor)
        .filter(|c| c.is_named() && c.kind() != "comment")
        .map(|c| base.get_node_text(&c))
        .collect()
}

/// Extract return type text from a method node, exactly as written
pub fn extract_return_type(base: &BaseExtractor, node: &Node) -> Option<String> {
    if let Some(text) = base
        .get_field_text(node, "returns")
        .or_else(|| base.get_field_text(node, "type"))
    {
        return Some(text);
    }

    // Positional fallback: first type-like node before the method name
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    let param_list_index = children.iter().position(|c| c.kind() == "parameter_list")?;
    let name_index = children[..param_list_index]
        .iter()
        .rposition(|c| c.kind() == "identifier")?;

    children[..name_index]
        .iter()
        .find(|c| TYPE_NODE_KINDS.contains(&c.kind()))
        .map(|node| base.get_node_text(node))
}

/// Extract declared type of a property or accessor-form event
pub fn extract_declared_type(base: &BaseExtractor, node: &Node) -> Option<String> {
    if let Some(text) = base.get_field_text(node, "type") {
        return Some(text);
    }

    // Positional fallback: first type-like node that is not the name
    let name = node.child_by_field_name("name");
    let mut cursor = node.walk();
    let type_node = node
        .children(&mut cursor)
        .filter(|c| Some(*c) != name)
        .find(|c| TYPE_NODE_KINDS.contains(&c.kind()));
    type_node.map(|node| base.get_node_text(&node))
}

/// Type and declarator names of a `variable_declaration` child
///
/// Covers field declarations and field-like events, which both declare
/// `Type a, b, c;`.
pub fn extract_variable_declaration(base: &BaseExtractor, node: &Node) -> Option<(String, Vec<String>)> {
    let var_declaration = base.find_child_by_type(node, "variable_declaration")?;

    let type_text = base
        .get_field_text(&var_declaration, "type")
        .or_else(|| {
            let mut cursor = var_declaration.walk();
            let type_node = var_declaration
                .children(&mut cursor)
                .find(|c| c.is_named() && c.kind() != "variable_declarator");
            type_node.map(|n| base.get_node_text(&n))
        })
        .unwrap_or_default();

    let names = base
        .find_children_by_type(&var_declaration, "variable_declarator")
        .iter()
        .filter_map(|declarator| declaration_name(base, declarator))
        .collect();

    Some((type_text, names))
}

/// Render a parameter list as `"Type name"` pairs joined by `", "`
pub fn render_parameters(base: &BaseExtractor, node: &Node) -> String {
    let Some(param_list) = node
        .child_by_field_name("parameters")
        .or_else(|| base.find_child_by_type(node, "parameter_list"))
    else {
        return String::new();
    };

    let mut cursor = param_list.walk();
    let mut rendered: Vec<String> = param_list
        .named_children(&mut cursor)
        .filter(|p| matches!(p.kind(), "parameter" | "parameter_array"))
        .map(|p| render_parameter(base, &p))
        .filter(|p| !p.is_empty())
        .collect();

    // A trailing `params T[] name` sits directly on the list as type/name fields
    if let (Some(type_text), Some(name_text)) = (
        base.get_field_text(&param_list, "type"),
        base.get_field_text(&param_list, "name"),
    ) {
        rendered.push(format!("{} {}", type_text, name_text));
    }

    rendered.join(", ")
}

fn render_parameter(base: &BaseExtractor, param: &Node) -> String {
    let mut cursor = param.walk();
    let parts: Vec<Node> = param
        .named_children(&mut cursor)
        .filter(|c| {
            !matches!(
                c.kind(),
                "attribute_list" | "modifier" | "parameter_modifier" | "equals_value_clause" | "comment"
            )
        })
        .collect();

    let name_node = param
        .child_by_field_name("name")
        .or_else(|| parts.iter().rev().find(|c| c.kind() == "identifier").copied());
    let type_node = param.child_by_field_name("type").or_else(|| {
        parts
            .iter()
            .take_while(|c| Some(**c) != name_node)
            .last()
            .copied()
    });

    let type_text = type_node.map(|n| base.get_node_text(&n)).unwrap_or_default();
    let name_text = name_node.map(|n| base.get_node_text(&n)).unwrap_or_default();
    format!("{} {}", type_text, name_text).trim().to_string()
}
