// C# Relationship Extraction
//
// Name-based relationships derived from a method body: callee names, event
// subscriptions (`x += y`) and event raises. Everything is raw identifier text;
// nothing is resolved against declared symbols.

use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// Relationship lists of one method, each in occurrence order with duplicates kept
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodRelationships {
    pub calls: Vec<String>,
    pub subscribes_to_events: Vec<String>,
    pub raises_events: Vec<String>,
}

/// Walk every invocation and assignment inside `method` in source order
pub fn extract_method_relationships(base: &BaseExtractor, method: &Node) -> MethodRelationships {
    let mut relationships = MethodRelationships::default();

    let nodes = base.find_descendants(
        method,
        |n| matches!(n.kind(), "invocation_expression" | "assignment_expression"),
        |_| false,
    );

    for node in nodes {
        match node.kind() {
            "invocation_expression" => {
                let Some((callee, is_bare_identifier)) = callee_text(base, &node) else {
                    continue;
                };

                if let Some(call) = callee.split('.').next_back() {
                    relationships.calls.push(call.to_string());
                }
                if let Some(raised) = raised_event_name(&callee, is_bare_identifier) {
                    relationships.raises_events.push(raised);
                }
            }
            "assignment_expression" => {
                if let Some(left) = subscription_target(base, &node) {
                    relationships.subscribes_to_events.push(left);
                }
            }
            _ => {}
        }
    }

    relationships
}

/// Callee expression text of an invocation, and whether it is a bare identifier
///
/// A member binding (`.Invoke` under `Changed?.Invoke()`) is prefixed with the
/// enclosing conditional access target so it reads `Changed?.Invoke`.
fn callee_text(base: &BaseExtractor, invocation: &Node) -> Option<(String, bool)> {
    let function = invocation.child_by_field_name("function").or_else(|| {
        let mut cursor = invocation.walk();
        let first = invocation.named_children(&mut cursor).next();
        first
    })?;

    let mut text = base.get_node_text(&function);
    if function.kind() == "member_binding_expression" {
        if let Some(target) = conditional_access_target(base, invocation) {
            text = format!("{}?{}", target, text);
        }
    }

    if text.is_empty() {
        None
    } else {
        Some((text, function.kind() == "identifier"))
    }
}

fn conditional_access_target(base: &BaseExtractor, node: &Node) -> Option<String> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.kind() == "conditional_access_expression" {
            let condition = parent.child_by_field_name("condition").or_else(|| {
                let mut cursor = parent.walk();
                let first = parent.named_children(&mut cursor).next();
                first
            })?;
            return Some(base.get_node_text(&condition));
        }
        if !parent.kind().ends_with("expression") {
            return None;
        }
        current = parent.parent();
    }
    None
}

/// Event-raise heuristic: `X.Invoke(...)` raises `X`, a bare `X(...)` raises `X`
fn raised_event_name(callee: &str, is_bare_identifier: bool) -> Option<String> {
    if let Some(target) = callee.strip_suffix(".Invoke") {
        let target = target.strip_suffix('?').unwrap_or(target);
        return if target.is_empty() {
            None
        } else {
            Some(target.to_string())
        };
    }

    if is_bare_identifier {
        return Some(callee.to_string());
    }

    None
}

/// Left-hand side of a compound add assignment (`Changed += OnChanged`)
fn subscription_target(base: &BaseExtractor, assignment: &Node) -> Option<String> {
    let is_add_assignment = match assignment.child_by_field_name("operator") {
        Some(operator) => base.get_node_text(&operator).trim() == "+=",
        None => {
            let mut cursor = assignment.walk();
            let found = assignment.children(&mut cursor).any(|c| {
                c.kind() == "+="
                    || (c.kind() == "assignment_operator" && base.get_node_text(&c).trim() == "+=")
            });
            found
        }
    };
    if !is_add_assignment {
        return None;
    }

    let left = assignment.child_by_field_name("left").or_else(|| {
        let mut cursor = assignment.walk();
        let first = assignment.named_children(&mut cursor).next();
        first
    })?;
    Some(base.get_node_text(&left))
}
