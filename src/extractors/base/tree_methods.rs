// Tree navigation methods for BaseExtractor
//
// All traversals are depth-first and visit children in source order.

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor {
    /// Find nodes by type, including `node` itself when it matches
    pub fn find_nodes_by_type<'a>(&self, node: &Node<'a>, node_type: &str) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();
        if node.kind() == node_type {
            nodes.push(*node);
        }
        nodes.extend(self.find_descendants(node, |n| n.kind() == node_type, |_| false));
        nodes
    }

    /// Collect descendants of `node` (excluding `node`) that satisfy `matches`
    ///
    /// A descendant satisfying `prune` is neither collected nor descended into.
    pub fn find_descendants<'a, M, P>(&self, node: &Node<'a>, matches: M, prune: P) -> Vec<Node<'a>>
    where
        M: Fn(&Node<'a>) -> bool,
        P: Fn(&Node<'a>) -> bool,
    {
        let mut nodes = Vec::new();
        collect_descendants(node, &matches, &prune, &mut nodes);
        nodes
    }

    /// Find first child by type
    pub fn find_child_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).find(|c| c.kind() == child_type);
        found
    }

    /// Find children by type
    pub fn find_children_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Vec<Node<'a>> {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .filter(|c| c.kind() == child_type)
            .collect()
    }

    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }
}

fn collect_descendants<'a, M, P>(node: &Node<'a>, matches: &M, prune: &P, nodes: &mut Vec<Node<'a>>)
where
    M: Fn(&Node<'a>) -> bool,
    P: Fn(&Node<'a>) -> bool,
{
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if prune(&child) {
            continue;
        }
        if matches(&child) {
            nodes.push(child);
        }
        collect_descendants(&child, matches, prune, nodes);
    }
}
