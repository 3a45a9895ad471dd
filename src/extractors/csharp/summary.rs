// C# Documentation Summary Resolution
//
// Reads the `<summary>` element of an XML doc comment as a single line.

use crate::extractors::base::BaseExtractor;
use regex::Regex;
use std::sync::LazyLock;
use tree_sitter::Node;

static SUMMARY_ELEMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<summary(?:\s[^>]*)?>(.*?)</summary\s*>").unwrap());

/// One-line summary of the doc comment attached to `node`
///
/// `None` when the declaration has no doc comment or the comment has no
/// `<summary>` element.
pub fn resolve_summary(base: &BaseExtractor, node: &Node) -> Option<String> {
    let doc = base.find_doc_comment(node)?;
    summary_from_doc(&doc)
}

/// Inner text of the first `<summary>` element, trimmed, line breaks as spaces
pub fn summary_from_doc(doc: &str) -> Option<String> {
    let inner = SUMMARY_ELEMENT_RE.captures(doc)?.get(1)?.as_str();
    Some(collapse_line_breaks(inner.trim()))
}

fn collapse_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}
