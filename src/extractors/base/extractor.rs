// BaseExtractor implementation
//
// Holds the source text a tree was parsed from and answers text-level questions
// about nodes: raw text, attached comments, and full declaration text with trivia.

use tree_sitter::Node;

/// Base implementation shared by language extractors
pub struct BaseExtractor {
    /// Path stamped onto every record; never read from disk
    pub file_path: String,
    pub content: String,
}

impl BaseExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self { file_path, content }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Comments attached in front of `node`, in source order
    ///
    /// Walks previous siblings while they are comments, stepping over
    /// preprocessor directives (`#region`, `#endregion`, ...). A comment that
    /// starts on the line where the preceding code ends is that code's trailing
    /// comment and is left out.
    pub fn leading_comments<'a>(&self, node: &Node<'a>) -> Vec<Node<'a>> {
        let mut comments: Vec<Node<'a>> = Vec::new();
        let mut current = node.prev_sibling();

        while let Some(sibling) = current {
            if sibling.kind().starts_with("preproc_") {
                current = sibling.prev_sibling();
                continue;
            }
            if sibling.kind() != "comment" {
                if let Some(earliest) = comments.last() {
                    if self.shares_line(&sibling, earliest) {
                        comments.pop();
                    }
                }
                break;
            }
            comments.push(sibling);
            current = sibling.prev_sibling();
        }

        comments.reverse();
        comments
    }

    /// Whether `later` starts on the line where `earlier` ends
    fn shares_line(&self, earlier: &Node, later: &Node) -> bool {
        let bytes = self.content.as_bytes();
        let end = earlier.end_byte().min(bytes.len());
        let start = later.start_byte().min(bytes.len()).max(end);

        let ends_with_newline = end > 0 && bytes[end - 1] == b'\n';
        !ends_with_newline && !bytes[end..start].contains(&b'\n')
    }

    /// Find the XML documentation block attached to a node
    ///
    /// Returns the first contiguous run of `///` lines (or a `/** */` block) among
    /// the leading comments, with comment markers stripped and one line per row.
    pub fn find_doc_comment(&self, node: &Node) -> Option<String> {
        let mut lines: Vec<String> = Vec::new();

        for comment in self.leading_comments(node) {
            let text = self.get_node_text(&comment);
            match strip_doc_markers(&text) {
                Some(stripped) => lines.extend(stripped),
                None if lines.is_empty() => continue,
                None => break,
            }
        }

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }

    /// Declaration text as written, including leading comments and indentation
    /// and the remainder of its final line
    pub fn get_full_text(&self, node: &Node) -> String {
        let bytes = self.content.as_bytes();
        let node_start = node.start_byte().min(bytes.len());
        let node_end = node.end_byte().min(bytes.len());

        let mut start = self
            .leading_comments(node)
            .first()
            .map(|comment| comment.start_byte())
            .unwrap_or(node_start)
            .min(node_start);

        let line_start = bytes[..start]
            .iter()
            .rposition(|&b| b == b'\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
        if bytes[line_start..start]
            .iter()
            .all(|&b| b == b' ' || b == b'\t')
        {
            start = line_start;
        }

        let mut end = node_end;
        while end < bytes.len() && (bytes[end] == b' ' || bytes[end] == b'\t') {
            end += 1;
        }
        // Trailing line comment on the same row belongs to this declaration
        if bytes[end..].starts_with(b"//") {
            while end < bytes.len() && bytes[end] != b'\n' && bytes[end] != b'\r' {
                end += 1;
            }
        }
        if bytes[end..].starts_with(b"\r\n") {
            end += 2;
        } else if bytes.get(end) == Some(&b'\n') {
            end += 1;
        }

        String::from_utf8_lossy(&bytes[start..end]).to_string()
    }
}

/// Strip documentation comment markers, or `None` for ordinary comments
fn strip_doc_markers(comment: &str) -> Option<Vec<String>> {
    let trimmed = comment.trim();

    if let Some(rest) = trimmed.strip_prefix("///") {
        if rest.starts_with('/') {
            return None;
        }
        return Some(vec![rest.trim().to_string()]);
    }

    if let Some(body) = trimmed.strip_prefix("/**") {
        if body.starts_with('/') {
            return None;
        }
        let body = body.strip_suffix("*/").unwrap_or(body);
        let lines = body
            .lines()
            .map(|line| {
                let line = line.trim();
                line.strip_prefix('*').unwrap_or(line).trim().to_string()
            })
            .collect();
        return Some(lines);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_triple_slash_line() {
        assert_eq!(
            strip_doc_markers("///   <summary>"),
            Some(vec!["<summary>".to_string()])
        );
        assert_eq!(strip_doc_markers("//// banner"), None);
        assert_eq!(strip_doc_markers("// plain"), None);
    }

    #[test]
    fn test_strip_block_doc_comment() {
        let lines = strip_doc_markers("/**\n * <summary>Hi</summary>\n */").unwrap();
        assert_eq!(lines, vec!["", "<summary>Hi</summary>", ""]);
        assert_eq!(strip_doc_markers("/* plain block */"), None);
    }
}
