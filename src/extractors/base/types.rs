// Base Extractor Types
//
// All data structures produced by extraction: class and member records, the
// set-once embedding slot, and the options that steer a class member scan.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a class's member scan treats type declarations nested inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NestedMemberPolicy {
    /// Members of nested types belong only to the nested type's own record
    #[default]
    Exclude,
    /// Every descendant member is counted, so nested members also appear in
    /// each enclosing class record
    Include,
}

/// Configuration for structural extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractionOptions {
    /// Attribution of members declared inside nested types
    pub nested_members: NestedMemberPolicy,
}

/// Returned when an embedding is attached to a record that already has one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("embedding already set for this record")]
pub struct EmbeddingAlreadySet;

/// Embedding vector storage that starts empty and can be filled exactly once
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddingSlot(Option<Vec<f32>>);

impl EmbeddingSlot {
    /// Store the vector; a populated slot is never overwritten
    pub fn set(&mut self, vector: Vec<f32>) -> Result<(), EmbeddingAlreadySet> {
        if self.0.is_some() {
            return Err(EmbeddingAlreadySet);
        }
        self.0 = Some(vector);
        Ok(())
    }

    pub fn get(&self) -> Option<&[f32]> {
        self.0.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

/// A class declaration with its members, documentation and source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Class identifier as written
    pub name: String,
    /// One-line `<summary>` text from the attached XML doc comment
    pub summary: Option<String>,
    /// Path the caller stamped on this extraction run
    pub file_path: String,
    /// First entry of the declared base list
    pub base_type: Option<String>,
    /// Verbatim declaration text including modifiers and leading trivia
    pub source_code: String,
    pub methods: Vec<MethodRecord>,
    pub properties: Vec<PropertyRecord>,
    pub events: Vec<EventRecord>,
    pub fields: Vec<FieldRecord>,
    pub constructors: Vec<ConstructorRecord>,
    pub embedding: EmbeddingSlot,
}

/// A method declaration plus the unresolved names it calls, subscribes to and raises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub name: String,
    pub summary: Option<String>,
    /// `"Type name"` pairs joined by `", "`
    pub parameters: String,
    pub return_type: String,
    pub source_code: String,
    /// Callee names with receiver qualification stripped, in occurrence order
    pub calls: Vec<String>,
    /// Left-hand side of every `+=` assignment
    pub subscribes_to_events: Vec<String>,
    /// Callees that look like event raises (`X.Invoke(..)` or bare `X(..)`)
    pub raises_events: Vec<String>,
    pub embedding: EmbeddingSlot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub modifiers: Vec<String>,
    pub summary: Option<String>,
    pub source_code: String,
    pub embedding: EmbeddingSlot,
}

/// One declared variable of a field declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub modifiers: Vec<String>,
    pub summary: Option<String>,
    /// Text of the whole field declaration, shared by all co-declared variables
    pub source_code: String,
    pub embedding: EmbeddingSlot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    /// Delegate type (e.g. `EventHandler`, `Action<string>`)
    #[serde(rename = "type")]
    pub type_name: String,
    pub modifiers: Vec<String>,
    pub summary: Option<String>,
    pub source_code: String,
    pub embedding: EmbeddingSlot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorRecord {
    pub name: String,
    pub summary: Option<String>,
    pub source_code: String,
    pub parameters: String,
    pub modifiers: Vec<String>,
    pub embedding: EmbeddingSlot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_slot_sets_once() {
        let mut slot = EmbeddingSlot::default();
        assert!(!slot.is_set());
        assert_eq!(slot.get(), None);

        slot.set(vec![0.6, 0.8]).unwrap();
        assert_eq!(slot.get(), Some(&[0.6, 0.8][..]));

        // Second write is rejected and the first vector survives
        assert_eq!(slot.set(vec![1.0]), Err(EmbeddingAlreadySet));
        assert_eq!(slot.get(), Some(&[0.6, 0.8][..]));
    }

    #[test]
    fn test_embedding_slot_serializes_as_plain_option() {
        let empty = serde_json::to_string(&EmbeddingSlot::default()).unwrap();
        assert_eq!(empty, "null");

        let mut slot = EmbeddingSlot::default();
        slot.set(vec![1.0, 2.0]).unwrap();
        assert_eq!(serde_json::to_string(&slot).unwrap(), "[1.0,2.0]");
    }

    #[test]
    fn test_member_type_serializes_under_type_key() {
        let field = FieldRecord {
            name: "count".to_string(),
            type_name: "int".to_string(),
            modifiers: vec!["private".to_string()],
            summary: None,
            source_code: "private int count;".to_string(),
            embedding: EmbeddingSlot::default(),
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "int");
        assert!(json.get("type_name").is_none());
    }

    #[test]
    fn test_default_policy_excludes_nested_members() {
        assert_eq!(
            ExtractionOptions::default().nested_members,
            NestedMemberPolicy::Exclude
        );
    }
}
