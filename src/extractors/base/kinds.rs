// Typed view over the tree-sitter-c-sharp declaration node kinds

/// Declarations the structural extractor distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Interface,
    Struct,
    Record,
    Enum,
    Method,
    Constructor,
    Property,
    Field,
    /// Field-like event: `event EventHandler Changed;`
    EventField,
    /// Accessor-form event: `event EventHandler Changed { add { } remove { } }`
    Event,
}

impl DeclarationKind {
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" => Some(Self::Class),
            "interface_declaration" => Some(Self::Interface),
            "struct_declaration" => Some(Self::Struct),
            "record_declaration" | "record_struct_declaration" => Some(Self::Record),
            "enum_declaration" => Some(Self::Enum),
            "method_declaration" => Some(Self::Method),
            "constructor_declaration" => Some(Self::Constructor),
            "property_declaration" => Some(Self::Property),
            "field_declaration" => Some(Self::Field),
            "event_field_declaration" => Some(Self::EventField),
            "event_declaration" => Some(Self::Event),
            _ => None,
        }
    }

    pub fn node_kind(self) -> &'static str {
        match self {
            Self::Class => "class_declaration",
            Self::Interface => "interface_declaration",
            Self::Struct => "struct_declaration",
            Self::Record => "record_declaration",
            Self::Enum => "enum_declaration",
            Self::Method => "method_declaration",
            Self::Constructor => "constructor_declaration",
            Self::Property => "property_declaration",
            Self::Field => "field_declaration",
            Self::EventField => "event_field_declaration",
            Self::Event => "event_declaration",
        }
    }

    /// Declarations that open a new member scope
    pub fn is_type_declaration(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Interface | Self::Struct | Self::Record | Self::Enum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_round_trips_for_every_variant() {
        let all = [
            DeclarationKind::Class,
            DeclarationKind::Interface,
            DeclarationKind::Struct,
            DeclarationKind::Record,
            DeclarationKind::Enum,
            DeclarationKind::Method,
            DeclarationKind::Constructor,
            DeclarationKind::Property,
            DeclarationKind::Field,
            DeclarationKind::EventField,
            DeclarationKind::Event,
        ];
        for kind in all {
            assert_eq!(DeclarationKind::from_node_kind(kind.node_kind()), Some(kind));
        }
    }

    #[test]
    fn test_only_types_open_member_scopes() {
        assert!(DeclarationKind::Class.is_type_declaration());
        assert!(DeclarationKind::Interface.is_type_declaration());
        assert!(!DeclarationKind::Method.is_type_declaration());
        assert!(!DeclarationKind::EventField.is_type_declaration());
        assert_eq!(DeclarationKind::from_node_kind("local_function_statement"), None);
    }
}
