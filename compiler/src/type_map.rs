use serde::Serialize;

pub const REFERENCE_FIELD:  &str = "ForeignKey";
pub const REFERENCE_SUFFIX: &str = "Model";

/// Django field token → Dart type. `ForeignKey` is resolved separately
/// from its first argument.
pub const FIELD_TYPES: [(&str, &str); 11] = [
    ("CharField",                 "String"),
    ("TextField",                 "String"),
    ("TimeField",                 "String"),
    ("MultiSelectField",          "String"),
    ("LowercaseEmailField",       "String"),
    ("BooleanField",              "bool"),
    ("IntegerField",              "int"),
    ("SmallIntegerField",         "int"),
    ("PositiveSmallIntegerField", "int"),
    ("FloatField",                "double"),
    ("DateField",                 "DateTime"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TargetType {
    Native(String),
    Reference(String),
    /// Emitted as an empty type name.
    Unresolved,
}

impl TargetType {
    pub fn dart_name(&self) -> &str {
        match self {
            TargetType::Native(name) | TargetType::Reference(name) => name,
            TargetType::Unresolved => "",
        }
    }

    /// String values are serialized as-is; everything else goes through `toString()`.
    pub fn is_string(&self) -> bool {
        matches!(self, TargetType::Native(name) if name == "String")
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, TargetType::Unresolved)
    }
}

/// Resolves a Django field token. `referenced` is the already suffixed model
/// name and is only consulted for `ForeignKey`.
pub fn resolve_target_type(token: &str, referenced: Option<&str>) -> TargetType {
    if token == REFERENCE_FIELD {
        return match referenced {
            Some(name) => TargetType::Reference(name.to_string()),
            None => TargetType::Unresolved,
        };
    }
    FIELD_TYPES
        .iter()
        .find(|(django, _)| *django == token)
        .map(|(_, dart)| TargetType::Native(dart.to_string()))
        .unwrap_or(TargetType::Unresolved)
}
