use serde::Serialize;

use crate::type_map::TargetType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformOptions {
    pub class_name:     String,
    pub use_camel_case: bool,
}

impl TransformOptions {
    pub fn new(class_name: impl Into<String>, use_camel_case: bool) -> Self {
        Self {
            class_name: class_name.into(),
            use_camel_case,
        }
    }
}

/// One parsed `name = models.SomeField(...)` declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDeclaration {
    /// Name as written in the Django model; always used as the JSON key.
    pub snake_name:        String,
    /// Name used for the Dart member (camelCased when requested).
    pub output_name:       String,
    pub source_type_token: String,
    pub referenced_type:   Option<String>,
    pub target_type:       TargetType,
    pub line:              usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedClass {
    pub name:   String,
    pub fields: Vec<FieldDeclaration>,
}
