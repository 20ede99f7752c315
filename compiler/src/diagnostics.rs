use std::fmt;

use serde::Serialize;

use crate::{types::FieldDeclaration, utils::quote};

/// Non-fatal findings. The generated class is still emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The field token is not in the type table; the Dart type is left empty.
    UnresolvedType {
        field: String,
        token: String,
        line:  usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedType { field, token, line } => write!(
                f,
                "line {}: unknown field type {} for field {}, emitting an empty Dart type",
                line,
                quote(token),
                quote(field)
            ),
        }
    }
}

pub fn collect_diagnostics(fields: &[FieldDeclaration]) -> Vec<Diagnostic> {
    fields
        .iter()
        .filter(|field| !field.target_type.is_resolved())
        .map(|field| Diagnostic::UnresolvedType {
            field: field.snake_name.clone(),
            token: field.source_type_token.clone(),
            line:  field.line,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_declaration;

    #[test]
    fn test_only_unresolved_fields_are_reported() {
        let fields: Vec<_> = [
            "a = models.CharField()",
            "b = models.UUIDField()",
            "c = models.IntegerField()",
        ]
        .iter()
        .enumerate()
        .filter_map(|(i, text)| parse_declaration(text, i + 1, false).unwrap())
        .collect();

        let diagnostics = collect_diagnostics(&fields);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnresolvedType {
                field: "b".into(),
                token: "UUIDField".into(),
                line:  2,
            }]
        );
        assert_eq!(
            diagnostics[0].to_string(),
            "line 2: unknown field type \"UUIDField\" for field \"b\", emitting an empty Dart type"
        );
    }
}
