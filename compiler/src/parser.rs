use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    error::ConvertError,
    type_map::{resolve_target_type, REFERENCE_FIELD, REFERENCE_SUFFIX},
    types::FieldDeclaration,
    utils::{error, quote, strip_quotes, to_camel_case},
};

lazy_static! {
    /// `[namespace.]*Token(args)`, anchored at both ends of the right-hand side.
    static ref FIELD_CALL: Regex =
        Regex::new(r"(?s)^(?:[A-Za-z_][A-Za-z0-9_]*\s*\.\s*)*([A-Za-z_][A-Za-z0-9_]*)\s*\((.*)\)$").unwrap();
}

/// Parses one collapsed declaration.
///
/// Returns `Ok(None)` for blank and comment lines. An unknown field token is
/// not an error: the declaration comes back with an unresolved target type.
pub fn parse_declaration(
    text: &str,
    line: usize,
    use_camel_case: bool,
) -> Result<Option<FieldDeclaration>, ConvertError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (lhs, rhs) = trimmed.split_once('=').ok_or_else(|| ConvertError::MissingAssignment {
        text: trimmed.to_string(),
        line,
    })?;

    let snake_name = lhs.trim().to_string();
    if snake_name.is_empty() {
        return Err(error("Missing field name before \"=\"", line));
    }
    let output_name = if use_camel_case {
        to_camel_case(&snake_name)
    } else {
        snake_name.clone()
    };
    if output_name.is_empty() {
        return Err(error(
            &format!("Field name {} is empty after camelCase conversion", quote(&snake_name)),
            line,
        ));
    }

    let (source_type_token, args) = match FIELD_CALL.captures(rhs.trim()) {
        Some(caps) => (
            caps[1].to_string(),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (String::new(), ""),
    };

    let referenced_type = if source_type_token == REFERENCE_FIELD {
        let model = strip_quotes(first_argument(args).trim());
        if model.is_empty() {
            return Err(ConvertError::MissingReference(snake_name));
        }
        Some(format!("{}{}", model, REFERENCE_SUFFIX))
    } else {
        None
    };

    let target_type = resolve_target_type(&source_type_token, referenced_type.as_deref());
    debug!(
        line,
        field = %snake_name,
        token = %source_type_token,
        dart_type = target_type.dart_name(),
        "parsed field"
    );

    Ok(Some(FieldDeclaration {
        snake_name,
        output_name,
        source_type_token,
        referenced_type,
        target_type,
        line,
    }))
}

/// Text before the first comma that is not inside a string literal or a
/// nested call.
fn first_argument(args: &str) -> &str {
    let mut depth    = 0usize;
    let mut in_quote = None;
    let mut escaped  = false;

    for (i, c) in args.char_indices() {
        if let Some(q) = in_quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                in_quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => in_quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return &args[..i],
            _ => {}
        }
    }
    args
}
