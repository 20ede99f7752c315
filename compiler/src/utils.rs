use crate::error::ConvertError;

/// JSON-quotes `text` for use in error and diagnostic messages.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

pub fn error(msg: &str, line: usize) -> ConvertError {
    ConvertError::MalformedInput {
        msg: msg.to_string(),
        line,
    }
}

/// Converts a snake_case name to camelCase.
/// - The first segment is kept exactly as written.
/// - Every following segment gets its first character uppercased; the rest
///   of the segment keeps its original casing (`foo_bAR` → `fooBAR`).
/// - Empty segments from doubled underscores contribute nothing.
pub fn to_camel_case(s: &str) -> String {
    let mut segments = s.split('_');
    let mut camel = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}

/// Removes one pair of matching single or double quotes around `s`.
pub fn strip_quotes(s: &str) -> &str {
    for q in ['\'', '"'] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// `true` when `s` is a legal Dart identifier.
pub fn is_dart_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
