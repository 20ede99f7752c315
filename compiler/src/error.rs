use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Malformed input at line {line}: {msg}")]
    MalformedInput {
        msg:  String,
        line: usize,
    },

    #[error("Missing \"=\" in declaration at line {line}: {text}")]
    MissingAssignment {
        text: String,
        line: usize,
    },

    #[error("ForeignKey field \"{0}\" has no referenced model")]
    MissingReference(String),

    #[error("Invalid class name \"{0}\"")]
    InvalidClassName(String),
}
