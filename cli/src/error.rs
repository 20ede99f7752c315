use django2dart_compiler::error::ConvertError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Editor \"{editor}\" failed: {reason}")]
    Editor {
        editor: String,
        reason: String,
    },
}
