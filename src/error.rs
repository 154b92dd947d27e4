use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LexguardError {
    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("invalid pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid lexicon: {reason}")]
    InvalidLexicon { reason: String },

    #[error("invalid placeholder {placeholder:?}: must not be alphanumeric or whitespace")]
    InvalidPlaceholder { placeholder: char },

    #[error("unknown script code: {code}")]
    UnknownScriptCode { code: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LexguardError>;
