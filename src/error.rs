// File: src/error.rs

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving, correcting or persisting the lexicon.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not replace {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: tempfile::PersistError,
    },

    #[error("Unknown language '{0}' (expected one of: italian, spanish, latin, greek, old_english, modern_german)")]
    UnknownLanguage(String),

    #[error("Correction for {language} needs both a word and a value")]
    EmptyCorrection { language: String },
}
