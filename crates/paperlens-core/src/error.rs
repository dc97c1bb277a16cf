//! Error types for PaperLens.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("No papers stored in the corpus to compare against")]
    NoCorpus,

    #[error("Remote service error ({service}): {message}")]
    RemoteService { service: String, message: String },

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Short machine-readable tag used in HTTP error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validation(_) => "validation",
            Error::Extraction(_) => "extraction",
            Error::NoCorpus => "no_corpus",
            Error::RemoteService { .. } => "remote_service",
            Error::Embedding(_) => "embedding",
            Error::Storage(_) => "storage",
            Error::Database(_) => "database",
            Error::Config(_) => "config",
            Error::Io(_) => "io",
            Error::Json(_) => "json",
        }
    }

    /// Convenience constructor for remote-call failures.
    pub fn remote(service: impl Into<String>, message: impl ToString) -> Self {
        Error::RemoteService {
            service: service.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
