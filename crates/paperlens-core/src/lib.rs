//! PaperLens Core — configuration, error taxonomy, shared domain types.

pub mod config;
pub mod error;
pub mod types;

pub use config::{DataPaths, PaperLensConfig, SearchConfig, ServiceEndpoint};
pub use error::{Error, Result};
pub use types::{
    Candidate, DocumentMetadata, ExtractedDocument, Match, PaperRecord, PlagiarismReport, Query,
    QuerySource, StoredVector, TOP_MATCHES,
};
