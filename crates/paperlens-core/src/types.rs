//! Shared domain types for the detection pipeline.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Header metadata pulled from the submitted document.
///
/// Absent fields are empty strings rather than `None` so the report shape
/// stays stable for clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub keywords: String,
}

impl DocumentMetadata {
    /// Join the non-empty fields into a single summary string.
    ///
    /// Used as the highest-priority search query when present.
    pub fn summary(&self) -> String {
        [&self.title, &self.author, &self.subject, &self.keywords]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.summary().is_empty()
    }
}

/// Plain text plus header metadata for one submitted document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Which synthesis strategy produced a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuerySource {
    MetadataSummary,
    Abstract,
    Statistical,
    Generative,
}

/// A single search query with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    pub source: QuerySource,
}

impl Query {
    pub fn new(text: impl Into<String>, source: QuerySource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

/// A candidate source text awaiting scoring.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// URL for web candidates, paper id for corpus candidates.
    pub source_id: String,
    pub text: String,
}

/// One scored comparison in the final report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub source_id: String,
    /// Cosine similarity rounded to 4 decimal places.
    pub similarity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Number of matches retained in a report.
pub const TOP_MATCHES: usize = 5;

/// The final result of a plagiarism check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlagiarismReport {
    pub file_name: String,
    /// Similarity of the top match, or 0.0 when there are no matches.
    pub plagiarism_score: f64,
    pub matches: Vec<Match>,
    pub metadata: DocumentMetadata,
    /// Present for external (web) checks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries_used: Option<Vec<String>>,
}

impl PlagiarismReport {
    /// Assemble a report from ranked matches, deriving the score from the
    /// top match.
    pub fn from_matches(
        file_name: impl Into<String>,
        matches: Vec<Match>,
        metadata: DocumentMetadata,
        queries_used: Option<Vec<String>>,
    ) -> Self {
        let plagiarism_score = matches.first().map(|m| m.similarity).unwrap_or(0.0);
        Self {
            file_name: file_name.into(),
            plagiarism_score,
            matches,
            metadata,
            queries_used,
        }
    }
}

/// A paper stored in the internal corpus.
#[derive(Debug, Clone)]
pub struct PaperRecord {
    pub paper_id: String,
    pub text: String,
    pub vector: Array1<f32>,
    pub filename: String,
}

/// Corpus projection used by the internal check: no text materialized.
#[derive(Debug, Clone)]
pub struct StoredVector {
    pub paper_id: String,
    pub vector: Array1<f32>,
    pub filename: String,
}
