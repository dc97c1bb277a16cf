//! PaperLens Embed — embedding backend seam plus the similarity scorer.
//!
//! The `Embedder` trait abstracts over vector generation so the pipeline
//! and its tests can swap the HTTP backend for a deterministic fake.

pub mod embedder;
pub mod similarity;

pub use embedder::{Embedder, HttpEmbedder};
pub use similarity::{cosine_similarity, rank_matches, ScoredInput};
