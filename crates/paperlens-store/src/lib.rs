//! PaperLens Store — persisted corpus of previously uploaded papers.

pub mod schema;
pub mod sqlite;
pub mod vector;

pub use sqlite::PaperStore;
pub use vector::{blob_to_vector, vector_to_blob};
