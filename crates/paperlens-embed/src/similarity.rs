//! Cosine similarity and match ranking.

use ndarray::Array1;
use paperlens_core::{Match, TOP_MATCHES};

/// A candidate vector ready for scoring.
#[derive(Debug, Clone)]
pub struct ScoredInput {
    pub source_id: String,
    pub vector: Array1<f32>,
    pub filename: Option<String>,
}

/// Cosine similarity between two raw embedding vectors.
///
/// No re-normalization beyond what cosine inherently performs. A
/// zero-norm vector scores 0.0 against everything.
pub fn cosine_similarity(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    let dot = a.dot(b);
    let norm = a.dot(a).sqrt() * b.dot(b).sqrt();
    if norm == 0.0 {
        return 0.0;
    }
    dot / norm
}

/// Score every candidate against the document vector, sort descending and
/// keep the top matches. Similarities are rounded to 4 decimal places.
pub fn rank_matches(document: &Array1<f32>, candidates: Vec<ScoredInput>) -> Vec<Match> {
    let mut matches: Vec<Match> = candidates
        .into_iter()
        .map(|c| Match {
            similarity: round4(cosine_similarity(document, &c.vector)),
            source_id: c.source_id,
            filename: c.filename,
        })
        .collect();

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(TOP_MATCHES);
    matches
}

fn round4(value: f32) -> f64 {
    (value as f64 * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn input(id: &str, vector: Array1<f32>) -> ScoredInput {
        ScoredInput {
            source_id: id.to_string(),
            vector,
            filename: None,
        }
    }

    #[test]
    fn identical_vectors_score_one() {
        let v = array![0.3, -0.2, 0.9, 0.05];
        assert_eq!(round4(cosine_similarity(&v, &v)), 1.0);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let a = array![1.0, 0.0];
        let b = array![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn opposite_vectors_score_negative_one() {
        let a = array![0.5, 0.5];
        let b = array![-0.5, -0.5];
        assert_eq!(round4(cosine_similarity(&a, &b)), -1.0);
    }

    #[test]
    fn zero_norm_vector_scores_zero() {
        let a = array![0.0, 0.0];
        let b = array![1.0, 2.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn ranking_is_non_increasing_and_capped() {
        let doc = array![1.0, 0.0, 0.0];
        let candidates = vec![
            input("a", array![0.0, 1.0, 0.0]),
            input("b", array![1.0, 0.0, 0.0]),
            input("c", array![1.0, 1.0, 0.0]),
            input("d", array![1.0, 0.2, 0.0]),
            input("e", array![1.0, 2.0, 0.0]),
            input("f", array![-1.0, 0.0, 0.0]),
            input("g", array![1.0, 0.5, 0.0]),
        ];
        let matches = rank_matches(&doc, candidates);
        assert_eq!(matches.len(), TOP_MATCHES);
        assert_eq!(matches[0].source_id, "b");
        for pair in matches.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn empty_candidates_yield_empty_matches() {
        let doc = array![1.0, 0.0];
        assert!(rank_matches(&doc, Vec::new()).is_empty());
    }

    #[test]
    fn similarity_is_rounded_to_four_decimals() {
        let doc = array![1.0, 1.0];
        let matches = rank_matches(&doc, vec![input("a", array![1.0, 0.0])]);
        assert_eq!(matches[0].similarity, 0.7071);
    }
}
