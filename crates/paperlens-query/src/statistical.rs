//! Statistical strategy: term-importance ranking over body sentences.
//!
//! Boilerplate lines (publisher banners, DOIs, URLs) are discarded before
//! ranking so they can never surface as queries.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::stopwords::is_stopword;
use crate::{MAX_PER_STRATEGY, MIN_QUERY_CHARS};

/// Markers for publisher boilerplate, licensing lines and link noise.
static BOILERPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)©|Elsevier|rights reserved|homepage|available online|doi|http|www|ScienceDirect")
        .unwrap()
});

/// Sentence boundaries: a period followed by a space, or a line break.
static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\. |\n").unwrap());

/// Word tokens: two or more word characters.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Number of body lines considered after filtering.
const MAX_BODY_LINES: usize = 100;

/// Candidate sentences from the filtered body text.
fn candidate_sentences(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > MIN_QUERY_CHARS && !BOILERPLATE.is_match(line))
        .take(MAX_BODY_LINES)
        .collect();

    let joined = lines.join(" ");
    SENTENCE_SPLIT
        .split(&joined)
        .map(str::trim)
        .filter(|s| s.len() > MIN_QUERY_CHARS)
        .map(str::to_string)
        .collect()
}

fn tokenize(sentence: &str) -> Vec<String> {
    TOKEN
        .find_iter(&sentence.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|t| !is_stopword(t))
        .collect()
}

/// Rank candidate sentences by summed TF-IDF weight (smoothed idf,
/// l2-normalized rows) and return the top ones.
pub fn statistical_sentences(text: &str) -> Vec<String> {
    let sentences = candidate_sentences(text);
    if sentences.is_empty() {
        return Vec::new();
    }

    // Document frequency per term across the sentence set.
    let mut df: HashMap<String, usize> = HashMap::new();
    let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| tokenize(s)).collect();
    for tokens in &tokenized {
        let mut seen: Vec<&String> = Vec::new();
        for token in tokens {
            if !seen.contains(&token) {
                seen.push(token);
                *df.entry(token.clone()).or_insert(0) += 1;
            }
        }
    }

    let n = sentences.len() as f64;
    let idf = |term: &str| -> f64 {
        let d = df.get(term).copied().unwrap_or(0) as f64;
        ((1.0 + n) / (1.0 + d)).ln() + 1.0
    };

    let mut scored: Vec<(f64, String)> = sentences
        .into_iter()
        .zip(tokenized)
        .map(|(sentence, tokens)| {
            let mut tf: HashMap<&str, f64> = HashMap::new();
            for token in &tokens {
                *tf.entry(token.as_str()).or_insert(0.0) += 1.0;
            }
            let weights: Vec<f64> = tf
                .iter()
                .map(|(term, count)| count * idf(term))
                .collect();
            let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
            let score = if norm > 0.0 {
                weights.iter().sum::<f64>() / norm
            } else {
                0.0
            };
            (score, sentence)
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(MAX_PER_STRATEGY)
        .map(|(_, sentence)| sentence)
        .collect()
}
