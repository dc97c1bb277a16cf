//! Reviewer-domain keyword matching.
//!
//! Maps a paper's keywords to the subject domains of registered reviewers.
//! The table is an explicit value passed to the matching functions, not
//! process-wide state.

use serde::{Deserialize, Serialize};

/// Named keyword lists, one per reviewer domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainKeywordTable {
    domains: Vec<(String, Vec<String>)>,
}

impl DomainKeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the keyword list for a domain.
    pub fn insert(&mut self, name: impl Into<String>, keywords: Vec<String>) {
        let name = name.into();
        if let Some(entry) = self.domains.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = keywords;
        } else {
            self.domains.push((name, keywords));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.domains
            .iter()
            .map(|(name, kws)| (name.as_str(), kws.as_slice()))
    }
}

/// Pick a match threshold from the breadth of the keyword sets: short,
/// generic keywords need a stricter threshold than long, specific ones.
pub fn match_threshold(input_keywords: &[String], domain_keywords: &[String]) -> f64 {
    let mean_len = |words: &[String]| -> f64 {
        if words.is_empty() {
            return 0.0;
        }
        words.iter().map(|k| k.len()).sum::<usize>() as f64 / words.len() as f64
    };
    let breadth = (mean_len(input_keywords) + mean_len(domain_keywords)) / 2.0;

    if breadth < 5.0 {
        0.8
    } else if breadth < 10.0 {
        0.6
    } else {
        0.4
    }
}

/// Domains with at least one keyword similar to an input keyword.
pub fn matching_domains(table: &DomainKeywordTable, input_keywords: &[String]) -> Vec<String> {
    let mut matched = Vec::new();
    for (domain, keywords) in table.iter() {
        if keywords.is_empty() {
            continue;
        }
        let threshold = match_threshold(input_keywords, keywords);
        let hit = input_keywords.iter().any(|input| {
            keywords.iter().any(|kw| {
                strsim::normalized_levenshtein(&input.to_lowercase(), &kw.to_lowercase())
                    >= threshold
            })
        });
        if hit {
            matched.push(domain.to_string());
        }
    }
    matched
}
