//! Abstract-section strategy.
//!
//! Research papers front-load their most searchable sentences in the
//! abstract, so the region between an "Abstract" marker and the first
//! "1." / "Introduction" marker is mined for queries.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{MAX_PER_STRATEGY, MIN_QUERY_CHARS};

static ABSTRACT_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bAbstract\b").unwrap());
// The regex crate has no lookahead, so the end marker is located with a
// second search over the remainder.
static ABSTRACT_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b1\.|\bIntroduction\b").unwrap());

/// Slice out the abstract section, if one can be located.
///
/// Both markers are required: without a closing "1." / "Introduction"
/// there is no bounded section, only unstructured body text, and the
/// statistical strategy covers that case.
pub fn extract_abstract(text: &str) -> Option<String> {
    let start = ABSTRACT_START.find(text)?;
    let rest = &text[start.end()..];
    let end = ABSTRACT_END.find(rest)?;
    let body = rest[..end.start()].trim();
    if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    }
}

/// Sentences from the abstract long enough to serve as search queries.
pub fn abstract_sentences(text: &str) -> Vec<String> {
    let Some(section) = extract_abstract(text) else {
        return Vec::new();
    };
    section
        .split('.')
        .map(str::trim)
        .filter(|s| s.len() > MIN_QUERY_CHARS)
        .take(MAX_PER_STRATEGY)
        .map(str::to_string)
        .collect()
}
