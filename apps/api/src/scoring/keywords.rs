//! Keyword Extractor and the keyword dimension.
//!
//! Extraction is an intentionally naive proxy for "important phrases": stop-word-filtered
//! unigrams, bigrams and trigrams of the normalized job description. No stemming, no
//! frequency weighting, no NLP.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::scoring::normalize::normalize;

pub const KEYWORDS_MAX: u32 = 40;

/// Coverage is scaled by this before capping at `KEYWORDS_MAX`, so ~80% coverage
/// already earns the full dimension.
const COVERAGE_SCALE: f64 = 50.0;

const MISSING_KEYWORD_LIMIT: usize = 10;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "you", "are", "this", "that", "will", "have",
];

/// Extracts the candidate keyword set from a raw job description.
pub fn extract_keywords(job_description: &str) -> BTreeSet<String> {
    let normalized = normalize(job_description);
    let words: Vec<&str> = normalized
        .split(' ')
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
        .collect();

    let mut keywords = BTreeSet::new();

    for word in words.iter().filter(|w| w.len() > 3) {
        keywords.insert(word.to_string());
    }
    for pair in words.windows(2) {
        let bigram = pair.join(" ");
        if bigram.len() > 5 {
            keywords.insert(bigram);
        }
    }
    for triple in words.windows(3) {
        keywords.insert(triple.join(" "));
    }

    keywords
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordScore {
    pub score: u32,
    pub max: u32,
    pub matches: Vec<String>,
    /// Up to ten unmatched keywords, longest first.
    pub missing: Vec<String>,
}

/// Scores how many job keywords appear verbatim in the normalized resume text.
pub fn score_keywords(normalized_resume: &str, job_keywords: &BTreeSet<String>) -> KeywordScore {
    let (matches, unmatched): (Vec<&String>, Vec<&String>) = job_keywords
        .iter()
        .partition(|kw| normalized_resume.contains(kw.as_str()));

    let mut missing: Vec<String> = unmatched
        .into_iter()
        .filter(|kw| kw.len() > 4)
        .cloned()
        .collect();
    // stable: equal lengths keep lexicographic order
    missing.sort_by(|a, b| b.len().cmp(&a.len()));
    missing.truncate(MISSING_KEYWORD_LIMIT);

    let total = job_keywords.len().max(1) as f64;
    let scaled = (matches.len() as f64 / total * COVERAGE_SCALE).round() as u32;

    KeywordScore {
        score: scaled.min(KEYWORDS_MAX),
        max: KEYWORDS_MAX,
        matches: matches.into_iter().cloned().collect(),
        missing,
    }
}
