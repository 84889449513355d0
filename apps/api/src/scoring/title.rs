//! Job-title relevance: how closely past role titles line up with the target title.

use serde::{Deserialize, Serialize};

pub const JOB_TITLE_MAX: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    High,
    Medium,
    Low,
}

impl Relevance {
    pub fn score(self) -> u32 {
        match self {
            Relevance::High => 15,
            Relevance::Medium => 10,
            Relevance::Low => 5,
        }
    }

    fn rationale(self) -> &'static str {
        match self {
            Relevance::High => "Your experience includes roles closely matching the target job title.",
            Relevance::Medium => "Your experience includes roles partially related to the target job title.",
            Relevance::Low => "Your past job titles differ from the target role.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTitleScore {
    pub score: u32,
    pub max: u32,
    pub relevance: Relevance,
    pub rationale: String,
}

/// `resume_titles` are expected lowercased (see `ResumeContent::titles`).
pub fn score_job_title(resume_titles: &[String], job_title: &str) -> JobTitleScore {
    let target = job_title.to_lowercase();
    let words: Vec<&str> = target
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .collect();

    let has_exact_match = resume_titles.iter().any(|t| t.contains(&target));

    let matched_words = words
        .iter()
        .filter(|w| resume_titles.iter().any(|t| t.contains(*w)))
        .count();
    let word_match_ratio = matched_words as f64 / words.len().max(1) as f64;

    let relevance = if has_exact_match || word_match_ratio >= 0.8 {
        Relevance::High
    } else if word_match_ratio >= 0.5 {
        Relevance::Medium
    } else {
        Relevance::Low
    };

    JobTitleScore {
        score: relevance.score(),
        max: JOB_TITLE_MAX,
        relevance,
        rationale: relevance.rationale().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: &[&str]) -> Vec<String> {
        items.iter().map(|t| t.to_lowercase()).collect()
    }

    #[test]
    fn test_exact_title_is_high() {
        let result = score_job_title(&titles(&["Senior Python Engineer"]), "Python Engineer");
        assert_eq!(result.relevance, Relevance::High);
        assert_eq!(result.score, 15);
    }

    #[test]
    fn test_half_the_words_is_medium() {
        let result = score_job_title(&titles(&["Data Analyst"]), "Data Engineer");
        assert_eq!(result.relevance, Relevance::Medium);
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_words_spread_across_titles_count() {
        // "staff", "backend", "engineer" all appear somewhere → ratio 1.0
        let result = score_job_title(
            &titles(&["Backend Developer", "Staff Engineer"]),
            "Staff Backend Engineer",
        );
        assert_eq!(result.relevance, Relevance::High);
    }

    #[test]
    fn test_unrelated_titles_are_low() {
        let result = score_job_title(&titles(&["Barista"]), "Machine Learning Engineer");
        assert_eq!(result.relevance, Relevance::Low);
        assert_eq!(result.score, 5);
        assert!(!result.rationale.is_empty());
    }

    #[test]
    fn test_short_words_are_ignored() {
        // "of" and "qa" are dropped; "head" matches → 1/1
        let result = score_job_title(&titles(&["Head Chef"]), "Head of QA");
        assert_eq!(result.relevance, Relevance::High);
    }

    #[test]
    fn test_no_experience_is_low() {
        let result = score_job_title(&[], "Product Manager");
        assert_eq!(result.relevance, Relevance::Low);
    }

    #[test]
    fn test_empty_job_title_is_contained_in_any_title() {
        let result = score_job_title(&titles(&["Software Engineer"]), "");
        assert_eq!(result.relevance, Relevance::High);
        assert_eq!(result.score, 15);

        let result = score_job_title(&[], "");
        assert_eq!(result.relevance, Relevance::Low);
        assert_eq!(result.score, 5);
    }

    #[test]
    fn test_relevance_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Relevance::Medium).unwrap(), r#""medium""#);
    }
}
