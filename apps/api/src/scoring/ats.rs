//! ATS Score — composes the six dimension scorers into one auditable result.
//!
//! `calculate_ats_score` is a pure, total function: same inputs, same `AtsScore`,
//! no I/O, no shared mutable state. The HTTP layer reaches it through the
//! `AtsScorer` trait so the taxonomy it scores against can be swapped at startup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::ResumeContent;
use crate::scoring::education::{score_education, EducationScore};
use crate::scoring::format::{score_format, FormatScore};
use crate::scoring::keywords::{extract_keywords, score_keywords, KeywordScore};
use crate::scoring::normalize::normalize;
use crate::scoring::skills::{score_hard_skills, score_soft_skills, SkillScore};
use crate::scoring::taxonomy::Taxonomy;
use crate::scoring::title::{score_job_title, JobTitleScore, Relevance};

const MAX_SUGGESTIONS: usize = 5;
const MAX_NAMED_ITEMS: usize = 3;
/// More missing hard skills than this reads as a poor fit rather than a fixable gap.
const MAX_MISSING_SKILLS_TO_SUGGEST: usize = 5;
const MIN_SUGGESTED_KEYWORD_LEN: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keywords: KeywordScore,
    pub hard_skills: SkillScore,
    pub job_title: JobTitleScore,
    pub education: EducationScore,
    pub format: FormatScore,
    pub soft_skills: SkillScore,
}

/// Full compatibility report. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScore {
    /// Sum of the six dimension scores, 0 – 100.
    pub overall: u32,
    pub breakdown: ScoreBreakdown,
    /// At most five, highest priority first.
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scoring backend carried in `AppState` as `Arc<dyn AtsScorer>`.
pub trait AtsScorer: Send + Sync {
    fn score(&self, resume: &ResumeContent, job_description: &str, job_title: &str) -> AtsScore;

    /// Vocabularies the backend matches skills against.
    fn taxonomy(&self) -> &Taxonomy;

    /// Short label reported alongside scores.
    fn backend(&self) -> &'static str;
}

/// Lexical scorer: n-gram containment plus whole-word taxonomy matching.
pub struct LexicalAtsScorer {
    taxonomy: Arc<Taxonomy>,
}

impl LexicalAtsScorer {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }
}

impl AtsScorer for LexicalAtsScorer {
    fn score(&self, resume: &ResumeContent, job_description: &str, job_title: &str) -> AtsScore {
        calculate_ats_score_with(&self.taxonomy, resume, job_description, job_title)
    }

    fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    fn backend(&self) -> &'static str {
        "lexical"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume` against a job using the built-in taxonomy.
pub fn calculate_ats_score(
    resume: &ResumeContent,
    job_description: &str,
    job_title: &str,
) -> AtsScore {
    calculate_ats_score_with(Taxonomy::builtin(), resume, job_description, job_title)
}

/// Scores `resume` against a job using the given taxonomy.
pub fn calculate_ats_score_with(
    taxonomy: &Taxonomy,
    resume: &ResumeContent,
    job_description: &str,
    job_title: &str,
) -> AtsScore {
    let normalized_resume = normalize(&resume.full_text());
    let normalized_job = normalize(job_description);

    let job_keywords = extract_keywords(job_description);

    let breakdown = ScoreBreakdown {
        keywords: score_keywords(&normalized_resume, &job_keywords),
        hard_skills: score_hard_skills(&taxonomy.hard_skills, &normalized_resume, &normalized_job),
        job_title: score_job_title(&resume.titles(), job_title),
        education: score_education(&resume.education, job_description),
        format: score_format(resume),
        soft_skills: score_soft_skills(&taxonomy.soft_skills, &normalized_resume, &normalized_job),
    };

    let overall = breakdown.keywords.score
        + breakdown.hard_skills.score
        + breakdown.job_title.score
        + breakdown.education.score
        + breakdown.format.score
        + breakdown.soft_skills.score;

    let suggestions = build_suggestions(&breakdown);

    debug!(
        overall,
        keywords = breakdown.keywords.score,
        hard_skills = breakdown.hard_skills.score,
        job_title = breakdown.job_title.score,
        education = breakdown.education.score,
        format = breakdown.format.score,
        soft_skills = breakdown.soft_skills.score,
        job_keywords = job_keywords.len(),
        "ATS score computed"
    );

    AtsScore {
        overall,
        breakdown,
        suggestions,
    }
}

/// Derives prioritized suggestions from dimension evidence only.
fn build_suggestions(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut suggestions = Vec::new();

    let missing_skills = &breakdown.hard_skills.missing;
    if (1..=MAX_MISSING_SKILLS_TO_SUGGEST).contains(&missing_skills.len()) {
        suggestions.push(format!(
            "Add these skills from the job description if you have them: {}",
            join_first(missing_skills)
        ));
    }

    let long_missing: Vec<String> = breakdown
        .keywords
        .missing
        .iter()
        .filter(|kw| kw.len() > MIN_SUGGESTED_KEYWORD_LEN)
        .cloned()
        .collect();
    if !long_missing.is_empty() {
        suggestions.push(format!(
            "Work these job description phrases into your experience: {}",
            join_first(&long_missing)
        ));
    }

    if breakdown.job_title.relevance == Relevance::Low {
        suggestions.push(
            "Align your summary or role titles more closely with the target job title".to_string(),
        );
    }

    suggestions.extend(breakdown.format.issues.iter().cloned());

    let soft = &breakdown.soft_skills;
    if soft.matches.is_empty() && !soft.job_skills.is_empty() {
        suggestions.push(format!(
            "Highlight soft skills the job asks for, such as: {}",
            join_first(&soft.missing)
        ));
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn join_first(items: &[String]) -> String {
    items
        .iter()
        .take(MAX_NAMED_ITEMS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
