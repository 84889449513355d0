//! Hard-skill and soft-skill dimensions.
//!
//! Both intersect vocabulary hits in the job text with hits in the resume text.
//! Evidence lists keep vocabulary order.

use serde::{Deserialize, Serialize};

use crate::scoring::taxonomy::Vocabulary;

pub const HARD_SKILLS_MAX: u32 = 20;
pub const SOFT_SKILLS_MAX: u32 = 5;

/// Scoring constants for one skill dimension.
#[derive(Debug, Clone, Copy)]
struct SkillWeights {
    max: u32,
    /// Ratio multiplier applied before capping at `max`.
    scale: f64,
    /// Awarded when the job text names no vocabulary term at all.
    default_score: u32,
}

const HARD_WEIGHTS: SkillWeights = SkillWeights {
    max: HARD_SKILLS_MAX,
    scale: 25.0,
    default_score: 15,
};

const SOFT_WEIGHTS: SkillWeights = SkillWeights {
    max: SOFT_SKILLS_MAX,
    scale: 7.0,
    default_score: 3,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub score: u32,
    pub max: u32,
    /// Job skills also found in the resume.
    pub matches: Vec<String>,
    /// Job skills absent from the resume.
    pub missing: Vec<String>,
    /// Every vocabulary skill the job text mentions.
    pub job_skills: Vec<String>,
}

pub fn score_hard_skills(
    vocabulary: &Vocabulary,
    normalized_resume: &str,
    normalized_job: &str,
) -> SkillScore {
    score_skills(vocabulary, normalized_resume, normalized_job, HARD_WEIGHTS)
}

pub fn score_soft_skills(
    vocabulary: &Vocabulary,
    normalized_resume: &str,
    normalized_job: &str,
) -> SkillScore {
    score_skills(vocabulary, normalized_resume, normalized_job, SOFT_WEIGHTS)
}

fn score_skills(
    vocabulary: &Vocabulary,
    normalized_resume: &str,
    normalized_job: &str,
    weights: SkillWeights,
) -> SkillScore {
    let job_skills = vocabulary.extract(normalized_job);
    let resume_skills = vocabulary.extract(normalized_resume);

    let (matches, missing): (Vec<String>, Vec<String>) = job_skills
        .iter()
        .cloned()
        .partition(|skill| resume_skills.contains(skill));

    let score = if job_skills.is_empty() {
        weights.default_score
    } else {
        let ratio = matches.len() as f64 / job_skills.len() as f64;
        ((ratio * weights.scale).round() as u32).min(weights.max)
    };

    SkillScore {
        score,
        max: weights.max,
        matches,
        missing,
        job_skills,
    }
}
