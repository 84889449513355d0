//! Structural completeness: deducts points for missing or thin resume sections.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeContent;

pub const FORMAT_MAX: u32 = 10;

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_AVG_BULLETS: f64 = 2.0;
const MIN_SKILLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatScore {
    pub score: u32,
    pub max: u32,
    /// One entry per deduction, in check order.
    pub issues: Vec<String>,
}

pub fn score_format(resume: &ResumeContent) -> FormatScore {
    let mut deductions = 0u32;
    let mut issues = Vec::new();
    let mut deduct = |points: u32, issue: &str| {
        deductions += points;
        issues.push(issue.to_string());
    };

    if resume.summary_len() < MIN_SUMMARY_CHARS {
        deduct(
            2,
            "Add a professional summary of at least 50 characters highlighting your key qualifications",
        );
    }

    if resume.experience.is_empty() {
        deduct(4, "Add work experience with your roles and accomplishments");
    } else {
        let total_bullets: usize = resume.experience.iter().map(|e| e.bullets.len()).sum();
        let avg_bullets = total_bullets as f64 / resume.experience.len() as f64;
        if avg_bullets < MIN_AVG_BULLETS {
            deduct(2, "Add more bullet points to your experience (aim for 3-5 per role)");
        }
    }

    if resume.skills.len() < MIN_SKILLS {
        deduct(2, "List at least 5 relevant skills");
    }

    if resume.education.is_empty() {
        deduct(1, "Add your education background");
    }

    FormatScore {
        score: FORMAT_MAX.saturating_sub(deductions),
        max: FORMAT_MAX,
        issues,
    }
}
