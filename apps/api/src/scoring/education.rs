//! Education dimension: compares the highest degree on the resume with the level the
//! job description asks for.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::EducationItem;

pub const EDUCATION_MAX: u32 = 10;

static BACHELOR_ABBREVIATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:bs|ba|b\.s|b\.a)\b").expect("valid bachelor pattern"));
static MASTER_ABBREVIATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:ms|ma|m\.s|m\.a)\b").expect("valid master pattern"));

/// Ordinal degree level: 0 = none detected, 1 = high school … 5 = doctorate.
pub type DegreeLevel = u8;

/// Maps free text to the highest degree level it mentions.
pub fn degree_level(text: &str) -> DegreeLevel {
    let lower = text.to_lowercase();

    if lower.contains("phd") || lower.contains("ph.d") || lower.contains("doctorate") {
        5
    } else if lower.contains("master") || lower.contains("mba") || MASTER_ABBREVIATION.is_match(&lower) {
        4
    } else if lower.contains("bachelor") || BACHELOR_ABBREVIATION.is_match(&lower) {
        3
    } else if lower.contains("associate") {
        2
    } else if lower.contains("high school") {
        1
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationStatus {
    Exceeds,
    Meets,
    Partial,
    Missing,
}

impl EducationStatus {
    pub fn score(self) -> u32 {
        match self {
            EducationStatus::Exceeds | EducationStatus::Meets => 10,
            EducationStatus::Partial => 5,
            EducationStatus::Missing => 3,
        }
    }

    fn message(self) -> &'static str {
        match self {
            EducationStatus::Exceeds => "Your education exceeds the stated requirement.",
            EducationStatus::Meets => "Your education meets the requirement.",
            EducationStatus::Partial => "Your education is below the stated requirement.",
            EducationStatus::Missing => "No education matching the stated requirement was found.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationScore {
    pub score: u32,
    pub max: u32,
    pub status: EducationStatus,
    pub message: String,
    pub required_level: DegreeLevel,
    pub resume_level: DegreeLevel,
}

pub fn score_education(education: &[EducationItem], job_description: &str) -> EducationScore {
    let required_level = degree_level(job_description);
    let resume_level = education
        .iter()
        .map(|entry| degree_level(&entry.description()))
        .max()
        .unwrap_or(0);

    let status = if required_level == 0 {
        EducationStatus::Meets
    } else if resume_level > required_level {
        EducationStatus::Exceeds
    } else if resume_level == required_level {
        EducationStatus::Meets
    } else if resume_level > 0 {
        EducationStatus::Partial
    } else {
        EducationStatus::Missing
    };

    EducationScore {
        score: status.score(),
        max: EDUCATION_MAX,
        status,
        message: status.message().to_string(),
        required_level,
        resume_level,
    }
}
