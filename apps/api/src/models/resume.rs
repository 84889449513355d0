use serde::{Deserialize, Serialize};

/// Structured resume as produced by the upstream parsing step.
///
/// Every field defaults to empty so a partially populated payload still scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeContent {
    pub summary: Option<String>,
    /// First entry is the most recent role; scoring treats the list as unordered.
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<String>,
    pub education: Vec<EducationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationItem {
    pub degree: String,
    pub field: Option<String>,
    pub institution: String,
}

impl ResumeContent {
    /// Space-joined resume text in a fixed order: summary, each role's
    /// title/company/bullets, skills, then each education entry.
    pub fn full_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();

        if let Some(summary) = self.summary.as_deref() {
            parts.push(summary);
        }
        for role in &self.experience {
            parts.push(&role.title);
            parts.push(&role.company);
            parts.extend(role.bullets.iter().map(String::as_str));
        }
        parts.extend(self.skills.iter().map(String::as_str));
        for entry in &self.education {
            parts.push(&entry.degree);
            if let Some(field) = entry.field.as_deref() {
                parts.push(field);
            }
            parts.push(&entry.institution);
        }

        parts.join(" ")
    }

    /// Lowercased experience titles.
    pub fn titles(&self) -> Vec<String> {
        self.experience
            .iter()
            .map(|role| role.title.to_lowercase())
            .collect()
    }

    pub fn summary_len(&self) -> usize {
        self.summary
            .as_deref()
            .map(|s| s.chars().count())
            .unwrap_or(0)
    }
}

impl EducationItem {
    /// Degree and field of study, the text the degree-level hierarchy is matched against.
    pub fn description(&self) -> String {
        match self.field.as_deref() {
            Some(field) => format!("{} {}", self.degree, field),
            None => self.degree.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> ResumeContent {
        ResumeContent {
            summary: Some("Backend engineer".to_string()),
            experience: vec![ExperienceItem {
                title: "Senior Engineer".to_string(),
                company: "Acme".to_string(),
                bullets: vec!["Built APIs".to_string(), "Ran on-call".to_string()],
            }],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            education: vec![EducationItem {
                degree: "BS".to_string(),
                field: Some("Computer Science".to_string()),
                institution: "State University".to_string(),
            }],
        }
    }

    #[test]
    fn test_full_text_order_is_fixed() {
        assert_eq!(
            sample_resume().full_text(),
            "Backend engineer Senior Engineer Acme Built APIs Ran on-call Rust SQL BS Computer Science State University"
        );
    }

    #[test]
    fn test_full_text_of_empty_resume_is_empty() {
        assert_eq!(ResumeContent::default().full_text(), "");
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let resume: ResumeContent =
            serde_json::from_str(r#"{"experience": [{"title": "Analyst"}]}"#).unwrap();
        assert!(resume.summary.is_none());
        assert!(resume.skills.is_empty());
        assert_eq!(resume.experience[0].company, "");
        assert!(resume.experience[0].bullets.is_empty());
    }

    #[test]
    fn test_titles_are_lowercased() {
        assert_eq!(sample_resume().titles(), vec!["senior engineer".to_string()]);
    }

    #[test]
    fn test_education_description_joins_field() {
        let entry = &sample_resume().education[0];
        assert_eq!(entry.description(), "BS Computer Science");
    }

    #[test]
    fn test_summary_len_counts_raw_characters() {
        let resume = ResumeContent {
            summary: Some(format!("  {}  ", "é".repeat(46))),
            ..ResumeContent::default()
        };
        assert_eq!(resume.summary_len(), 50);
        assert_eq!(ResumeContent::default().summary_len(), 0);
    }
}
