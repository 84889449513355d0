//! Taxonomy — the fixed hard/soft skill vocabularies and their whole-word matchers.
//!
//! Vocabularies are data (`assets/taxonomy.json`), not code. A loaded `Taxonomy` is
//! immutable: regexes are compiled once at construction and only ever read afterwards,
//! so one instance can be shared across threads behind an `Arc` or a `static`.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::TaxonomyError;

const BUILTIN_TAXONOMY_JSON: &str = include_str!("../../assets/taxonomy.json");

static BUILTIN_TAXONOMY: Lazy<Taxonomy> = Lazy::new(|| {
    Taxonomy::from_json(BUILTIN_TAXONOMY_JSON).expect("embedded taxonomy asset is valid")
});

/// Which vocabulary a term list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyKind {
    HardSkills,
    SoftSkills,
}

impl std::fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VocabularyKind::HardSkills => write!(f, "hard_skills"),
            VocabularyKind::SoftSkills => write!(f, "soft_skills"),
        }
    }
}

/// On-disk shape of the taxonomy asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyFile {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone)]
struct Term {
    text: String,
    pattern: Regex,
}

/// A tagged, ordered term list with one compiled matcher per term.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    kind: VocabularyKind,
    terms: Vec<Term>,
}

impl Vocabulary {
    /// Lowercases and trims each term, drops repeats (first occurrence wins) and
    /// compiles an escaped whole-word pattern for each.
    pub fn new<I, S>(kind: VocabularyKind, raw_terms: I) -> Result<Self, TaxonomyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();

        for raw in raw_terms {
            let text = raw.as_ref().trim().to_lowercase();
            if text.is_empty() {
                return Err(TaxonomyError::BlankTerm(kind));
            }
            if !seen.insert(text.clone()) {
                continue;
            }
            let pattern = whole_word_pattern(&text)?;
            terms.push(Term { text, pattern });
        }

        if terms.is_empty() {
            return Err(TaxonomyError::EmptyVocabulary(kind));
        }

        Ok(Self { kind, terms })
    }

    pub fn kind(&self) -> VocabularyKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t.text == term)
    }

    /// Terms in vocabulary order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.text.as_str())
    }

    /// Returns every term occurring as a whole word in `normalized_text`, in vocabulary
    /// order. Callers pass text that has already been through `normalize`.
    pub fn extract(&self, normalized_text: &str) -> Vec<String> {
        if normalized_text.is_empty() {
            return Vec::new();
        }
        self.terms
            .iter()
            .filter(|t| t.pattern.is_match(normalized_text))
            .map(|t| t.text.clone())
            .collect()
    }
}

/// `term` bounded by start/end of text or a non-word character on each side.
/// A plain `\b` would fail after symbol-terminated terms such as `c++`.
fn whole_word_pattern(term: &str) -> Result<Regex, TaxonomyError> {
    let pattern = format!(r"(?:^|[^a-z0-9_]){}(?:[^a-z0-9_]|$)", regex::escape(term));
    Ok(Regex::new(&pattern)?)
}

/// Both vocabularies the scorer matches against.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    pub hard_skills: Vocabulary,
    pub soft_skills: Vocabulary,
}

impl Taxonomy {
    /// The taxonomy compiled from the embedded asset.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN_TAXONOMY
    }

    pub fn from_file(file: &TaxonomyFile) -> Result<Self, TaxonomyError> {
        Ok(Self {
            hard_skills: Vocabulary::new(VocabularyKind::HardSkills, &file.hard_skills)?,
            soft_skills: Vocabulary::new(VocabularyKind::SoftSkills, &file.soft_skills)?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile = serde_json::from_str(json)?;
        Self::from_file(&file)
    }

    pub fn from_path(path: &Path) -> Result<Self, TaxonomyError> {
        let json = std::fs::read_to_string(path)?;
        let taxonomy = Self::from_json(&json)?;
        info!(
            "Loaded taxonomy from {}: {} hard skills, {} soft skills",
            path.display(),
            taxonomy.hard_skills.len(),
            taxonomy.soft_skills.len()
        );
        Ok(taxonomy)
    }

    /// Term lists in serializable form, for inspection.
    pub fn to_file(&self) -> TaxonomyFile {
        TaxonomyFile {
            hard_skills: self.hard_skills.terms().map(str::to_string).collect(),
            soft_skills: self.soft_skills.terms().map(str::to_string).collect(),
        }
    }
}
