use std::sync::LazyLock;

use regex::Regex;

/// Curated résumé vocabulary. Extraction results follow this order, and each
/// entry is reported as written here (normalization happens later, at match
/// time). Entries must be word-boundary friendly, so symbol-bearing names like
/// "c++" are excluded.
const BUILTIN_SKILLS: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "java",
    "nodejs",
    "node",
    "express",
    "react",
    "redux",
    "angular",
    "vue",
    "nextjs",
    "html",
    "css",
    "sass",
    "tailwind",
    "bootstrap",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "mongo",
    "redis",
    "graphql",
    "git",
    "github",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "firebase",
    "linux",
    "jenkins",
    "terraform",
    "jest",
    "mocha",
    "cypress",
    "selenium",
    "jwt",
    "oauth",
    "websocket",
    "microservices",
    "agile",
    "scrum",
    "php",
    "laravel",
    "ruby",
    "rails",
    "django",
    "flask",
    "spring",
    "kotlin",
    "swift",
    "flutter",
];

static BUILTIN_VOCABULARY: LazyLock<SkillVocabulary> = LazyLock::new(|| {
    SkillVocabulary::from_terms(BUILTIN_SKILLS.iter().copied())
        .expect("builtin vocabulary terms compile")
});

#[derive(Debug, Clone)]
struct VocabularyEntry {
    term: String,
    pattern: Regex,
}

/// Immutable skill vocabulary with one precompiled whole-word matcher per entry.
/// Built once at process start and shared read-only.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<VocabularyEntry>,
}

impl SkillVocabulary {
    /// Build a vocabulary from raw terms, preserving first-seen order and
    /// dropping duplicates.
    pub fn from_terms<'a>(terms: impl IntoIterator<Item = &'a str>) -> Result<Self, regex::Error> {
        let mut entries: Vec<VocabularyEntry> = Vec::new();
        for term in terms {
            if entries.iter().any(|e| e.term == term) {
                continue;
            }
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))?;
            entries.push(VocabularyEntry {
                term: term.to_string(),
                pattern,
            });
        }
        Ok(Self { entries })
    }

    pub fn builtin() -> &'static SkillVocabulary {
        &BUILTIN_VOCABULARY
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scan free text for vocabulary entries by whole-word presence. The result
    /// is duplicate-free and ordered by vocabulary iteration order, not by text
    /// occurrence order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.pattern.is_match(text))
            .map(|entry| entry.term.clone())
            .collect()
    }
}

/// Extract skills from free text using the built-in vocabulary.
pub fn extract_skills(text: &str) -> Vec<String> {
    SkillVocabulary::builtin().extract(text)
}
