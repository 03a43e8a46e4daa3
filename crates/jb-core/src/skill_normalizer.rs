use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Alias → canonical form. Every canonical form carries an identity entry so
/// normalization is idempotent once canonical form is reached.
///
/// NOTE: dotted aliases like "node.js" stay reachable because the cleaning step
/// keeps `.` and `+`.
const SKILL_SYNONYMS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("javascript", "javascript"),
    ("node", "nodejs"),
    ("node.js", "nodejs"),
    ("nodejs", "nodejs"),
    ("reactjs", "react"),
    ("react", "react"),
    ("mongo", "mongodb"),
    ("mongodb", "mongodb"),
    ("css3", "css"),
    ("html5", "html"),
    ("expressjs", "express"),
    ("express", "express"),
    ("sql", "sql"),
    ("mysql", "sql"),
    ("postgresql", "sql"),
    ("git", "git"),
    ("github", "git"),
    ("jwt", "authentication"),
    ("auth", "authentication"),
    ("authentication", "authentication"),
];

static BUILTIN_TABLE: LazyLock<SynonymTable> = LazyLock::new(|| {
    SynonymTable::from_entries(
        SKILL_SYNONYMS
            .iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string())),
    )
});

/// Immutable synonym table, loaded once per process and injected wherever
/// normalization happens.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    map: HashMap<String, String>,
}

impl SynonymTable {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            map: entries.into_iter().collect(),
        }
    }

    pub fn builtin() -> &'static SynonymTable {
        &BUILTIN_TABLE
    }

    /// Canonicalize one raw skill token.
    ///
    /// Lowercases, strips every character outside `[a-z0-9.+]`, then collapses
    /// known aliases. Unknown cleaned tokens pass through unchanged. Returns
    /// `None` for empty input or input that cleans down to nothing.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let cleaned: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '+'))
            .collect();

        if cleaned.is_empty() {
            return None;
        }

        match self.map.get(cleaned.as_str()) {
            Some(canonical) => Some(canonical.clone()),
            None => Some(cleaned),
        }
    }
}

/// Normalize one skill token against the built-in table.
pub fn normalize_skill(raw: &str) -> Option<String> {
    SynonymTable::builtin().normalize(raw)
}

/// Normalize a skill list into a deduplicated set with lexicographic iteration
/// order. Tokens that fail normalization are dropped.
pub fn normalize_skill_set(skills: &[String]) -> BTreeSet<String> {
    skills.iter().filter_map(|s| normalize_skill(s)).collect()
}

/// Normalize a skill list keeping declaration order and duplicates. Used for job
/// requirements, where a repeated requirement counts more than once.
pub fn normalize_skills_ordered(skills: &[String]) -> Vec<String> {
    skills.iter().filter_map(|s| normalize_skill(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_known_aliases() {
        assert_eq!(normalize_skill("js"), Some("javascript".into()));
        assert_eq!(normalize_skill("GitHub"), Some("git".into()));
        assert_eq!(normalize_skill("PostgreSQL"), Some("sql".into()));
        assert_eq!(normalize_skill("JWT"), Some("authentication".into()));
    }

    #[test]
    fn cleans_case_and_punctuation() {
        assert_eq!(normalize_skill("Node.JS"), Some("nodejs".into()));
        assert_eq!(normalize_skill("ReactJS"), Some("react".into()));
        assert_eq!(normalize_skill("Re act!"), Some("react".into()));
    }

    #[test]
    fn dotted_alias_survives_cleaning() {
        // The cleaning step keeps '.', so the "node.js" table entry is live.
        assert_eq!(normalize_skill("node.js"), Some("nodejs".into()));
        assert_eq!(normalize_skill("NODE.JS"), Some("nodejs".into()));
    }

    #[test]
    fn unknown_tokens_pass_through_cleaned() {
        assert_eq!(normalize_skill("MyCustomFramework"), Some("mycustomframework".into()));
        assert_eq!(normalize_skill("c++"), Some("c++".into()));
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_none() {
        assert_eq!(normalize_skill(""), None);
        assert_eq!(normalize_skill("   "), None);
        assert_eq!(normalize_skill("!!!"), None);
    }

    #[test]
    fn idempotent_once_canonical() {
        for (alias, _) in SKILL_SYNONYMS {
            let once = normalize_skill(alias).expect("alias normalizes");
            let twice = normalize_skill(&once).expect("canonical normalizes");
            assert_eq!(once, twice, "normalizing {alias} must be idempotent");
        }
    }

    #[test]
    fn set_dedupes_and_drops_failures() {
        let set = normalize_skill_set(&[
            "JS".into(),
            "javascript".into(),
            "!!!".into(),
            "Mongo".into(),
        ]);
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec!["javascript".to_string(), "mongodb".to_string()]
        );
    }

    #[test]
    fn ordered_keeps_duplicates_and_order() {
        let ordered = normalize_skills_ordered(&[
            "React".into(),
            "MySQL".into(),
            "PostgreSQL".into(),
            "React".into(),
        ]);
        assert_eq!(ordered, vec!["react", "sql", "sql", "react"]);
    }
}
