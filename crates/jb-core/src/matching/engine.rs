use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::skill_normalizer::{normalize_skill_set, normalize_skills_ordered};

/// Ephemeral match outcome, recomputed per request. Only applications persist a
/// copy of it, frozen at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_percentage: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Compare a candidate's skills against a job's requirements.
///
/// Candidate skills normalize into a deduplicated set scanned in lexicographic
/// order, so the result is reproducible. Job skills normalize into an ordered
/// list with duplicates kept: a repeated requirement weighs more than once in
/// the denominator. A requirement counts as matched on equality or
/// bidirectional substring containment, which lets specialization pairs like
/// "react" / "reactnative" find each other.
pub fn calculate_match(candidate_skills: &[String], job_skills: &[String]) -> MatchResult {
    let candidate: BTreeSet<String> = normalize_skill_set(candidate_skills);
    let required: Vec<String> = normalize_skills_ordered(job_skills);

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for skill in &required {
        let found = candidate
            .iter()
            .any(|c| c == skill || c.contains(skill.as_str()) || skill.contains(c.as_str()));

        if found {
            matched_skills.push(skill.clone());
        } else {
            missing_skills.push(skill.clone());
        }
    }

    // Zero requirements means nothing to match against, scored 0 by design.
    let match_percentage = if required.is_empty() {
        0
    } else {
        ((matched_skills.len() as f64 / required.len() as f64) * 100.0).round() as u8
    };

    MatchResult {
        match_percentage,
        matched_skills,
        missing_skills,
    }
}
