use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::matching::MatchResult;
use crate::{CandidateProfile, JobPosting};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreeningStatus {
    Rejected,
    Shortlisted,
    Recommended,
}

/// Rule-engine classification of an application, independent of the human
/// review track. `reasons` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningVerdict {
    pub status: ScreeningStatus,
    pub score: u8,
    pub reasons: Vec<String>,
}

fn env_threshold(key: &str, default: u8) -> u8 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Below this match percentage an application is rejected outright.
    pub min_match_percentage: u8,
    /// At or above this match percentage a clean application is recommended.
    pub recommend_percentage: u8,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            min_match_percentage: env_threshold("JB_MIN_MATCH_THRESHOLD", 40),
            recommend_percentage: env_threshold("JB_RECOMMEND_THRESHOLD", 75),
        }
    }
}

/// Apply the screening rules in order over a precomputed match result.
///
/// Rule 1 (mandatory skills) short-circuits; rules 2 and 3 accumulate reasons
/// before the final decision. Missing fields default (empty skill list, zero
/// experience), so the function is total over well-formed input.
pub fn screen_resume(
    resume: &CandidateProfile,
    job: &JobPosting,
    match_result: &MatchResult,
    config: &ScreeningConfig,
) -> ScreeningVerdict {
    let mut reasons = Vec::new();

    let candidate_exp = resume.experience.unwrap_or(0);
    let required_exp = job.experience.unwrap_or(0);

    // Rule 1: mandatory skills, checked verbatim against the stored candidate
    // skills. No normalization here; the field is a hard requirement.
    if !job.mandatory_skills.is_empty() {
        let missing: Vec<&String> = job
            .mandatory_skills
            .iter()
            .filter(|skill| !resume.skills.contains(skill))
            .collect();

        if !missing.is_empty() {
            return ScreeningVerdict {
                status: ScreeningStatus::Rejected,
                score: match_result.match_percentage,
                reasons: missing
                    .into_iter()
                    .map(|skill| format!("Missing mandatory skill: {skill}"))
                    .collect(),
            };
        }
    }

    // Rule 2: experience threshold.
    if candidate_exp < required_exp {
        reasons.push(format!(
            "Experience required: {required_exp} yrs, found: {candidate_exp} yrs"
        ));
    }

    // Rule 3: minimum match threshold.
    if match_result.match_percentage < config.min_match_percentage {
        reasons.push(format!(
            "Overall skill match below minimum threshold ({}%)",
            config.min_match_percentage
        ));
    }

    if !reasons.is_empty() {
        return ScreeningVerdict {
            status: ScreeningStatus::Rejected,
            score: match_result.match_percentage,
            reasons,
        };
    }

    if match_result.match_percentage >= config.recommend_percentage {
        ScreeningVerdict {
            status: ScreeningStatus::Recommended,
            score: match_result.match_percentage,
            reasons: vec!["Strong overall match".to_string()],
        }
    } else {
        ScreeningVerdict {
            status: ScreeningStatus::Shortlisted,
            score: match_result.match_percentage,
            reasons: vec!["Meets basic screening criteria".to_string()],
        }
    }
}
