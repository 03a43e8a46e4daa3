use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use thiserror::Error;

use crate::matching::calculate_match;
use crate::screening::{screen_resume, ScreeningConfig, ScreeningStatus};
use crate::{CandidateProfile, JobPosting};

/// Human reviewer track. Unrelated to the automated screening verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
pub enum ReviewStatus {
    Applied,
    Reviewed,
    Rejected,
    Selected,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("invalid review status: an application cannot return to Applied")]
    InvalidTransition,
}

/// Application record with its screening snapshot.
///
/// The match and screening fields are copied once at submission and never
/// refreshed, even if the candidate's skills or the job's requirements change
/// later. Only the review status moves afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Option<i64>,
    pub candidate_id: Option<i64>,
    pub job_id: Option<i64>,
    pub status: ReviewStatus,
    pub match_percentage: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub screening_status: ScreeningStatus,
    pub screening_reasons: Vec<String>,
    pub applied_at: DateTime<Utc>,
}

impl Application {
    /// Compute match and screening once and freeze the snapshot.
    pub fn submit(
        candidate: &CandidateProfile,
        job: &JobPosting,
        config: &ScreeningConfig,
    ) -> Application {
        let match_result = calculate_match(&candidate.skills, &job.skills_required);
        let verdict = screen_resume(candidate, job, &match_result, config);

        Application {
            id: None,
            candidate_id: candidate.id,
            job_id: job.id,
            status: ReviewStatus::Applied,
            match_percentage: match_result.match_percentage,
            matched_skills: match_result.matched_skills,
            missing_skills: match_result.missing_skills,
            screening_status: verdict.status,
            screening_reasons: verdict.reasons,
            applied_at: Utc::now(),
        }
    }

    /// Manual review transition. Reviewers may mark an application Reviewed,
    /// Rejected, or Selected, but never move it back to Applied.
    pub fn set_review_status(&mut self, status: ReviewStatus) -> Result<(), ReviewError> {
        if status == ReviewStatus::Applied {
            return Err(ReviewError::InvalidTransition);
        }
        self.status = status;
        Ok(())
    }

    pub fn passed_screening(&self) -> bool {
        self.screening_status != ScreeningStatus::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            id: Some(7),
            skills: vec!["javascript".into(), "react".into(), "nodejs".into()],
            experience: Some(4),
            resume_uploaded: true,
            ..CandidateProfile::default()
        }
    }

    fn job() -> JobPosting {
        JobPosting {
            id: Some(42),
            title: "Fullstack Engineer".into(),
            skills_required: vec!["JavaScript".into(), "React".into(), "Node".into()],
            experience: Some(2),
            ..JobPosting::default()
        }
    }

    fn config() -> ScreeningConfig {
        ScreeningConfig {
            min_match_percentage: 40,
            recommend_percentage: 75,
        }
    }

    #[test]
    fn submit_snapshots_match_and_screening() {
        let application = Application::submit(&candidate(), &job(), &config());

        assert_eq!(application.candidate_id, Some(7));
        assert_eq!(application.job_id, Some(42));
        assert_eq!(application.status, ReviewStatus::Applied);
        assert_eq!(application.match_percentage, 100);
        assert_eq!(application.screening_status, ScreeningStatus::Recommended);
        assert_eq!(application.screening_reasons, vec!["Strong overall match"]);
        assert!(application.passed_screening());
    }

    #[test]
    fn snapshot_is_frozen_after_submission() {
        let mut profile = candidate();
        let application = Application::submit(&profile, &job(), &config());

        // The candidate loses skills afterwards; the stored snapshot keeps the
        // values computed at submission time.
        profile.skills.clear();
        let fresh = calculate_match(&profile.skills, &job().skills_required);

        assert_eq!(fresh.match_percentage, 0);
        assert_eq!(application.match_percentage, 100);
        assert_eq!(application.screening_status, ScreeningStatus::Recommended);
    }

    #[test]
    fn failed_screening_still_creates_an_application() {
        let mut weak = candidate();
        weak.skills = vec!["php".into()];
        weak.experience = Some(0);

        let application = Application::submit(&weak, &job(), &config());

        assert_eq!(application.screening_status, ScreeningStatus::Rejected);
        assert!(!application.passed_screening());
        assert!(application.screening_reasons.len() >= 2);
        assert_eq!(application.status, ReviewStatus::Applied);
    }

    #[test]
    fn review_transitions_exclude_applied() {
        let mut application = Application::submit(&candidate(), &job(), &config());

        application.set_review_status(ReviewStatus::Reviewed).unwrap();
        assert_eq!(application.status, ReviewStatus::Reviewed);

        application.set_review_status(ReviewStatus::Selected).unwrap();
        assert_eq!(application.status, ReviewStatus::Selected);

        assert_eq!(
            application.set_review_status(ReviewStatus::Applied),
            Err(ReviewError::InvalidTransition)
        );
        assert_eq!(application.status, ReviewStatus::Selected);
    }

    #[test]
    fn review_track_is_independent_of_screening() {
        let mut weak = candidate();
        weak.skills = vec!["php".into()];

        let mut application = Application::submit(&weak, &job(), &config());
        assert_eq!(application.screening_status, ScreeningStatus::Rejected);

        // A reviewer can still select a screened-out candidate.
        application.set_review_status(ReviewStatus::Selected).unwrap();
        assert_eq!(application.status, ReviewStatus::Selected);
        assert_eq!(application.screening_status, ScreeningStatus::Rejected);
    }
}
