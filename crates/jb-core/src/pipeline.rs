use tracing::{debug, info};

use crate::application::Application;
use crate::document::{extract_text, DocumentError};
use crate::matching::{calculate_match, rank_jobs, JobRecommendation, MatchResult};
use crate::screening::{screen_resume, ScreeningConfig, ScreeningVerdict};
use crate::vocabulary::SkillVocabulary;
use crate::{CandidateProfile, JobPosting};

/// Façade over the résumé-to-verdict flow: document text extraction, skill
/// extraction, matching, screening, and recommendation ranking.
///
/// Holds the immutable vocabulary and screening thresholds; every method is a
/// pure computation over its inputs and safe to call from concurrent request
/// handlers without coordination.
pub struct ScreeningPipeline {
    vocabulary: SkillVocabulary,
    config: ScreeningConfig,
}

impl Default for ScreeningPipeline {
    fn default() -> Self {
        Self::new(SkillVocabulary::builtin().clone(), ScreeningConfig::default())
    }
}

impl ScreeningPipeline {
    pub fn new(vocabulary: SkillVocabulary, config: ScreeningConfig) -> Self {
        Self { vocabulary, config }
    }

    /// Turn an uploaded résumé into the candidate's stored skill list.
    /// Extraction errors propagate to the upload-handling caller untouched.
    pub fn ingest_resume(&self, bytes: &[u8]) -> Result<Vec<String>, DocumentError> {
        let text = extract_text(bytes)?;
        let skills = self.vocabulary.extract(&text);
        info!(chars = text.len(), skills = skills.len(), "resume ingested");
        Ok(skills)
    }

    /// Match and screen one candidate against one job.
    pub fn evaluate(
        &self,
        candidate: &CandidateProfile,
        job: &JobPosting,
    ) -> (MatchResult, ScreeningVerdict) {
        let match_result = calculate_match(&candidate.skills, &job.skills_required);
        let verdict = screen_resume(candidate, job, &match_result, &self.config);
        debug!(
            match_percentage = match_result.match_percentage,
            status = verdict.status.as_ref(),
            "application evaluated"
        );
        (match_result, verdict)
    }

    /// Submit an application, freezing the match and screening snapshot.
    pub fn apply(&self, candidate: &CandidateProfile, job: &JobPosting) -> Application {
        Application::submit(candidate, job, &self.config)
    }

    /// Build the candidate's recommendation feed, best match first.
    pub fn recommend(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobPosting],
    ) -> Vec<JobRecommendation> {
        rank_jobs(&candidate.skills, jobs)
    }
}
