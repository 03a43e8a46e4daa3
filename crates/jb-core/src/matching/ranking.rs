use serde::{Deserialize, Serialize};

use super::engine::{calculate_match, MatchResult};
use crate::JobPosting;

/// One entry of a candidate's recommendation feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub job: JobPosting,
    pub match_result: MatchResult,
}

/// Rank jobs for a candidate by descending match percentage.
///
/// The sort is stable, so jobs with equal percentages keep their input order.
pub fn rank_jobs(candidate_skills: &[String], jobs: &[JobPosting]) -> Vec<JobRecommendation> {
    let mut ranked: Vec<JobRecommendation> = jobs
        .iter()
        .map(|job| JobRecommendation {
            job: job.clone(),
            match_result: calculate_match(candidate_skills, &job.skills_required),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.match_result
            .match_percentage
            .cmp(&a.match_result.match_percentage)
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, required: &[&str]) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            skills_required: required.iter().map(|s| s.to_string()).collect(),
            ..JobPosting::default()
        }
    }

    #[test]
    fn orders_by_descending_match() {
        let candidate = vec!["react".to_string(), "nodejs".to_string()];
        let jobs = vec![
            job("backend", &["python", "django"]),
            job("fullstack", &["react", "nodejs"]),
            job("frontend", &["react", "css"]),
        ];

        let ranked = rank_jobs(&candidate, &jobs);

        assert_eq!(ranked[0].job.title, "fullstack");
        assert_eq!(ranked[0].match_result.match_percentage, 100);
        assert_eq!(ranked[1].job.title, "frontend");
        assert_eq!(ranked[2].job.title, "backend");
        assert_eq!(ranked[2].match_result.match_percentage, 0);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let candidate = vec!["rust".to_string()];
        let jobs = vec![
            job("first", &["rust", "go"]),
            job("second", &["rust", "zig"]),
        ];

        let ranked = rank_jobs(&candidate, &jobs);

        assert_eq!(ranked[0].match_result.match_percentage, 50);
        assert_eq!(ranked[1].match_result.match_percentage, 50);
        assert_eq!(ranked[0].job.title, "first");
        assert_eq!(ranked[1].job.title, "second");
    }

    #[test]
    fn empty_job_list_yields_empty_feed() {
        assert!(rank_jobs(&["rust".to_string()], &[]).is_empty());
    }
}
