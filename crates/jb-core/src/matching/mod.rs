pub mod engine;
pub mod ranking;

pub use engine::{calculate_match, MatchResult};
pub use ranking::{rank_jobs, JobRecommendation};
