pub mod application;
pub mod document;
pub mod logging;
pub mod matching;
pub mod pipeline;
pub mod screening;
pub mod skill_normalizer;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

// Commonly used data models for matching and screening functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Option<i64>,
    pub title: String,
    pub company: String,
    pub description: String,
    pub skills_required: Vec<String>,
    /// Minimum experience in years.
    pub experience: Option<i32>,
    /// Hard requirements checked verbatim against candidate skills.
    /// Not part of the persisted job schema yet; defaults to empty.
    #[serde(default)]
    pub mandatory_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Option<i64>,
    pub name: String,
    /// Skills written wholesale on each résumé upload, never merged.
    pub skills: Vec<String>,
    pub experience: Option<i32>,
    pub resume_uploaded: bool,
}
