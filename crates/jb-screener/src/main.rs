use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use jb_core::logging::init_tracing_subscriber;
use jb_core::pipeline::ScreeningPipeline;
use jb_core::{CandidateProfile, JobPosting};

/// Run a résumé PDF through text extraction, skill matching, and screening
/// against one job posting, and print the result as JSON.
#[derive(Parser, Debug)]
#[command(name = "jb-screener")]
struct Args {
    /// Path to the résumé PDF
    resume: PathBuf,
    /// Path to a job posting JSON file
    job: PathBuf,
    /// Candidate experience in years
    #[arg(long, default_value_t = 0)]
    experience: i32,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing_subscriber("jb-screener");

    let args = Args::parse();
    let pipeline = ScreeningPipeline::default();

    let bytes = std::fs::read(&args.resume)
        .with_context(|| format!("reading resume {}", args.resume.display()))?;
    let skills = pipeline.ingest_resume(&bytes)?;

    let job_json = std::fs::read_to_string(&args.job)
        .with_context(|| format!("reading job posting {}", args.job.display()))?;
    let job: JobPosting = serde_json::from_str(&job_json).context("parsing job posting JSON")?;

    let candidate = CandidateProfile {
        skills,
        experience: Some(args.experience),
        resume_uploaded: true,
        ..CandidateProfile::default()
    };

    let (match_result, verdict) = pipeline.evaluate(&candidate, &job);

    let report = serde_json::json!({
        "candidate_skills": candidate.skills,
        "match": match_result,
        "screening": verdict,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
