//! Tailoring checker — compares the résumé against a specific job
//! description via the model. Only runs when the job description is long
//! enough to be meaningful; failure degrades the whole category to `None`
//! in the analyzer, never aborting the run.

use serde::{Deserialize, Serialize};

use crate::analysis::issue::{issue_id, Category, Issue, Severity};
use crate::analysis::prompts::{TAILORING_PROMPT_TEMPLATE, TAILORING_SYSTEM};
use crate::analysis::CheckError;
use crate::llm_client::{complete_as, JsonModel};
use crate::models::resume::ParsedResume;

/// Minimum job-description length for the batch tailoring check. Anything
/// shorter is treated as "no job description supplied".
pub const MIN_JD_CHARS: usize = 50;

/// Weight of the keyword-match subscore in the tailoring score.
const KEYWORD_MATCH_WEIGHT: f64 = 0.6;
/// Weight of the skills-alignment subscore in the tailoring score.
const SKILLS_ALIGNMENT_WEIGHT: f64 = 0.4;

/// Validated shape of the tailoring model response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoringReport {
    #[serde(default)]
    pub found_hard_skills: Vec<String>,
    #[serde(default)]
    pub missing_hard_skills: Vec<String>,
    #[serde(default)]
    pub found_soft_skills: Vec<String>,
    #[serde(default)]
    pub missing_soft_skills: Vec<String>,
    pub keyword_match_score: u32,
    pub skills_alignment_score: u32,
}

/// The tailoring category of an analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoringAnalysis {
    pub score: u32,
    pub keyword_match_score: u32,
    pub skills_alignment_score: u32,
    pub found_hard_skills: Vec<String>,
    pub missing_hard_skills: Vec<String>,
    pub found_soft_skills: Vec<String>,
    pub missing_soft_skills: Vec<String>,
    pub issues: Vec<Issue>,
}

/// Combines the two subscores into the tailoring score.
pub fn combine_subscores(keyword_match: u32, skills_alignment: u32) -> u32 {
    (f64::from(keyword_match.min(100)) * KEYWORD_MATCH_WEIGHT
        + f64::from(skills_alignment.min(100)) * SKILLS_ALIGNMENT_WEIGHT)
        .round() as u32
}

/// Asks the model to compare the résumé with the job description.
/// Malformed output surfaces as `CheckError`; the analyzer degrades it.
pub async fn check_tailoring(
    model: &dyn JsonModel,
    resume: &ParsedResume,
    job_description: &str,
    job_title: Option<&str>,
) -> Result<TailoringAnalysis, CheckError> {
    let resume_json = serde_json::to_string(resume)
        .map_err(|e| CheckError::Unavailable(format!("resume serialization failed: {e}")))?;

    let prompt = TAILORING_PROMPT_TEMPLATE
        .replace("{job_title}", job_title.unwrap_or("(not provided)"))
        .replace("{jd_text}", job_description)
        .replace("{resume_json}", &resume_json);

    let report: TailoringReport = complete_as(model, &prompt, TAILORING_SYSTEM).await?;
    Ok(analysis_from_report(report))
}

/// Pure mapping from a validated model report to the tailoring category.
pub fn analysis_from_report(report: TailoringReport) -> TailoringAnalysis {
    let score = combine_subscores(report.keyword_match_score, report.skills_alignment_score);

    let mut issues = Vec::new();
    if !report.missing_hard_skills.is_empty() {
        issues.push(Issue {
            id: issue_id(Category::Tailoring, "missing_keywords", "missing_hard_skills"),
            category: Category::Tailoring,
            subcategory: "missing_keywords".to_string(),
            severity: Severity::Warning,
            title: "Key job requirements missing from the résumé".to_string(),
            description: format!(
                "The job description asks for skills the résumé never mentions: {}.",
                report.missing_hard_skills.join(", ")
            ),
            recommendation:
                "Work the missing skills you genuinely have into your bullets and skills list."
                    .to_string(),
            fixable: true,
            location: None,
            original_text: None,
        });
    }
    if !report.missing_soft_skills.is_empty() {
        issues.push(Issue {
            id: issue_id(Category::Tailoring, "missing_skills", "missing_soft_skills"),
            category: Category::Tailoring,
            subcategory: "missing_skills".to_string(),
            severity: Severity::Info,
            title: "Soft skills from the posting are not reflected".to_string(),
            description: format!(
                "The posting emphasizes: {}.",
                report.missing_soft_skills.join(", ")
            ),
            recommendation: "Show these through concrete examples rather than listing them verbatim."
                .to_string(),
            fixable: true,
            location: None,
            original_text: None,
        });
    }

    TailoringAnalysis {
        score,
        keyword_match_score: report.keyword_match_score.min(100),
        skills_alignment_score: report.skills_alignment_score.min(100),
        found_hard_skills: report.found_hard_skills,
        missing_hard_skills: report.missing_hard_skills,
        found_soft_skills: report.found_soft_skills,
        missing_soft_skills: report.missing_soft_skills,
        issues,
    }
}
