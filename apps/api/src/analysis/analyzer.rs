//! Batch analyzer — orchestrates checkers → scoring → aggregation → summary
//! into one immutable `AnalysisResult`.
//!
//! Single pass, no retries at this layer (retries belong to the LLM client).
//! Content, sections and essentials run concurrently and are joined before
//! scoring; tailoring runs after the join because it is optional and its
//! failure path must never race the primary score computation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::aggregate::{build_summary, count_issues, sort_issues, Summary};
use crate::analysis::content::check_content;
use crate::analysis::essentials::check_essentials;
use crate::analysis::issue::{Issue, IssueCount};
use crate::analysis::scoring::{
    category_weights, overall_score, CategoryScore, CONTENT_SUBCATEGORY_WEIGHTS,
    ESSENTIALS_SUBCATEGORY_WEIGHTS, SECTIONS_SUBCATEGORY_WEIGHTS,
};
use crate::analysis::sections::check_sections;
use crate::analysis::tailoring::{check_tailoring, TailoringAnalysis, MIN_JD_CHARS};
use crate::llm_client::JsonModel;
use crate::models::resume::{FileType, ParsedResume};

/// Everything one analysis run consumes. The résumé must already be parsed —
/// a parse failure is fatal upstream and never reaches the analyzer.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub resume: ParsedResume,
    pub raw_text: String,
    pub file_type: FileType,
    pub job_description: Option<String>,
    pub job_title: Option<String>,
}

/// Immutable outcome of one analysis run. Constructed in a single invocation
/// and read as a value by every downstream consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub content: CategoryScore,
    pub sections: CategoryScore,
    pub ats_essentials: CategoryScore,
    pub tailoring: Option<TailoringAnalysis>,
    pub issues: Vec<Issue>,
    pub issue_count: IssueCount,
    pub summary: Summary,
    pub analyzed_at: DateTime<Utc>,
}

/// Runs the full batch analysis. Every stage failure past parsing is
/// absorbed locally: tailoring degrades to `None`, spelling/grammar degrades
/// to its neutral default inside the content checker. The caller always gets
/// a well-formed result with a numeric overall score.
pub async fn analyze(model: &dyn JsonModel, request: &AnalysisRequest) -> AnalysisResult {
    // Content is async (spelling subcheck); sections and essentials are pure.
    // Each check gets its own view of the immutable résumé — no shared
    // mutable state, so the join needs no coordination beyond itself.
    let (content_results, (sections_results, essentials_results)) = tokio::join!(
        check_content(model, &request.resume, &request.raw_text),
        async {
            (
                check_sections(&request.resume),
                check_essentials(&request.raw_text, request.file_type),
            )
        }
    );

    let job_description = request
        .job_description
        .as_deref()
        .filter(|jd| jd.trim().len() > MIN_JD_CHARS);

    let tailoring = match job_description {
        Some(jd) => {
            match check_tailoring(model, &request.resume, jd, request.job_title.as_deref()).await {
                Ok(analysis) => Some(analysis),
                Err(e) => {
                    warn!("tailoring check degraded to absent: {e}");
                    None
                }
            }
        }
        None => None,
    };

    let weights = category_weights(tailoring.is_some());
    let content = CategoryScore::build(content_results, CONTENT_SUBCATEGORY_WEIGHTS, weights.content);
    let sections =
        CategoryScore::build(sections_results, SECTIONS_SUBCATEGORY_WEIGHTS, weights.sections);
    let ats_essentials = CategoryScore::build(
        essentials_results,
        ESSENTIALS_SUBCATEGORY_WEIGHTS,
        weights.ats_essentials,
    );

    let overall = overall_score(
        content.score,
        sections.score,
        ats_essentials.score,
        tailoring.as_ref().map(|t| t.score),
        &weights,
    );

    let mut all_issues: Vec<Issue> = Vec::new();
    for category in [&content, &sections, &ats_essentials] {
        for subcategory in &category.subcategories {
            all_issues.extend(subcategory.issues.iter().cloned());
        }
    }
    if let Some(tailoring) = &tailoring {
        all_issues.extend(tailoring.issues.iter().cloned());
    }

    let issues = sort_issues(all_issues);
    let issue_count = count_issues(&issues);
    let summary = build_summary(
        &content,
        &sections,
        &ats_essentials,
        request.resume.skills.len(),
        &issues,
    );

    info!(
        overall_score = overall,
        issues = issue_count.total,
        tailored = tailoring.is_some(),
        "analysis complete"
    );

    AnalysisResult {
        overall_score: overall,
        content,
        sections,
        ats_essentials,
        tailoring,
        issues,
        issue_count,
        summary,
        analyzed_at: Utc::now(),
    }
}
