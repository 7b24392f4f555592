//! Live scorer — recomputes a restricted score on every invocation.
//!
//! Pure and synchronous: no model calls, no I/O, no shared state. The caller
//! (a debounced editor loop) simply discards superseded results, so there is
//! no cancellation machinery here.
//!
//! Category weights deliberately differ from the batch engine — spelling/
//! grammar and semantic tailoring are unavailable without the model, so the
//! remaining signals carry more weight. Live and batch scores are expected to
//! be directionally consistent, not numerically identical.

use serde::{Deserialize, Serialize};

use crate::analysis::aggregate::{count_issues, sort_issues};
use crate::analysis::content::{check_quantified_impact, check_repetition};
use crate::analysis::issue::{issue_id, Category, Issue, IssueCount, Severity};
use crate::analysis::scoring::{CategoryScore, SECTIONS_SUBCATEGORY_WEIGHTS};
use crate::analysis::sections::check_sections;
use crate::analysis::tailoring::combine_subscores;
use crate::live::keywords::{extract_keywords, ExtractedKeyword, MAX_HARD_KEYWORDS};
use crate::models::resume::ParsedResume;

/// Live category weights. Redistributed over content and sections when no
/// job description is supplied.
pub const LIVE_CONTENT_WEIGHT: f64 = 45.0;
pub const LIVE_SECTIONS_WEIGHT: f64 = 35.0;
pub const LIVE_TAILORING_WEIGHT: f64 = 20.0;

/// Subcategory weights for the live content category — quantified impact and
/// repetition only; no spelling/grammar without the model. The sections
/// category reuses the batch table and checks wholesale.
pub const LIVE_CONTENT_SUBCATEGORY_WEIGHTS: &[(&str, u32)] =
    &[("quantify_impact", 60), ("repetition", 40)];

/// Keyword-based tailoring signal computed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveTailoring {
    pub score: u32,
    pub keyword_match_score: u32,
    pub skills_alignment_score: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub issues: Vec<Issue>,
}

/// One live scoring pass. Structurally parallel to the batch result but
/// restricted to what is computable without network I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveResult {
    pub overall_score: u32,
    pub content: CategoryScore,
    pub sections: CategoryScore,
    pub tailoring: Option<LiveTailoring>,
    pub issues: Vec<Issue>,
    pub issue_count: IssueCount,
}

/// Scores the résumé with the network-free subset of checks. Unlike the
/// batch gate, a job description of any length is accepted here — preview
/// keyword extraction is cheap.
pub fn live_score(resume: &ParsedResume, job_description: Option<&str>) -> LiveResult {
    let body_text = resume.body_text();

    let content_results = vec![
        check_quantified_impact(resume),
        check_repetition(&body_text),
    ];
    let sections_results = check_sections(resume);

    let tailoring = job_description
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .and_then(|jd| compute_live_tailoring(resume, jd));

    let (content_weight, sections_weight) = if tailoring.is_some() {
        (LIVE_CONTENT_WEIGHT, LIVE_SECTIONS_WEIGHT)
    } else {
        // Same proportional redistribution rule as the batch engine: each
        // remaining category gets w + (w / 80) × 20, keeping the sum at 100.
        let base = LIVE_CONTENT_WEIGHT + LIVE_SECTIONS_WEIGHT;
        (
            LIVE_CONTENT_WEIGHT + (LIVE_CONTENT_WEIGHT / base) * LIVE_TAILORING_WEIGHT,
            LIVE_SECTIONS_WEIGHT + (LIVE_SECTIONS_WEIGHT / base) * LIVE_TAILORING_WEIGHT,
        )
    };

    let content =
        CategoryScore::build(content_results, LIVE_CONTENT_SUBCATEGORY_WEIGHTS, content_weight);
    let sections =
        CategoryScore::build(sections_results, SECTIONS_SUBCATEGORY_WEIGHTS, sections_weight);

    let mut weighted = f64::from(content.score) * content.weight
        + f64::from(sections.score) * sections.weight;
    let mut weight_sum = content.weight + sections.weight;
    if let Some(tailoring) = &tailoring {
        weighted += f64::from(tailoring.score) * LIVE_TAILORING_WEIGHT;
        weight_sum += LIVE_TAILORING_WEIGHT;
    }
    let overall_score = (weighted / weight_sum).round() as u32;

    let mut all_issues: Vec<Issue> = Vec::new();
    for category in [&content, &sections] {
        for subcategory in &category.subcategories {
            all_issues.extend(subcategory.issues.iter().cloned());
        }
    }
    if let Some(tailoring) = &tailoring {
        all_issues.extend(tailoring.issues.iter().cloned());
    }
    let issues = sort_issues(all_issues);
    let issue_count = count_issues(&issues);

    LiveResult {
        overall_score,
        content,
        sections,
        tailoring,
        issues,
        issue_count,
    }
}

/// Keyword-match and skills-alignment subscores from local extraction.
/// Returns `None` when the job description yields no usable keywords.
fn compute_live_tailoring(resume: &ParsedResume, job_description: &str) -> Option<LiveTailoring> {
    let keywords = extract_keywords(job_description, &resume.skills);
    if keywords.is_empty() {
        return None;
    }

    let resume_text = resume.body_text().to_lowercase();

    let (matched, missing): (Vec<&ExtractedKeyword>, Vec<&ExtractedKeyword>) = keywords
        .iter()
        .partition(|keyword| resume_text.contains(&keyword.term));

    let keyword_match_score =
        ((matched.len() as f64 / keywords.len() as f64) * 100.0).round() as u32;

    let skills_lower: Vec<String> = resume.skills.iter().map(|s| s.to_lowercase()).collect();
    let hard: Vec<&ExtractedKeyword> = keywords
        .iter()
        .filter(|k| k.is_hard_skill)
        .take(MAX_HARD_KEYWORDS)
        .collect();

    // Substring containment in either direction: "postgres" covers
    // "postgresql" and vice versa.
    let skills_alignment_score = if hard.is_empty() {
        keyword_match_score
    } else {
        let aligned = hard
            .iter()
            .filter(|keyword| {
                skills_lower.iter().any(|skill| {
                    skill.contains(&keyword.term) || keyword.term.contains(skill.as_str())
                })
            })
            .count();
        ((aligned as f64 / hard.len() as f64) * 100.0).round() as u32
    };

    let score = combine_subscores(keyword_match_score, skills_alignment_score);

    let missing_terms: Vec<String> = missing
        .iter()
        .filter(|k| k.is_hard_skill)
        .take(8)
        .map(|k| k.term.clone())
        .collect();

    let issues = if missing_terms.is_empty() {
        vec![]
    } else {
        vec![Issue {
            id: issue_id(Category::Tailoring, "missing_keywords", "missing_keywords"),
            category: Category::Tailoring,
            subcategory: "missing_keywords".to_string(),
            severity: Severity::Warning,
            title: "Job keywords missing from the résumé".to_string(),
            description: format!(
                "The job description mentions these terms the résumé does not: {}.",
                missing_terms.join(", ")
            ),
            recommendation: "Add the ones you genuinely have to your bullets or skills list."
                .to_string(),
            fixable: true,
            location: None,
            original_text: None,
        }]
    };

    Some(LiveTailoring {
        score,
        keyword_match_score,
        skills_alignment_score,
        matched_keywords: matched.iter().map(|k| k.term.clone()).collect(),
        missing_keywords: missing.iter().map(|k| k.term.clone()).collect(),
        issues,
    })
}
