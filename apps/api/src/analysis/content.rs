//! Content checker — parse rate, quantified impact, repetition, and the
//! LLM-backed spelling/grammar subcheck.
//!
//! Spelling/grammar is the only subcheck allowed to degrade silently: it is
//! non-critical and rate-limited upstream, so a failed model call falls back
//! to a neutral result via [`or_neutral`] instead of failing the category.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::issue::{issue_id, Category, Issue, Severity, SubcategoryResult};
use crate::analysis::lexicon::{
    PARSE_RATE_OVERHEAD, QUANTIFY_PATTERNS, REPETITION_PENALTY, REPETITION_THRESHOLD, STOP_WORDS,
};
use crate::analysis::prompts::{SPELLING_PROMPT_TEMPLATE, SPELLING_SYSTEM};
use crate::analysis::CheckError;
use crate::llm_client::{complete_as, JsonModel};
use crate::models::resume::ParsedResume;

/// Neutral score used when the spelling/grammar model call fails.
const SPELLING_NEUTRAL_SCORE: u32 = 80;

/// Runs all four content subchecks. Parse rate, quantified impact and
/// repetition are pure; spelling/grammar awaits the model and degrades to
/// neutral on failure.
pub async fn check_content(
    model: &dyn JsonModel,
    resume: &ParsedResume,
    raw_text: &str,
) -> Vec<SubcategoryResult> {
    let spelling = or_neutral(check_spelling_grammar(model, raw_text).await);
    vec![
        check_parse_rate(resume, raw_text),
        check_quantified_impact(resume),
        check_repetition(raw_text),
        spelling,
    ]
}

/// Estimates how much of the raw document survived into the structured
/// résumé: extracted characters over normalized raw characters, scaled by
/// the overhead factor and capped at 100.
pub fn check_parse_rate(resume: &ParsedResume, raw_text: &str) -> SubcategoryResult {
    let normalized_len: usize = raw_text.split_whitespace().map(str::len).sum();

    if normalized_len == 0 {
        let issue = Issue {
            id: issue_id(Category::Content, "parse_rate", "empty_document"),
            category: Category::Content,
            subcategory: "parse_rate".to_string(),
            severity: Severity::Critical,
            title: "Document text could not be read".to_string(),
            description: "No text content was extracted from the document.".to_string(),
            recommendation: "Re-export the résumé as a text-based PDF or DOCX file.".to_string(),
            fixable: false,
            location: None,
            original_text: None,
        };
        return SubcategoryResult::new(
            "Parse Rate",
            "parse_rate",
            0,
            vec![issue],
            "No readable text found in the document.".to_string(),
        );
    }

    let ratio = resume.extracted_char_count() as f64 / normalized_len as f64;
    let score = ((ratio * 100.0 * PARSE_RATE_OVERHEAD).round() as u32).min(100);

    let mut issues = Vec::new();
    if score < 60 {
        issues.push(Issue {
            id: issue_id(Category::Content, "parse_rate", "low_parse_rate"),
            category: Category::Content,
            subcategory: "parse_rate".to_string(),
            severity: Severity::Critical,
            title: "Large parts of the résumé were not recognized".to_string(),
            description: format!(
                "Only about {score}% of the document content made it into the structured résumé. \
                 ATS systems will miss the rest."
            ),
            recommendation:
                "Use a single-column layout with standard headings so parsers can follow the structure."
                    .to_string(),
            fixable: false,
            location: None,
            original_text: None,
        });
    } else if score < 80 {
        issues.push(Issue {
            id: issue_id(Category::Content, "parse_rate", "partial_parse"),
            category: Category::Content,
            subcategory: "parse_rate".to_string(),
            severity: Severity::Warning,
            title: "Some résumé content was not recognized".to_string(),
            description: format!(
                "About {score}% of the document content was recognized; some sections may be \
                 invisible to ATS systems."
            ),
            recommendation: "Simplify formatting and avoid text inside tables or graphics."
                .to_string(),
            fixable: false,
            location: None,
            original_text: None,
        });
    }

    SubcategoryResult::new(
        "Parse Rate",
        "parse_rate",
        score,
        issues,
        format!("{score}% of document content recognized by the parser."),
    )
}

/// Scores the share of experience bullets that carry a measurable outcome.
pub fn check_quantified_impact(resume: &ParsedResume) -> SubcategoryResult {
    let bullets = resume.all_bullets();

    if bullets.is_empty() {
        let issue = Issue {
            id: issue_id(Category::Content, "quantify_impact", "no_bullets"),
            category: Category::Content,
            subcategory: "quantify_impact".to_string(),
            severity: Severity::Critical,
            title: "No achievement bullet points to evaluate".to_string(),
            description: "The work experience entries contain no bullet points.".to_string(),
            recommendation: "Add 3-5 bullet points per role describing measurable outcomes."
                .to_string(),
            fixable: true,
            location: None,
            original_text: None,
        };
        return SubcategoryResult::new(
            "Quantifying Impact",
            "quantify_impact",
            0,
            vec![issue],
            "No experience bullets found.".to_string(),
        );
    }

    let matched = bullets
        .iter()
        .filter(|bullet| QUANTIFY_PATTERNS.iter().any(|re| re.is_match(bullet)))
        .count();
    let score = ((matched as f64 / bullets.len() as f64) * 100.0).round() as u32;

    let first_unquantified = bullets
        .iter()
        .find(|bullet| !QUANTIFY_PATTERNS.iter().any(|re| re.is_match(bullet)))
        .map(|b| b.to_string());

    let mut issues = Vec::new();
    if score < 50 {
        issues.push(Issue {
            id: issue_id(Category::Content, "quantify_impact", "unquantified"),
            category: Category::Content,
            subcategory: "quantify_impact".to_string(),
            severity: Severity::Critical,
            title: "Most bullet points lack measurable impact".to_string(),
            description: format!(
                "Only {matched} of {} bullet points contain numbers, percentages, or impact verbs.",
                bullets.len()
            ),
            recommendation:
                "Rewrite bullets around outcomes: percentages, counts, money saved, or time cut."
                    .to_string(),
            fixable: true,
            location: None,
            original_text: first_unquantified,
        });
    } else if score < 70 {
        issues.push(Issue {
            id: issue_id(Category::Content, "quantify_impact", "partially_quantified"),
            category: Category::Content,
            subcategory: "quantify_impact".to_string(),
            severity: Severity::Warning,
            title: "Several bullet points lack measurable impact".to_string(),
            description: format!(
                "{matched} of {} bullet points are quantified; the rest read as duties, not results.",
                bullets.len()
            ),
            recommendation: "Add a concrete metric to each remaining bullet.".to_string(),
            fixable: true,
            location: None,
            original_text: first_unquantified,
        });
    }

    SubcategoryResult::new(
        "Quantifying Impact",
        "quantify_impact",
        score,
        issues,
        format!("{matched} of {} bullets carry quantified impact.", bullets.len()),
    )
}

/// Flags words used more than the repetition threshold across the résumé.
pub fn check_repetition(text: &str) -> SubcategoryResult {
    let mut frequencies: HashMap<String, usize> = HashMap::new();

    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= 4)
    {
        let word = token.to_lowercase();
        if STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        *frequencies.entry(word).or_insert(0) += 1;
    }

    let mut overused: Vec<(String, usize)> = frequencies
        .into_iter()
        .filter(|(_, count)| *count > REPETITION_THRESHOLD)
        .collect();
    // Deterministic order: most frequent first, then alphabetical.
    overused.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let overused_count = overused.len() as u32;
    let score = 100u32.saturating_sub(REPETITION_PENALTY * overused_count);

    let word_list = overused
        .iter()
        .map(|(word, count)| format!("\"{word}\" ({count}×)"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut issues = Vec::new();
    if overused_count > 3 {
        issues.push(Issue {
            id: issue_id(Category::Content, "repetition", "overused_words"),
            category: Category::Content,
            subcategory: "repetition".to_string(),
            severity: Severity::Warning,
            title: "Heavy word repetition".to_string(),
            description: format!("These words appear more than four times: {word_list}."),
            recommendation: "Vary your verbs — each repeated word dilutes the ones around it."
                .to_string(),
            fixable: true,
            location: None,
            original_text: None,
        });
    } else if overused_count > 0 {
        issues.push(Issue {
            id: issue_id(Category::Content, "repetition", "some_repetition"),
            category: Category::Content,
            subcategory: "repetition".to_string(),
            severity: Severity::Info,
            title: "A few overused words".to_string(),
            description: format!("These words appear more than four times: {word_list}."),
            recommendation: "Swap some occurrences for synonyms.".to_string(),
            fixable: true,
            location: None,
            original_text: None,
        });
    }

    SubcategoryResult::new(
        "Repetition",
        "repetition",
        score,
        issues,
        if overused_count == 0 {
            "No overused words detected.".to_string()
        } else {
            format!("{overused_count} overused word(s): {word_list}.")
        },
    )
}

// ── Spelling / grammar (LLM-backed) ─────────────────────────────────────────

/// Validated shape of the spelling/grammar model response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingReport {
    pub overall_quality: u32,
    #[serde(default)]
    pub issues: Vec<SpellingFinding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingFinding {
    pub text: String,
    pub issue_type: String,
    pub suggestion: String,
    #[serde(default)]
    pub context: Option<String>,
}

/// Asks the model for a spelling/grammar report and maps it to a result.
/// Malformed model JSON surfaces as `CheckError` for the caller to degrade.
pub async fn check_spelling_grammar(
    model: &dyn JsonModel,
    raw_text: &str,
) -> Result<SubcategoryResult, CheckError> {
    let prompt = SPELLING_PROMPT_TEMPLATE.replace("{resume_text}", raw_text);
    let report: SpellingReport = complete_as(model, &prompt, SPELLING_SYSTEM).await?;
    Ok(spelling_result_from_report(&report))
}

/// Pure mapping from a validated model report to a subcategory result.
pub fn spelling_result_from_report(report: &SpellingReport) -> SubcategoryResult {
    let score = report.overall_quality.min(100);

    let issues: Vec<Issue> = report
        .issues
        .iter()
        .take(10)
        .enumerate()
        .map(|(index, finding)| {
            let severity = if finding.issue_type == "spelling" {
                Severity::Warning
            } else {
                Severity::Info
            };
            Issue {
                id: issue_id(Category::Content, "spelling_grammar", &format!("error_{index}")),
                category: Category::Content,
                subcategory: "spelling_grammar".to_string(),
                severity,
                title: format!("{} error: \"{}\"", finding.issue_type, finding.text),
                description: finding
                    .context
                    .clone()
                    .unwrap_or_else(|| format!("\"{}\" appears to be incorrect.", finding.text)),
                recommendation: format!("Replace with \"{}\".", finding.suggestion),
                fixable: true,
                location: None,
                original_text: Some(finding.text.clone()),
            }
        })
        .collect();

    let details = if issues.is_empty() {
        "No spelling or grammar problems found.".to_string()
    } else {
        format!("{} spelling/grammar issue(s) found.", issues.len())
    };

    SubcategoryResult::new("Spelling & Grammar", "spelling_grammar", score, issues, details)
}

/// Neutral default used when the model call fails.
pub fn neutral_spelling_result() -> SubcategoryResult {
    SubcategoryResult::new(
        "Spelling & Grammar",
        "spelling_grammar",
        SPELLING_NEUTRAL_SCORE,
        vec![],
        "Spelling and grammar could not be checked; neutral default applied.".to_string(),
    )
}

/// The degrade-to-default combinator: makes the degradation policy visible at
/// the call site instead of hiding it in a catch block.
pub fn or_neutral(result: Result<SubcategoryResult, CheckError>) -> SubcategoryResult {
    match result {
        Ok(result) => result,
        Err(e) => {
            warn!("spelling/grammar check degraded to neutral: {e}");
            neutral_spelling_result()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::issue::Status;
    use crate::models::resume::{ContactInfo, ExperienceEntry};

    fn resume_with_bullets(bullets: Vec<&str>) -> ParsedResume {
        ParsedResume {
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                title: "Engineer".to_string(),
                bullets: bullets.into_iter().map(String::from).collect(),
                ..ExperienceEntry::default()
            }],
            ..ParsedResume::default()
        }
    }

    #[test]
    fn test_parse_rate_empty_raw_text_is_critical() {
        let result = check_parse_rate(&ParsedResume::default(), "   ");
        assert_eq!(result.score, 0);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Critical);
    }

    #[test]
    fn test_parse_rate_full_extraction_caps_at_100() {
        let resume = ParsedResume {
            contact: ContactInfo {
                name: Some("Ada Lovelace".to_string()),
                ..ContactInfo::default()
            },
            summary: Some("Engineer and mathematician".to_string()),
            ..ParsedResume::default()
        };
        // Extracted length exceeds normalized raw length; capped at 100.
        let result = check_parse_rate(&resume, "Ada Lovelace Engineer");
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_parse_rate_low_extraction_flags_critical() {
        let resume = ParsedResume {
            contact: ContactInfo {
                name: Some("Ada".to_string()),
                ..ContactInfo::default()
            },
            ..ParsedResume::default()
        };
        let raw: String = "word ".repeat(50);
        let result = check_parse_rate(&resume, &raw);
        assert!(result.score < 60);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.issues[0].severity, Severity::Critical);
    }

    #[test]
    fn test_quantified_impact_all_quantified_scores_100() {
        let resume = resume_with_bullets(vec![
            "Reduced latency by 40%",
            "Saved $2,000 per month",
            "Scaled ingestion to 10+ regions",
        ]);
        let result = check_quantified_impact(&resume);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_quantified_impact_below_half_is_critical() {
        let resume = resume_with_bullets(vec![
            "Responsible for the backend",
            "Maintained the deployment pipeline",
            "Reduced build times by 30%",
        ]);
        let result = check_quantified_impact(&resume);
        assert_eq!(result.score, 33);
        assert_eq!(result.issues[0].severity, Severity::Critical);
        assert!(result.issues[0].original_text.is_some());
    }

    #[test]
    fn test_quantified_impact_no_bullets_is_critical_zero() {
        let result = check_quantified_impact(&ParsedResume::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.issues[0].severity, Severity::Critical);
    }

    #[test]
    fn test_repetition_clean_text_scores_100() {
        let result = check_repetition("Built deployed measured improved shipped");
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_repetition_overused_word_penalized_15() {
        // "managed" appears 5 times (> 4), one overused word.
        let text = "managed managed managed managed managed systems";
        let result = check_repetition(text);
        assert_eq!(result.score, 85);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Info);
        assert!(result.issues[0].description.contains("managed"));
    }

    #[test]
    fn test_repetition_many_overused_words_is_warning() {
        let mut text = String::new();
        for word in ["alpha", "bravo", "charlie", "delta"] {
            for _ in 0..5 {
                text.push_str(word);
                text.push(' ');
            }
        }
        let result = check_repetition(&text);
        assert_eq!(result.score, 40);
        assert_eq!(result.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_repetition_ignores_stop_words_and_short_tokens() {
        let result = check_repetition("the the the the the and and and and and go go go go go");
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_spelling_report_maps_findings_to_issues() {
        let report = SpellingReport {
            overall_quality: 70,
            issues: vec![SpellingFinding {
                text: "managment".to_string(),
                issue_type: "spelling".to_string(),
                suggestion: "management".to_string(),
                context: None,
            }],
        };
        let result = spelling_result_from_report(&report);
        assert_eq!(result.score, 70);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Warning);
        assert_eq!(result.issues[0].original_text.as_deref(), Some("managment"));
    }

    #[test]
    fn test_neutral_spelling_result_is_80_with_no_issues() {
        let result = neutral_spelling_result();
        assert_eq!(result.score, 80);
        assert!(result.issues.is_empty());
        assert_eq!(result.status, Status::Pass);
    }

    #[test]
    fn test_or_neutral_degrades_on_error() {
        let degraded = or_neutral(Err(CheckError::Unavailable("model unavailable".to_string())));
        assert_eq!(degraded.score, 80);
    }
}
