//! Issue aggregation — merges every category's issues into one
//! severity-sorted list, counts them, and derives the short natural-language
//! summary shown at the top of a report.

use serde::{Deserialize, Serialize};

use crate::analysis::issue::{Issue, IssueCount, Severity};
use crate::analysis::scoring::CategoryScore;

/// Subcategories whose issues are cheap to act on; their recommendations
/// feed the "quick wins" list.
pub const QUICK_WIN_SUBCATEGORIES: &[&str] =
    &["repetition", "spelling_grammar", "dates", "headings"];

const MAX_SUMMARY_ITEMS: usize = 3;

/// Stable severity sort: critical first, then warning, then info. Ties keep
/// their insertion order, so issues inside one severity stay grouped by the
/// category that produced them.
pub fn sort_issues(mut issues: Vec<Issue>) -> Vec<Issue> {
    issues.sort_by_key(|issue| issue.severity.rank());
    issues
}

pub fn count_issues(issues: &[Issue]) -> IssueCount {
    let mut count = IssueCount::default();
    for issue in issues {
        match issue.severity {
            Severity::Critical => count.critical += 1,
            Severity::Warning => count.warning += 1,
            Severity::Info => count.info += 1,
        }
        count.total += 1;
    }
    count
}

/// Three-part natural-language summary. None of the lists is ever empty —
/// each falls back to a single default sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub strengths: Vec<String>,
    pub critical_issues: Vec<String>,
    pub quick_wins: Vec<String>,
}

/// Derives the summary from the scored categories and the sorted issue list.
pub fn build_summary(
    content: &CategoryScore,
    sections: &CategoryScore,
    essentials: &CategoryScore,
    skills_count: usize,
    sorted_issues: &[Issue],
) -> Summary {
    let mut strengths = Vec::new();

    let subscore = |category: &CategoryScore, key: &str| {
        category.subcategory(key).map(|s| s.score).unwrap_or(0)
    };

    if subscore(content, "parse_rate") >= 90 {
        strengths.push("The document parses cleanly in ATS systems.".to_string());
    }
    if subscore(sections, "experience") >= 90 {
        strengths.push("Work experience is thorough and well structured.".to_string());
    }
    if skills_count >= 10 {
        strengths.push("The skills section gives keyword filters plenty to match on.".to_string());
    }
    if subscore(essentials, "file_format") == 100 {
        strengths.push("The file format is fully ATS-compatible.".to_string());
    }
    if subscore(content, "quantify_impact") >= 80 {
        strengths.push("Achievements are backed by concrete numbers.".to_string());
    }

    let critical_issues: Vec<String> = sorted_issues
        .iter()
        .filter(|issue| issue.severity == Severity::Critical)
        .take(MAX_SUMMARY_ITEMS)
        .map(|issue| issue.title.clone())
        .collect();

    let quick_wins: Vec<String> = sorted_issues
        .iter()
        .filter(|issue| QUICK_WIN_SUBCATEGORIES.contains(&issue.subcategory.as_str()))
        .take(MAX_SUMMARY_ITEMS)
        .map(|issue| issue.recommendation.clone())
        .collect();

    Summary {
        strengths: non_empty_or(strengths, "The résumé has a solid foundation to build on."),
        critical_issues: non_empty_or(critical_issues, "No critical issues found."),
        quick_wins: non_empty_or(
            quick_wins,
            "Keep refining bullet wording for clarity and impact.",
        ),
    }
}

fn non_empty_or(list: Vec<String>, fallback: &str) -> Vec<String> {
    if list.is_empty() {
        vec![fallback.to_string()]
    } else {
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::issue::{issue_id, Category, SubcategoryResult};
    use crate::analysis::scoring::{
        CONTENT_SUBCATEGORY_WEIGHTS, CONTENT_WEIGHT, ESSENTIALS_SUBCATEGORY_WEIGHTS,
        ESSENTIALS_WEIGHT, SECTIONS_SUBCATEGORY_WEIGHTS, SECTIONS_WEIGHT,
    };

    fn make_issue(subcategory: &str, severity: Severity, title: &str) -> Issue {
        Issue {
            id: issue_id(Category::Content, subcategory, title),
            category: Category::Content,
            subcategory: subcategory.to_string(),
            severity,
            title: title.to_string(),
            description: String::new(),
            recommendation: format!("fix {title}"),
            fixable: true,
            location: None,
            original_text: None,
        }
    }

    fn category(subcategories: Vec<(&str, u32)>, weights: &[(&str, u32)], w: f64) -> CategoryScore {
        CategoryScore::build(
            subcategories
                .into_iter()
                .map(|(key, score)| SubcategoryResult::new(key, key, score, vec![], String::new()))
                .collect(),
            weights,
            w,
        )
    }

    #[test]
    fn test_sort_is_severity_nondecreasing() {
        let issues = vec![
            make_issue("a", Severity::Info, "i1"),
            make_issue("b", Severity::Critical, "c1"),
            make_issue("c", Severity::Warning, "w1"),
            make_issue("d", Severity::Critical, "c2"),
        ];
        let sorted = sort_issues(issues);
        let ranks: Vec<u8> = sorted.iter().map(|i| i.severity.rank()).collect();
        assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_sort_is_stable_within_severity() {
        let issues = vec![
            make_issue("a", Severity::Critical, "first"),
            make_issue("b", Severity::Critical, "second"),
        ];
        let sorted = sort_issues(issues);
        assert_eq!(sorted[0].title, "first");
        assert_eq!(sorted[1].title, "second");
    }

    #[test]
    fn test_count_issues() {
        let issues = vec![
            make_issue("a", Severity::Critical, "c"),
            make_issue("b", Severity::Warning, "w"),
            make_issue("c", Severity::Info, "i1"),
            make_issue("d", Severity::Info, "i2"),
        ];
        let count = count_issues(&issues);
        assert_eq!(count.critical, 1);
        assert_eq!(count.warning, 1);
        assert_eq!(count.info, 2);
        assert_eq!(count.total, 4);
    }

    #[test]
    fn test_summary_strengths_from_thresholds() {
        let content = category(
            vec![("parse_rate", 95), ("quantify_impact", 85)],
            CONTENT_SUBCATEGORY_WEIGHTS,
            CONTENT_WEIGHT,
        );
        let sections = category(
            vec![("experience", 100)],
            SECTIONS_SUBCATEGORY_WEIGHTS,
            SECTIONS_WEIGHT,
        );
        let essentials = category(
            vec![("file_format", 100)],
            ESSENTIALS_SUBCATEGORY_WEIGHTS,
            ESSENTIALS_WEIGHT,
        );

        let summary = build_summary(&content, &sections, &essentials, 12, &[]);
        assert_eq!(summary.strengths.len(), 5);
        assert_eq!(summary.critical_issues, vec!["No critical issues found."]);
    }

    #[test]
    fn test_summary_defaults_when_nothing_stands_out() {
        let content = category(vec![("parse_rate", 50)], CONTENT_SUBCATEGORY_WEIGHTS, 40.0);
        let sections = category(vec![("experience", 50)], SECTIONS_SUBCATEGORY_WEIGHTS, 20.0);
        let essentials = category(vec![("file_format", 70)], ESSENTIALS_SUBCATEGORY_WEIGHTS, 25.0);

        let summary = build_summary(&content, &sections, &essentials, 2, &[]);
        assert_eq!(
            summary.strengths,
            vec!["The résumé has a solid foundation to build on."]
        );
        assert_eq!(
            summary.quick_wins,
            vec!["Keep refining bullet wording for clarity and impact."]
        );
    }

    #[test]
    fn test_summary_critical_issues_capped_at_three() {
        let content = category(vec![], CONTENT_SUBCATEGORY_WEIGHTS, 40.0);
        let sections = category(vec![], SECTIONS_SUBCATEGORY_WEIGHTS, 20.0);
        let essentials = category(vec![], ESSENTIALS_SUBCATEGORY_WEIGHTS, 25.0);
        let issues = sort_issues(
            (0..5)
                .map(|i| make_issue("x", Severity::Critical, &format!("critical {i}")))
                .collect(),
        );

        let summary = build_summary(&content, &sections, &essentials, 0, &issues);
        assert_eq!(summary.critical_issues.len(), 3);
        assert_eq!(summary.critical_issues[0], "critical 0");
    }

    #[test]
    fn test_summary_quick_wins_from_allow_list_only() {
        let content = category(vec![], CONTENT_SUBCATEGORY_WEIGHTS, 40.0);
        let sections = category(vec![], SECTIONS_SUBCATEGORY_WEIGHTS, 20.0);
        let essentials = category(vec![], ESSENTIALS_SUBCATEGORY_WEIGHTS, 25.0);
        let issues = vec![
            make_issue("repetition", Severity::Info, "rep"),
            make_issue("contact", Severity::Critical, "contact"),
            make_issue("dates", Severity::Warning, "dates"),
        ];

        let summary = build_summary(&content, &sections, &essentials, 0, &issues);
        assert_eq!(summary.quick_wins, vec!["fix rep", "fix dates"]);
    }
}
