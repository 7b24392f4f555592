//! Issue & result model — shared value types for every checker.

use serde::{Deserialize, Serialize};

/// Issue severity. Sort rank: critical 0, warning 1, info 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }
}

/// Top-level scoring category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Content,
    Sections,
    AtsEssentials,
    Tailoring,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Content => "content",
            Category::Sections => "sections",
            Category::AtsEssentials => "ats_essentials",
            Category::Tailoring => "tailoring",
        }
    }
}

/// Pass/warn/fail banding for a subcategory score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pass,
    Warning,
    Fail,
}

/// The single status rule. Batch and live paths both call this — there is no
/// second copy of the thresholds anywhere.
pub fn status_for_score(score: u32) -> Status {
    if score >= 80 {
        Status::Pass
    } else if score >= 60 {
        Status::Warning
    } else {
        Status::Fail
    }
}

/// Deterministic issue id: `category:subcategory:kind`. Two analyses of the
/// same résumé produce the same ids, which is what lets the live hint
/// generator match issues across successive results.
pub fn issue_id(category: Category, subcategory: &str, kind: &str) -> String {
    format!("{}:{}:{}", category.as_str(), subcategory, kind)
}

/// A single flagged problem, carrying everything the UI and the fix tooling
/// need to present and act on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub category: Category,
    pub subcategory: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub fixable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

/// One named, independently scored check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryResult {
    pub name: String,
    pub key: String,
    pub score: u32,
    pub status: Status,
    pub issues: Vec<Issue>,
    pub details: String,
}

impl SubcategoryResult {
    /// Builds a result with the score clamped to 0–100 and the status derived
    /// from the single status rule.
    pub fn new(
        name: &str,
        key: &str,
        score: u32,
        issues: Vec<Issue>,
        details: String,
    ) -> Self {
        let score = score.min(100);
        Self {
            name: name.to_string(),
            key: key.to_string(),
            score,
            status: status_for_score(score),
            issues,
            details,
        }
    }
}

/// Per-severity issue counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCount {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bands_are_total_and_monotonic() {
        for score in 0u32..=100 {
            let status = status_for_score(score);
            match score {
                0..=59 => assert_eq!(status, Status::Fail, "score {score}"),
                60..=79 => assert_eq!(status, Status::Warning, "score {score}"),
                _ => assert_eq!(status, Status::Pass, "score {score}"),
            }
        }
    }

    #[test]
    fn test_status_boundary_values() {
        assert_eq!(status_for_score(79), Status::Warning);
        assert_eq!(status_for_score(80), Status::Pass);
        assert_eq!(status_for_score(59), Status::Fail);
        assert_eq!(status_for_score(60), Status::Warning);
    }

    #[test]
    fn test_severity_rank_ordering() {
        assert!(Severity::Critical.rank() < Severity::Warning.rank());
        assert!(Severity::Warning.rank() < Severity::Info.rank());
    }

    #[test]
    fn test_issue_id_is_deterministic() {
        let a = issue_id(Category::Content, "repetition", "overused_words");
        let b = issue_id(Category::Content, "repetition", "overused_words");
        assert_eq!(a, b);
        assert_eq!(a, "content:repetition:overused_words");
    }

    #[test]
    fn test_subcategory_result_clamps_score() {
        let result = SubcategoryResult::new("Test", "test", 240, vec![], String::new());
        assert_eq!(result.score, 100);
        assert_eq!(result.status, Status::Pass);
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&Category::AtsEssentials).unwrap(),
            "\"ats_essentials\""
        );
    }
}
