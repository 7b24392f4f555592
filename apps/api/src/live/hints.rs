//! Hint generation — compares two successive live results and emits at most
//! three ranked delta messages for the editor to surface.

use serde::{Deserialize, Serialize};

use crate::analysis::issue::{Category, Severity};
use crate::live::engine::LiveResult;

/// Overall-score change worth mentioning.
pub const OVERALL_DELTA_THRESHOLD: i64 = 3;
/// Per-category change worth mentioning.
pub const CATEGORY_DELTA_THRESHOLD: i64 = 5;
/// Hints emitted per comparison, highest priority first.
pub const MAX_HINTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    Improvement,
    Regression,
    NewIssue,
    ResolvedIssue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreHint {
    pub kind: HintKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,
}

/// Emits hints in fixed priority order: overall delta, per-category deltas,
/// one newly introduced critical issue, one resolved critical issue. With no
/// previous result there is nothing to compare against — the list is empty.
pub fn generate_hints(current: &LiveResult, previous: Option<&LiveResult>) -> Vec<ScoreHint> {
    let Some(previous) = previous else {
        return Vec::new();
    };

    let mut hints = Vec::new();

    let overall_delta = i64::from(current.overall_score) - i64::from(previous.overall_score);
    if overall_delta.abs() >= OVERALL_DELTA_THRESHOLD {
        hints.push(delta_hint(
            overall_delta,
            None,
            format!(
                "Overall score went {} {} points ({} → {}).",
                direction(overall_delta),
                overall_delta.abs(),
                previous.overall_score,
                current.overall_score
            ),
        ));
    }

    let category_deltas: [(Category, i64, &str); 3] = [
        (
            Category::Content,
            i64::from(current.content.score) - i64::from(previous.content.score),
            "Content",
        ),
        (
            Category::Sections,
            i64::from(current.sections.score) - i64::from(previous.sections.score),
            "Sections",
        ),
        (
            Category::Tailoring,
            match (&current.tailoring, &previous.tailoring) {
                (Some(now), Some(before)) => i64::from(now.score) - i64::from(before.score),
                _ => 0,
            },
            "Tailoring",
        ),
    ];

    for (category, delta, label) in category_deltas {
        if delta.abs() >= CATEGORY_DELTA_THRESHOLD {
            hints.push(delta_hint(
                delta,
                Some(category),
                format!(
                    "{label} score went {} {} points.",
                    direction(delta),
                    delta.abs()
                ),
            ));
        }
    }

    let previous_critical_ids: Vec<&str> = previous
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Critical)
        .map(|i| i.id.as_str())
        .collect();
    let current_critical_ids: Vec<&str> = current
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Critical)
        .map(|i| i.id.as_str())
        .collect();

    if let Some(new_issue) = current
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Critical)
        .find(|i| !previous_critical_ids.contains(&i.id.as_str()))
    {
        hints.push(ScoreHint {
            kind: HintKind::NewIssue,
            message: format!("New critical issue: {}.", new_issue.title),
            category: Some(new_issue.category),
            delta: None,
        });
    }

    if let Some(resolved) = previous
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Critical)
        .find(|i| !current_critical_ids.contains(&i.id.as_str()))
    {
        hints.push(ScoreHint {
            kind: HintKind::ResolvedIssue,
            message: format!("Resolved: {}.", resolved.title),
            category: Some(resolved.category),
            delta: None,
        });
    }

    hints.truncate(MAX_HINTS);
    hints
}

fn delta_hint(delta: i64, category: Option<Category>, message: String) -> ScoreHint {
    ScoreHint {
        kind: if delta > 0 {
            HintKind::Improvement
        } else {
            HintKind::Regression
        },
        message,
        category,
        delta: Some(delta),
    }
}

fn direction(delta: i64) -> &'static str {
    if delta > 0 {
        "up"
    } else {
        "down"
    }
}
