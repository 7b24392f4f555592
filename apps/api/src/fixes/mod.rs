//! Fix strategy mapper — classifies every issue subcategory into one of
//! three remediation strategies and synthesizes the instruction the auto-fix
//! tooling forwards to the résumé editor.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::issue::Issue;
use crate::analysis::tailoring::TailoringAnalysis;

/// Input widget type for `user_input_required` fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Email,
    Tel,
    Url,
    Text,
}

/// How a flagged issue can be remediated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FixStrategy {
    /// A rewrite instruction can be synthesized and applied automatically.
    AutoFix,
    /// The fix needs a fact only the candidate knows (contact fields, new
    /// history) — resolve to a typed input prompt.
    UserInputRequired { input: InputKind },
    /// Formatting-level problems that live outside the text itself; nothing
    /// to rewrite, so the command stays empty.
    GuidanceOnly,
}

/// The actionable output of a fix lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixCommand {
    pub strategy: FixStrategy,
    pub instruction: String,
    pub keywords: Vec<String>,
}

lazy_static! {
    /// Pulls a trailing comma list out of an issue description, e.g.
    /// "... never mentions: kubernetes, terraform."
    static ref COMMA_LIST_RE: Regex = Regex::new(r":\s*([^:]+?)\.?\s*$").unwrap();
}

/// Static lookup from issue subcategory (plus, for contact, the specific
/// field) to a remediation strategy. Total: unknown subcategories fall back
/// to guidance.
pub fn strategy_for(issue: &Issue) -> FixStrategy {
    match issue.subcategory.as_str() {
        "quantify_impact" | "repetition" | "spelling_grammar" | "summary" | "dates"
        | "missing_keywords" | "missing_skills" => FixStrategy::AutoFix,
        "contact" => FixStrategy::UserInputRequired {
            input: contact_input_kind(issue),
        },
        "experience" | "skills" => FixStrategy::UserInputRequired {
            input: InputKind::Text,
        },
        // Formatting-level essentials plus education completeness: guidance only.
        "file_format" | "tables" | "graphics" | "fonts" | "headings" | "education"
        | "parse_rate" => FixStrategy::GuidanceOnly,
        _ => FixStrategy::GuidanceOnly,
    }
}

fn contact_input_kind(issue: &Issue) -> InputKind {
    if issue.id.ends_with("missing_email") {
        InputKind::Email
    } else if issue.id.ends_with("missing_phone") {
        InputKind::Tel
    } else if issue.id.ends_with("missing_linkedin") {
        InputKind::Url
    } else {
        InputKind::Text
    }
}

/// Resolves the full fix command for an issue. Missing-keyword and
/// missing-skill commands take their word lists from the tailoring analysis
/// when available, else from the comma list in the issue's own description.
pub fn build_fix_command(issue: &Issue, tailoring: Option<&TailoringAnalysis>) -> FixCommand {
    let strategy = strategy_for(issue);

    match strategy {
        FixStrategy::GuidanceOnly => FixCommand {
            strategy,
            instruction: String::new(),
            keywords: Vec::new(),
        },
        FixStrategy::UserInputRequired { input } => FixCommand {
            strategy,
            instruction: input_prompt(issue, input),
            keywords: Vec::new(),
        },
        FixStrategy::AutoFix => {
            let (instruction, keywords) = auto_fix_instruction(issue, tailoring);
            FixCommand {
                strategy,
                instruction,
                keywords,
            }
        }
    }
}

fn input_prompt(issue: &Issue, input: InputKind) -> String {
    match input {
        InputKind::Email => "Enter the email address to show on the résumé.".to_string(),
        InputKind::Tel => "Enter the phone number to show on the résumé.".to_string(),
        InputKind::Url => "Enter the profile URL to show on the résumé.".to_string(),
        InputKind::Text => format!("Provide the missing information: {}.", issue.title),
    }
}

fn auto_fix_instruction(
    issue: &Issue,
    tailoring: Option<&TailoringAnalysis>,
) -> (String, Vec<String>) {
    match issue.subcategory.as_str() {
        "quantify_impact" => (
            "Add quantified metrics — percentages, counts, money, or time saved — to experience \
             bullets that lack them, without inventing numbers."
                .to_string(),
            Vec::new(),
        ),
        "repetition" => (
            format!(
                "Replace repeated words with varied verbs. {}",
                issue.description
            ),
            Vec::new(),
        ),
        "spelling_grammar" => (
            format!("Correct this error: {}", issue.recommendation),
            Vec::new(),
        ),
        "summary" => (
            "Rewrite the professional summary to 30-80 words covering role, experience level, \
             and strongest skills."
                .to_string(),
            Vec::new(),
        ),
        "dates" => (
            "Rewrite every date in one consistent format, preferably \"January 2021\".".to_string(),
            Vec::new(),
        ),
        "missing_keywords" => {
            let keywords = tailoring
                .map(|t| t.missing_hard_skills.clone())
                .filter(|list| !list.is_empty())
                .unwrap_or_else(|| extract_comma_list(&issue.description));
            (
                format!(
                    "Work these keywords into relevant bullets and the skills list where truthful: {}.",
                    keywords.join(", ")
                ),
                keywords,
            )
        }
        "missing_skills" => {
            let keywords = tailoring
                .map(|t| t.missing_soft_skills.clone())
                .filter(|list| !list.is_empty())
                .unwrap_or_else(|| extract_comma_list(&issue.description));
            (
                format!(
                    "Demonstrate these skills through concrete examples in the bullets: {}.",
                    keywords.join(", ")
                ),
                keywords,
            )
        }
        _ => (issue.recommendation.clone(), Vec::new()),
    }
}

/// Fallback keyword source: the trailing comma list in a description.
fn extract_comma_list(description: &str) -> Vec<String> {
    let Some(captures) = COMMA_LIST_RE.captures(description) else {
        return Vec::new();
    };
    captures[1]
        .split(',')
        .map(|part| part.trim().trim_end_matches('.').to_string())
        .filter(|part| !part.is_empty())
        .collect()
}
