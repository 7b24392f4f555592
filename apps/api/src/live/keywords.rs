//! Local keyword extraction — the live engine's stand-in for the LLM-backed
//! tailoring check. Fast, deterministic, no network.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{STOP_WORDS, TECH_TERM_RE};

/// Keywords considered from a job description, by descending frequency.
pub const MAX_KEYWORDS: usize = 50;

/// Hard-skill keywords compared against the declared skills list.
pub const MAX_HARD_KEYWORDS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedKeyword {
    pub term: String,
    pub frequency: u32,
    pub is_hard_skill: bool,
}

/// Tokenizes the job description into unigrams (≥ 3 chars, non-stop-word)
/// and adjacent-pair bigrams, classifies each as a hard or soft skill, and
/// returns the top keywords by frequency.
///
/// A term counts as a hard skill when it matches the technical-term pattern
/// or already appears in the résumé's declared skills.
pub fn extract_keywords(job_description: &str, resume_skills: &[String]) -> Vec<ExtractedKeyword> {
    let tokens: Vec<String> = job_description
        .split(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect();

    let keep = |token: &str| token.len() >= 3 && !STOP_WORDS.contains(&token);

    let mut frequencies: HashMap<String, u32> = HashMap::new();

    for token in tokens.iter().filter(|t| keep(t.as_str())) {
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }

    for pair in tokens.windows(2) {
        if keep(&pair[0]) && keep(&pair[1]) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            *frequencies.entry(bigram).or_insert(0) += 1;
        }
    }

    let skills_lower: Vec<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();

    // Whole-term match only: "postgres experience" is a phrase, not a skill.
    let is_tech = |term: &str| {
        TECH_TERM_RE
            .find(term)
            .is_some_and(|m| m.start() == 0 && m.end() == term.len())
    };

    let mut keywords: Vec<ExtractedKeyword> = frequencies
        .into_iter()
        .map(|(term, frequency)| {
            let in_skills = skills_lower.iter().any(|skill| skill == &term);
            ExtractedKeyword {
                is_hard_skill: is_tech(&term) || in_skills,
                term,
                frequency,
            }
        })
        .collect();

    // Deterministic ranking: frequency first, then alphabetical.
    keywords.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.term.cmp(&b.term)));
    keywords.truncate(MAX_KEYWORDS);
    keywords
}
