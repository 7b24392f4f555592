//! Scoring engine — one weighted-mean primitive, fixed weight tables, and the
//! tailoring weight-redistribution rule.

use serde::{Deserialize, Serialize};

use crate::analysis::issue::SubcategoryResult;

/// Per-subcategory weights inside the content category.
pub const CONTENT_SUBCATEGORY_WEIGHTS: &[(&str, u32)] = &[
    ("parse_rate", 30),
    ("quantify_impact", 30),
    ("repetition", 20),
    ("spelling_grammar", 20),
];

/// Per-subcategory weights inside the sections category.
pub const SECTIONS_SUBCATEGORY_WEIGHTS: &[(&str, u32)] = &[
    ("contact", 25),
    ("experience", 30),
    ("education", 15),
    ("skills", 15),
    ("summary", 15),
];

/// Per-subcategory weights inside the ATS-essentials category.
pub const ESSENTIALS_SUBCATEGORY_WEIGHTS: &[(&str, u32)] = &[
    ("file_format", 20),
    ("headings", 20),
    ("tables", 15),
    ("graphics", 15),
    ("fonts", 15),
    ("dates", 15),
];

/// Batch category weights over the overall score.
pub const CONTENT_WEIGHT: f64 = 40.0;
pub const SECTIONS_WEIGHT: f64 = 20.0;
pub const ESSENTIALS_WEIGHT: f64 = 25.0;
pub const TAILORING_WEIGHT: f64 = 15.0;

/// The single scoring primitive: round(Σ score×weight / Σ weight) over the
/// subcategories actually present. A subcategory missing from `results` (or
/// absent from the table) simply contributes nothing to either sum, so
/// optional checks never skew the denominator.
pub fn weighted_score(results: &[SubcategoryResult], weights: &[(&str, u32)]) -> u32 {
    let mut weighted_sum = 0.0_f64;
    let mut total_weight = 0.0_f64;

    for result in results {
        let Some((_, weight)) = weights.iter().find(|(key, _)| *key == result.key) else {
            continue;
        };
        weighted_sum += f64::from(result.score) * f64::from(*weight);
        total_weight += f64::from(*weight);
    }

    if total_weight == 0.0 {
        return 0;
    }
    (weighted_sum / total_weight).round() as u32
}

/// A scored category: the weight-normalized mean of its subcategories plus
/// the category's weight toward the overall score. Named subcategory access
/// goes through [`CategoryScore::subcategory`] so the named view and the
/// array can never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u32,
    pub weight: f64,
    pub subcategories: Vec<SubcategoryResult>,
}

impl CategoryScore {
    /// Builds the composed category value in one step.
    pub fn build(
        subcategories: Vec<SubcategoryResult>,
        subcategory_weights: &[(&str, u32)],
        category_weight: f64,
    ) -> Self {
        let score = weighted_score(&subcategories, subcategory_weights);
        Self {
            score,
            weight: category_weight,
            subcategories,
        }
    }

    pub fn subcategory(&self, key: &str) -> Option<&SubcategoryResult> {
        self.subcategories.iter().find(|s| s.key == key)
    }
}

/// Category weights for one analysis run, after any redistribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub content: f64,
    pub sections: f64,
    pub ats_essentials: f64,
    pub tailoring: Option<f64>,
}

impl CategoryWeights {
    pub fn sum(&self) -> f64 {
        self.content + self.sections + self.ats_essentials + self.tailoring.unwrap_or(0.0)
    }
}

/// Resolves the batch category weights. With no tailoring result, its 15
/// points are redistributed across the other three in proportion to their
/// own weights: each gets `w + (w / 85) × 15`, so the remaining weights
/// still sum to exactly 100.
pub fn category_weights(has_tailoring: bool) -> CategoryWeights {
    if has_tailoring {
        return CategoryWeights {
            content: CONTENT_WEIGHT,
            sections: SECTIONS_WEIGHT,
            ats_essentials: ESSENTIALS_WEIGHT,
            tailoring: Some(TAILORING_WEIGHT),
        };
    }

    let base_sum = CONTENT_WEIGHT + SECTIONS_WEIGHT + ESSENTIALS_WEIGHT;
    let redistribute = |w: f64| w + (w / base_sum) * TAILORING_WEIGHT;

    CategoryWeights {
        content: redistribute(CONTENT_WEIGHT),
        sections: redistribute(SECTIONS_WEIGHT),
        ats_essentials: redistribute(ESSENTIALS_WEIGHT),
        tailoring: None,
    }
}

/// Combines category scores into the overall 0–100 score using weights that
/// sum to 100 with or without tailoring.
pub fn overall_score(
    content: u32,
    sections: u32,
    ats_essentials: u32,
    tailoring: Option<u32>,
    weights: &CategoryWeights,
) -> u32 {
    let mut sum = f64::from(content) * weights.content
        + f64::from(sections) * weights.sections
        + f64::from(ats_essentials) * weights.ats_essentials;

    if let (Some(score), Some(weight)) = (tailoring, weights.tailoring) {
        sum += f64::from(score) * weight;
    }

    (sum / weights.sum()).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(key: &str, score: u32) -> SubcategoryResult {
        SubcategoryResult::new(key, key, score, vec![], String::new())
    }

    #[test]
    fn test_weighted_score_is_plain_weighted_mean() {
        let results = vec![make_result("a", 100), make_result("b", 50)];
        let weights = [("a", 30), ("b", 10)];
        // (100*30 + 50*10) / 40 = 87.5 → 88
        assert_eq!(weighted_score(&results, &weights), 88);
    }

    #[test]
    fn test_weighted_score_bounded() {
        for scores in [[0, 0], [100, 100], [0, 100]] {
            let results = vec![make_result("a", scores[0]), make_result("b", scores[1])];
            let score = weighted_score(&results, &[("a", 30), ("b", 70)]);
            assert!(score <= 100);
        }
    }

    #[test]
    fn test_missing_subcategory_renormalizes_denominator() {
        // Only "a" present: score must equal a's score, not be dragged down.
        let results = vec![make_result("a", 90)];
        let weights = [("a", 30), ("b", 70)];
        assert_eq!(weighted_score(&results, &weights), 90);
    }

    #[test]
    fn test_omitting_zero_weight_entry_never_changes_result() {
        let with_zero = vec![make_result("a", 80), make_result("z", 10)];
        let without = vec![make_result("a", 80)];
        let weights = [("a", 40), ("z", 0)];
        assert_eq!(
            weighted_score(&with_zero, &weights),
            weighted_score(&without, &weights)
        );
    }

    #[test]
    fn test_weighted_score_empty_results_is_zero() {
        assert_eq!(weighted_score(&[], CONTENT_SUBCATEGORY_WEIGHTS), 0);
    }

    #[test]
    fn test_category_weights_with_tailoring_sum_to_100() {
        let weights = category_weights(true);
        assert!((weights.sum() - 100.0).abs() < 1e-9);
        assert_eq!(weights.tailoring, Some(15.0));
    }

    #[test]
    fn test_redistributed_weights_sum_to_exactly_100() {
        let weights = category_weights(false);
        assert!(weights.tailoring.is_none());
        assert!((weights.sum() - 100.0).abs() < 1e-9);
        // Proportional redistribution, not equal split.
        assert!((weights.content - (40.0 + 40.0 / 85.0 * 15.0)).abs() < 1e-9);
        assert!((weights.sections - (20.0 + 20.0 / 85.0 * 15.0)).abs() < 1e-9);
        assert!((weights.ats_essentials - (25.0 + 25.0 / 85.0 * 15.0)).abs() < 1e-9);
    }

    #[test]
    fn test_overall_score_without_tailoring() {
        let weights = category_weights(false);
        // Uniform category scores must produce that same score overall.
        assert_eq!(overall_score(70, 70, 70, None, &weights), 70);
    }

    #[test]
    fn test_overall_score_with_tailoring() {
        let weights = category_weights(true);
        let score = overall_score(80, 60, 70, Some(40), &weights);
        // (80*40 + 60*20 + 70*25 + 40*15) / 100 = 67.5 → 68
        assert_eq!(score, 68);
    }

    #[test]
    fn test_category_score_build_and_named_access() {
        let category = CategoryScore::build(
            vec![make_result("parse_rate", 90), make_result("repetition", 70)],
            CONTENT_SUBCATEGORY_WEIGHTS,
            CONTENT_WEIGHT,
        );
        assert_eq!(category.subcategory("parse_rate").unwrap().score, 90);
        assert!(category.subcategory("missing").is_none());
        // (90*30 + 70*20) / 50 = 82
        assert_eq!(category.score, 82);
    }
}
