//! ATS-essentials checker — file/text signals only: declared file type,
//! heading conventions, table layout, decorative graphics, encoding damage,
//! and date-format consistency. No binary inspection.

use regex::Regex;

use crate::analysis::issue::{issue_id, Category, Issue, Severity, SubcategoryResult};
use crate::analysis::lexicon::{
    ABBREV_MONTH_DATE_RE, BENIGN_NON_ASCII, CERTIFICATIONS_HEADING_RE, CREATIVE_HEADINGS,
    DECORATIVE_GLYPHS, EDUCATION_HEADING_RE, EXPERIENCE_HEADING_RE, FULL_MONTH_DATE_RE,
    GRAPHIC_PLACEHOLDERS, ISO_DATE_RE, NUMERIC_DATE_RE, PIPE_ROW_RE, SKILLS_HEADING_RE,
    SUMMARY_HEADING_RE, TAB_RUN_RE, WIDE_GAP_RE, YEAR_ONLY_RE,
};
use crate::models::resume::FileType;

/// Runs all six essentials subchecks in a fixed order.
pub fn check_essentials(raw_text: &str, file_type: FileType) -> Vec<SubcategoryResult> {
    vec![
        check_file_format(file_type),
        check_headings(raw_text),
        check_table_layout(raw_text),
        check_graphics(raw_text),
        check_fonts(raw_text),
        check_date_consistency(raw_text),
    ]
}

/// Scores the declared file type by how reliably ATS systems ingest it.
pub fn check_file_format(file_type: FileType) -> SubcategoryResult {
    let (score, issue) = match file_type {
        FileType::Pdf => (100, None),
        FileType::Docx | FileType::Doc => (90, None),
        FileType::Txt => (
            70,
            Some(Issue {
                id: issue_id(Category::AtsEssentials, "file_format", "plain_text"),
                category: Category::AtsEssentials,
                subcategory: "file_format".to_string(),
                severity: Severity::Warning,
                title: "Plain-text file loses formatting".to_string(),
                description: "A .txt résumé parses, but all section styling and emphasis is lost."
                    .to_string(),
                recommendation: "Export the résumé as a PDF with selectable text.".to_string(),
                fixable: false,
                location: None,
                original_text: None,
            }),
        ),
        FileType::Other => (
            0,
            Some(Issue {
                id: issue_id(Category::AtsEssentials, "file_format", "unsupported_format"),
                category: Category::AtsEssentials,
                subcategory: "file_format".to_string(),
                severity: Severity::Critical,
                title: "Unsupported file format".to_string(),
                description: "Most ATS systems cannot read this file type at all.".to_string(),
                recommendation: "Submit the résumé as PDF or DOCX.".to_string(),
                fixable: false,
                location: None,
                original_text: None,
            }),
        ),
    };

    SubcategoryResult::new(
        "File Format",
        "file_format",
        score,
        issue.into_iter().collect(),
        format!("Declared file type: {file_type:?}."),
    )
}

/// Checks that the three core sections use standard, ATS-recognizable
/// headers, and penalizes known "creative" headers that section detection
/// cannot map.
pub fn check_headings(raw_text: &str) -> SubcategoryResult {
    let core: [(&str, &Regex); 3] = [
        ("experience", &*EXPERIENCE_HEADING_RE),
        ("education", &*EDUCATION_HEADING_RE),
        ("skills", &*SKILLS_HEADING_RE),
    ];

    let missing: Vec<&str> = core
        .iter()
        .filter(|(_, re)| !re.is_match(raw_text))
        .map(|(name, _)| *name)
        .collect();

    // Summary/certifications headers are optional; found count feeds the
    // details string only, never the score.
    let extras_found = [&*SUMMARY_HEADING_RE, &*CERTIFICATIONS_HEADING_RE]
        .iter()
        .filter(|re| re.is_match(raw_text))
        .count();

    let lower = raw_text.to_lowercase();
    let creative: Vec<&str> = CREATIVE_HEADINGS
        .iter()
        .filter(|h| lower.contains(*h))
        .copied()
        .collect();

    let score = 100u32
        .saturating_sub(25 * missing.len() as u32)
        .saturating_sub(15 * creative.len() as u32);

    let mut issues = Vec::new();
    if !missing.is_empty() {
        issues.push(Issue {
            id: issue_id(Category::AtsEssentials, "headings", "missing_standard_headings"),
            category: Category::AtsEssentials,
            subcategory: "headings".to_string(),
            severity: Severity::Warning,
            title: "Standard section headings not found".to_string(),
            description: format!(
                "No recognizable heading found for: {}.",
                missing.join(", ")
            ),
            recommendation:
                "Use conventional headers like \"Work Experience\", \"Education\", and \"Skills\"."
                    .to_string(),
            fixable: false,
            location: None,
            original_text: None,
        });
    }
    if !creative.is_empty() {
        issues.push(Issue {
            id: issue_id(Category::AtsEssentials, "headings", "creative_headings"),
            category: Category::AtsEssentials,
            subcategory: "headings".to_string(),
            severity: Severity::Warning,
            title: "Creative section headings confuse ATS parsing".to_string(),
            description: format!("Found non-standard headers: {}.", creative.join(", ")),
            recommendation: "Rename creative headers to their conventional equivalents."
                .to_string(),
            fixable: false,
            location: None,
            original_text: Some(creative.join(", ")),
        });
    }

    SubcategoryResult::new(
        "Section Headings",
        "headings",
        score,
        issues,
        if missing.is_empty() && creative.is_empty() {
            format!("All core sections use standard headings; {extras_found} optional heading(s) found.")
        } else {
            format!(
                "{} core heading(s) missing, {} creative header(s) found.",
                missing.len(),
                creative.len()
            )
        },
    )
}

/// Counts layout indicators that suggest tabular formatting, which ATS text
/// extraction scrambles.
pub fn check_table_layout(raw_text: &str) -> SubcategoryResult {
    let indicators = TAB_RUN_RE.find_iter(raw_text).count()
        + WIDE_GAP_RE.find_iter(raw_text).count()
        + PIPE_ROW_RE.find_iter(raw_text).count();

    let score = match indicators {
        0 => 100,
        1..=2 => 80,
        3..=5 => 60,
        _ => 30,
    };

    let mut issues = Vec::new();
    if indicators > 5 {
        issues.push(table_issue(
            Severity::Critical,
            "Heavy table formatting detected",
            indicators,
        ));
    } else if indicators > 0 {
        issues.push(table_issue(
            Severity::Warning,
            "Possible table formatting detected",
            indicators,
        ));
    }

    SubcategoryResult::new(
        "Table Layout",
        "tables",
        score,
        issues,
        format!("{indicators} table-layout indicator(s) found."),
    )
}

fn table_issue(severity: Severity, title: &str, indicators: usize) -> Issue {
    Issue {
        id: issue_id(Category::AtsEssentials, "tables", "table_layout"),
        category: Category::AtsEssentials,
        subcategory: "tables".to_string(),
        severity,
        title: title.to_string(),
        description: format!(
            "{indicators} line pattern(s) look like columns or tables; extraction will reorder their contents."
        ),
        recommendation: "Replace tables and multi-column blocks with plain single-column lists."
            .to_string(),
        fixable: false,
        location: None,
        original_text: None,
    }
}

/// Detects decorative glyphs and image placeholders left behind by the
/// extractor.
pub fn check_graphics(raw_text: &str) -> SubcategoryResult {
    let lower = raw_text.to_lowercase();
    let glyph_hits = raw_text
        .chars()
        .filter(|c| DECORATIVE_GLYPHS.contains(c))
        .count();
    let placeholder_hits: usize = GRAPHIC_PLACEHOLDERS
        .iter()
        .map(|p| lower.matches(p).count())
        .sum();
    let total = glyph_hits + placeholder_hits;

    let score = match total {
        0 => 100,
        1..=2 => 80,
        3..=5 => 60,
        _ => 30,
    };

    let mut issues = Vec::new();
    if total > 5 {
        issues.push(graphics_issue(Severity::Critical, total));
    } else if total > 0 {
        issues.push(graphics_issue(Severity::Warning, total));
    }

    SubcategoryResult::new(
        "Graphics & Symbols",
        "graphics",
        score,
        issues,
        format!("{total} decorative symbol(s) or graphic placeholder(s) found."),
    )
}

fn graphics_issue(severity: Severity, total: usize) -> Issue {
    Issue {
        id: issue_id(Category::AtsEssentials, "graphics", "decorative_elements"),
        category: Category::AtsEssentials,
        subcategory: "graphics".to_string(),
        severity,
        title: "Decorative symbols or graphics detected".to_string(),
        description: format!(
            "{total} decorative element(s) found; ATS parsers drop or mangle them."
        ),
        recommendation: "Remove icons, symbols, and embedded graphics; keep plain text."
            .to_string(),
        fixable: false,
        location: None,
        original_text: None,
    }
}

/// Looks for encoding damage: replacement characters from a failed font
/// embedding, plus a high count of unexpected non-ASCII symbols.
pub fn check_fonts(raw_text: &str) -> SubcategoryResult {
    let replacement_count = raw_text.chars().filter(|c| *c == '\u{FFFD}').count();
    let suspicious_count = raw_text
        .chars()
        .filter(|c| {
            !c.is_ascii()
                && *c != '\u{FFFD}'
                && !BENIGN_NON_ASCII.contains(c)
                && !DECORATIVE_GLYPHS.contains(c)
        })
        .count();

    let (score, issue) = if replacement_count >= 3 {
        (
            30,
            Some(font_issue(
                Severity::Critical,
                "Text extraction lost characters",
                format!(
                    "{replacement_count} unreadable character(s) found; the original font did not embed properly."
                ),
            )),
        )
    } else if replacement_count > 0 {
        (
            60,
            Some(font_issue(
                Severity::Warning,
                "Some characters could not be read",
                format!("{replacement_count} unreadable character(s) found."),
            )),
        )
    } else if suspicious_count > 10 {
        (
            85,
            Some(font_issue(
                Severity::Info,
                "Unusual characters detected",
                format!(
                    "{suspicious_count} non-standard character(s) found; some ATS systems normalize them badly."
                ),
            )),
        )
    } else {
        (100, None)
    };

    SubcategoryResult::new(
        "Fonts & Encoding",
        "fonts",
        score,
        issue.into_iter().collect(),
        format!(
            "{replacement_count} replacement character(s), {suspicious_count} unusual character(s)."
        ),
    )
}

fn font_issue(severity: Severity, title: &str, description: String) -> Issue {
    Issue {
        id: issue_id(Category::AtsEssentials, "fonts", "encoding_issues"),
        category: Category::AtsEssentials,
        subcategory: "fonts".to_string(),
        severity,
        title: title.to_string(),
        description,
        recommendation: "Use a standard font and re-export; avoid symbol fonts and ligatures."
            .to_string(),
        fixable: false,
        location: None,
        original_text: None,
    }
}

/// Counts how many non-trivial date-format families the document mixes.
/// Year-only dates are trivial and never penalized.
pub fn check_date_consistency(raw_text: &str) -> SubcategoryResult {
    let families: [(&str, bool); 4] = [
        ("ISO (2020-01)", ISO_DATE_RE.is_match(raw_text)),
        ("full month (January 2021)", FULL_MONTH_DATE_RE.is_match(raw_text)),
        ("abbreviated month (Jan 2021)", ABBREV_MONTH_DATE_RE.is_match(raw_text)),
        ("numeric (03/2021)", NUMERIC_DATE_RE.is_match(raw_text)),
    ];

    let found: Vec<&str> = families
        .iter()
        .filter(|(_, hit)| *hit)
        .map(|(name, _)| *name)
        .collect();

    let (score, issue) = if found.len() <= 1 {
        (100, None)
    } else {
        let score = 100u32.saturating_sub(20 * (found.len() as u32 - 1));
        (
            score,
            Some(Issue {
                id: issue_id(Category::AtsEssentials, "dates", "inconsistent_formats"),
                category: Category::AtsEssentials,
                subcategory: "dates".to_string(),
                severity: Severity::Warning,
                title: "Inconsistent date formats".to_string(),
                description: format!("The résumé mixes {} date formats: {}.", found.len(), found.join(", ")),
                recommendation: "Pick one format — \"January 2021\" reads best — and use it everywhere.".to_string(),
                fixable: true,
                location: None,
                original_text: None,
            }),
        )
    };

    SubcategoryResult::new(
        "Date Formatting",
        "dates",
        score,
        issue.into_iter().collect(),
        if found.is_empty() {
            if YEAR_ONLY_RE.is_match(raw_text) {
                "Only year-level dates found.".to_string()
            } else {
                "No dates found.".to_string()
            }
        } else {
            format!("Date formats in use: {}.", found.join(", "))
        },
    )
}
