//! Shared lexicon — every fixed word list and pattern family the checkers use.
//!
//! These are frozen configuration data: imported by value, never mutated at
//! runtime. Keeping them in one module means the batch and live engines can
//! never drift apart on what counts as a stop word or a date format.

use lazy_static::lazy_static;
use regex::Regex;

/// Common words excluded from repetition and keyword analysis.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "have", "has", "had",
    "are", "was", "were", "been", "being", "will", "would", "could", "should",
    "their", "there", "which", "while", "where", "when", "what", "your", "you",
    "our", "who", "whom", "about", "into", "onto", "over", "under", "than",
    "then", "them", "they", "these", "those", "such", "some", "also", "both",
    "each", "more", "most", "other", "only", "very", "through", "during",
    "before", "after", "between", "against", "within", "without", "across",
    "per", "via", "including", "etc", "team", "work", "working", "worked",
    "role", "company", "years", "year", "using", "used", "use", "new",
];

/// Words a résumé can repeat more than four times before the repetition
/// check flags them as overused.
pub const REPETITION_THRESHOLD: usize = 4;

/// Penalty per overused word in the repetition score.
/// Calibration constant carried over from the reference scoring model.
pub const REPETITION_PENALTY: u32 = 15;

/// Overhead factor applied to the parse-rate ratio. Structured output always
/// loses whitespace, punctuation and layout characters relative to the raw
/// document, so the ratio is scaled up before capping at 100.
/// Calibration constant carried over from the reference scoring model.
pub const PARSE_RATE_OVERHEAD: f64 = 1.3;

lazy_static! {
    /// Patterns that mark an experience bullet as quantified.
    pub static ref QUANTIFY_PATTERNS: Vec<Regex> = vec![
        // Percentages: "40%", "12.5%"
        Regex::new(r"\d+(?:\.\d+)?\s?%").unwrap(),
        // Currency: "$50,000", "€200k", "£3M"
        Regex::new(r"[$€£]\s?\d").unwrap(),
        // Multipliers: "3x", "2.5x"
        Regex::new(r"\b\d+(?:\.\d+)?x\b").unwrap(),
        // Open-ended counts: "10+", "100+"
        Regex::new(r"\b\d+\+").unwrap(),
        // Grouped thousands: "50,000", "1,200,000"
        Regex::new(r"\b\d{1,3}(?:,\d{3})+\b").unwrap(),
        // Impact verbs with or without an attached number
        Regex::new(
            r"(?i)\b(increased|decreased|reduced|improved|grew|saved|generated|boosted|accelerated|cut|doubled|tripled|scaled)\b"
        )
        .unwrap(),
    ];

    /// Terms that read as technical/hard skills in a job description.
    pub static ref TECH_TERM_RE: Regex = Regex::new(
        r"(?ix)\b(
            java|python|rust|golang|go|typescript|javascript|ruby|php|scala|kotlin|swift|
            sql|nosql|postgres|postgresql|mysql|mongodb|redis|kafka|elasticsearch|
            aws|azure|gcp|cloud|docker|kubernetes|terraform|ansible|linux|unix|
            react|angular|vue|node|nodejs|django|flask|spring|rails|
            api|rest|graphql|grpc|microservices|serverless|
            git|jenkins|gitlab|github|devops|agile|scrum|
            ml|ai|nlp|pytorch|tensorflow|spark|hadoop|etl|
            html|css|sass|webpack|vite|
            oauth|saml|tls|encryption|security
        )\b"
    )
    .unwrap();

    // ── Heading families ────────────────────────────────────────────────
    // Standard ATS-recognizable section headers, one family per section.

    pub static ref EXPERIENCE_HEADING_RE: Regex = Regex::new(
        r"(?im)^\s*(work\s+experience|professional\s+experience|experience|employment(\s+history)?|work\s+history)\s*:?\s*$"
    )
    .unwrap();

    pub static ref EDUCATION_HEADING_RE: Regex = Regex::new(
        r"(?im)^\s*(education|academic\s+background|academics|qualifications)\s*:?\s*$"
    )
    .unwrap();

    pub static ref SKILLS_HEADING_RE: Regex = Regex::new(
        r"(?im)^\s*(skills|technical\s+skills|core\s+competencies|technologies)\s*:?\s*$"
    )
    .unwrap();

    pub static ref SUMMARY_HEADING_RE: Regex = Regex::new(
        r"(?im)^\s*(summary|professional\s+summary|profile|objective|about\s+me)\s*:?\s*$"
    )
    .unwrap();

    pub static ref CERTIFICATIONS_HEADING_RE: Regex = Regex::new(
        r"(?im)^\s*(certifications?|licenses?(\s+and\s+certifications?)?)\s*:?\s*$"
    )
    .unwrap();

    // ── Table-layout indicators ─────────────────────────────────────────

    /// Runs of two or more tab characters on a line.
    pub static ref TAB_RUN_RE: Regex = Regex::new(r"\t{2,}").unwrap();

    /// Wide whitespace gaps between words, typical of column layouts.
    pub static ref WIDE_GAP_RE: Regex = Regex::new(r"\S {4,}\S").unwrap();

    /// Pipe-delimited rows: "| cell | cell |".
    pub static ref PIPE_ROW_RE: Regex = Regex::new(r"\|[^|\n]*\|[^|\n]*\|").unwrap();

    // ── Date format families ────────────────────────────────────────────
    // Five recognized families. Year-only is the trivial one and never
    // counts toward the mixed-format penalty.

    /// ISO style: "2020-01".
    pub static ref ISO_DATE_RE: Regex =
        Regex::new(r"\b(?:19|20)\d{2}-(?:0[1-9]|1[0-2])\b").unwrap();

    /// Full month name: "January 2021".
    pub static ref FULL_MONTH_DATE_RE: Regex = Regex::new(
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december)\s+(?:19|20)\d{2}\b"
    )
    .unwrap();

    /// Abbreviated month: "Jan 2021", "Sept 2020". "May" is claimed by the
    /// full-name family so the two never double count the same token.
    pub static ref ABBREV_MONTH_DATE_RE: Regex = Regex::new(
        r"(?i)\b(jan|feb|mar|apr|jun|jul|aug|sept?|oct|nov|dec)\.?\s+(?:19|20)\d{2}\b"
    )
    .unwrap();

    /// Numeric month/year: "03/2021", "3/21".
    pub static ref NUMERIC_DATE_RE: Regex =
        Regex::new(r"\b(?:0?[1-9]|1[0-2])/(?:(?:19|20)\d{2}|\d{2})\b").unwrap();

    /// Bare year: "2019". Trivial family.
    pub static ref YEAR_ONLY_RE: Regex = Regex::new(r"\b(?:19|20)\d{2}\b").unwrap();
}

/// Decorative glyphs that ATS parsers routinely mangle. Plain hyphen and
/// round-bullet markers are fine and deliberately absent here.
pub const DECORATIVE_GLYPHS: &[char] = &[
    '★', '☆', '✦', '✧', '■', '▪', '◆', '♦', '➤', '▶', '❖', '♥', '☎', '✉',
];

/// Placeholder strings the extractor emits where an embedded object used to be.
pub const GRAPHIC_PLACEHOLDERS: &[&str] = &["[image]", "[graphic]", "[logo]", "[photo]", "[chart]"];

/// Non-standard "creative" headers that ATS section detection cannot map.
pub const CREATIVE_HEADINGS: &[&str] = &[
    "my journey",
    "my story",
    "what i've done",
    "where i've been",
    "what i bring",
    "adventures",
    "superpowers",
    "toolbox",
];

/// Typographic non-ASCII characters that are harmless in extracted text and
/// excluded from the font/encoding suspicion count.
pub const BENIGN_NON_ASCII: &[char] = &[
    '—', '–', '‘', '’', '“', '”', '…', '•', '·', 'é', 'è', 'ü', 'ö', 'ä', 'ñ', 'ç', 'á', 'í', 'ó',
    'ú',
];
