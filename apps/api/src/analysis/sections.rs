//! Sections checker — structural presence and completeness of the five core
//! résumé sections. Pure and synchronous; the live engine calls these same
//! functions directly so the two paths cannot disagree.

use crate::analysis::issue::{issue_id, Category, Issue, Severity, SubcategoryResult};
use crate::models::resume::ParsedResume;

/// Runs all five section subchecks in a fixed order.
pub fn check_sections(resume: &ParsedResume) -> Vec<SubcategoryResult> {
    vec![
        check_contact(resume),
        check_experience(resume),
        check_education(resume),
        check_skills(resume),
        check_summary(resume),
    ]
}

/// Weighted presence of the contact fields: name 30, email 35, phone 25,
/// location 10. LinkedIn is advisory only and carries no weight.
pub fn check_contact(resume: &ParsedResume) -> SubcategoryResult {
    let contact = &resume.contact;
    let mut score = 0u32;
    let mut issues = Vec::new();

    let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.trim().is_empty());

    if present(&contact.name) {
        score += 30;
    } else {
        issues.push(contact_issue(
            "missing_name",
            Severity::Critical,
            "Name is missing",
            "No candidate name was found in the résumé.",
            "Put your full name on the first line of the résumé.",
        ));
    }

    if present(&contact.email) {
        score += 35;
    } else {
        issues.push(contact_issue(
            "missing_email",
            Severity::Critical,
            "Email address is missing",
            "Recruiters cannot contact you without an email address.",
            "Add a professional email address near the top of the résumé.",
        ));
    }

    if present(&contact.phone) {
        score += 25;
    } else {
        issues.push(contact_issue(
            "missing_phone",
            Severity::Warning,
            "Phone number is missing",
            "A phone number is expected in the contact block.",
            "Add a phone number with country code.",
        ));
    }

    if present(&contact.location) {
        score += 10;
    } else {
        issues.push(contact_issue(
            "missing_location",
            Severity::Info,
            "Location is missing",
            "Many ATS filters match on city or region.",
            "Add your city and country (street address not needed).",
        ));
    }

    if !present(&contact.linkedin) {
        issues.push(contact_issue(
            "missing_linkedin",
            Severity::Info,
            "LinkedIn profile is missing",
            "A LinkedIn URL is a common recruiter expectation.",
            "Add your LinkedIn profile URL to the contact block.",
        ));
    }

    SubcategoryResult::new(
        "Contact Information",
        "contact",
        score,
        issues,
        format!("Contact block completeness: {score}/100."),
    )
}

fn contact_issue(
    kind: &str,
    severity: Severity,
    title: &str,
    description: &str,
    recommendation: &str,
) -> Issue {
    Issue {
        id: issue_id(Category::Sections, "contact", kind),
        category: Category::Sections,
        subcategory: "contact".to_string(),
        severity,
        title: title.to_string(),
        description: description.to_string(),
        recommendation: recommendation.to_string(),
        fixable: true,
        location: Some("contact".to_string()),
        original_text: None,
    }
}

/// Entry-count tier plus bullet-density tier. Zero entries is the single
/// hardest failure in the whole model: score 0 with exactly one critical
/// issue.
pub fn check_experience(resume: &ParsedResume) -> SubcategoryResult {
    let entries = &resume.experience;

    if entries.is_empty() {
        let issue = Issue {
            id: issue_id(Category::Sections, "experience", "missing_experience"),
            category: Category::Sections,
            subcategory: "experience".to_string(),
            severity: Severity::Critical,
            title: "No work experience listed".to_string(),
            description: "The résumé contains no work experience entries.".to_string(),
            recommendation:
                "Add your work history with company, title, dates, and achievement bullets."
                    .to_string(),
            fixable: true,
            location: Some("experience".to_string()),
            original_text: None,
        };
        return SubcategoryResult::new(
            "Work Experience",
            "experience",
            0,
            vec![issue],
            "No work experience entries found.".to_string(),
        );
    }

    let entry_points = match entries.len() {
        n if n >= 3 => 40,
        2 => 30,
        _ => 20,
    };

    let bullet_count: usize = entries.iter().map(|e| e.bullets.len()).sum();
    let avg_bullets = bullet_count as f64 / entries.len() as f64;

    let bullet_points = if bullet_count == 0 {
        0
    } else if avg_bullets >= 3.0 {
        30 + 30
    } else if avg_bullets >= 2.0 {
        30 + 20
    } else {
        30 + 10
    };

    let mut issues = Vec::new();
    if bullet_count == 0 {
        issues.push(Issue {
            id: issue_id(Category::Sections, "experience", "no_bullets"),
            category: Category::Sections,
            subcategory: "experience".to_string(),
            severity: Severity::Warning,
            title: "Experience entries have no bullet points".to_string(),
            description: "Roles are listed without any achievement bullets.".to_string(),
            recommendation: "Add 3-5 bullets per role describing what you accomplished."
                .to_string(),
            fixable: true,
            location: Some("experience".to_string()),
            original_text: None,
        });
    } else if avg_bullets < 2.0 {
        issues.push(Issue {
            id: issue_id(Category::Sections, "experience", "sparse_bullets"),
            category: Category::Sections,
            subcategory: "experience".to_string(),
            severity: Severity::Info,
            title: "Experience bullets are sparse".to_string(),
            description: format!(
                "Roles average {avg_bullets:.1} bullets each; recruiters expect at least 3."
            ),
            recommendation: "Expand each role to 3-5 achievement bullets.".to_string(),
            fixable: true,
            location: Some("experience".to_string()),
            original_text: None,
        });
    }

    let score = entry_points + bullet_points;
    SubcategoryResult::new(
        "Work Experience",
        "experience",
        score,
        issues,
        format!(
            "{} experience entries, {bullet_count} bullets ({avg_bullets:.1} per role).",
            entries.len()
        ),
    )
}

/// 50 when absent (education is not always required), otherwise 70 plus up
/// to 30 scaled by the fraction of entries naming both institution and a
/// degree or field.
pub fn check_education(resume: &ParsedResume) -> SubcategoryResult {
    let entries = &resume.education;

    if entries.is_empty() {
        let issue = Issue {
            id: issue_id(Category::Sections, "education", "missing_education"),
            category: Category::Sections,
            subcategory: "education".to_string(),
            severity: Severity::Info,
            title: "No education section".to_string(),
            description: "The résumé has no education entries. Fine for some roles, expected for most.".to_string(),
            recommendation: "Add your highest degree or relevant training.".to_string(),
            fixable: true,
            location: Some("education".to_string()),
            original_text: None,
        };
        return SubcategoryResult::new(
            "Education",
            "education",
            50,
            vec![issue],
            "No education entries found.".to_string(),
        );
    }

    let complete = entries
        .iter()
        .filter(|e| {
            e.institution.as_deref().is_some_and(|v| !v.trim().is_empty())
                && (e.degree.as_deref().is_some_and(|v| !v.trim().is_empty())
                    || e.field.as_deref().is_some_and(|v| !v.trim().is_empty()))
        })
        .count();
    let fraction = complete as f64 / entries.len() as f64;
    let score = 70 + (30.0 * fraction).round() as u32;

    let mut issues = Vec::new();
    if complete < entries.len() {
        issues.push(Issue {
            id: issue_id(Category::Sections, "education", "incomplete_entries"),
            category: Category::Sections,
            subcategory: "education".to_string(),
            severity: Severity::Info,
            title: "Education entries are incomplete".to_string(),
            description: format!(
                "{} of {} education entries are missing an institution or degree/field.",
                entries.len() - complete,
                entries.len()
            ),
            recommendation: "Name the institution and degree (or field of study) for each entry."
                .to_string(),
            fixable: true,
            location: Some("education".to_string()),
            original_text: None,
        });
    }

    SubcategoryResult::new(
        "Education",
        "education",
        score,
        issues,
        format!("{complete} of {} education entries are complete.", entries.len()),
    )
}

/// Tiered by declared skill count.
pub fn check_skills(resume: &ParsedResume) -> SubcategoryResult {
    let count = resume.skills.len();

    let score = match count {
        0 => 0,
        n if n >= 10 => 100,
        n if n >= 7 => 85,
        n if n >= 5 => 70,
        n if n >= 3 => 50,
        _ => 30,
    };

    let mut issues = Vec::new();
    if count < 5 {
        issues.push(Issue {
            id: issue_id(Category::Sections, "skills", "too_few_skills"),
            category: Category::Sections,
            subcategory: "skills".to_string(),
            severity: Severity::Warning,
            title: "Skills section is thin".to_string(),
            description: format!("Only {count} skills are listed; ATS keyword filters need more to match on."),
            recommendation: "List 8-12 concrete skills: languages, tools, platforms, methods."
                .to_string(),
            fixable: true,
            location: Some("skills".to_string()),
            original_text: None,
        });
    } else if count < 8 {
        issues.push(Issue {
            id: issue_id(Category::Sections, "skills", "few_skills"),
            category: Category::Sections,
            subcategory: "skills".to_string(),
            severity: Severity::Info,
            title: "Skills section could be broader".to_string(),
            description: format!("{count} skills listed; 10 or more gives keyword filters the best surface."),
            recommendation: "Add a few more specific tools or technologies you know well."
                .to_string(),
            fixable: true,
            location: Some("skills".to_string()),
            original_text: None,
        });
    }

    SubcategoryResult::new(
        "Skills",
        "skills",
        score,
        issues,
        format!("{count} skills declared."),
    )
}

/// Word-count banding for the professional summary. The ideal band is
/// 30-80 words.
pub fn check_summary(resume: &ParsedResume) -> SubcategoryResult {
    let Some(summary) = resume.summary.as_deref().filter(|s| !s.trim().is_empty()) else {
        let issue = Issue {
            id: issue_id(Category::Sections, "summary", "missing_summary"),
            category: Category::Sections,
            subcategory: "summary".to_string(),
            severity: Severity::Warning,
            title: "No professional summary".to_string(),
            description: "The résumé has no summary; it is the first thing both ATS keyword scans and recruiters read.".to_string(),
            recommendation: "Add a 30-80 word summary stating role, experience, and strongest skills.".to_string(),
            fixable: true,
            location: Some("summary".to_string()),
            original_text: None,
        };
        return SubcategoryResult::new(
            "Summary",
            "summary",
            50,
            vec![issue],
            "No summary found.".to_string(),
        );
    };

    let words = summary.split_whitespace().count();

    let (score, issue) = if (30..=80).contains(&words) {
        (100, None)
    } else if (20..=100).contains(&words) {
        (85, None)
    } else if words > 100 {
        (
            70,
            Some(Issue {
                id: issue_id(Category::Sections, "summary", "summary_too_long"),
                category: Category::Sections,
                subcategory: "summary".to_string(),
                severity: Severity::Info,
                title: "Summary is too long".to_string(),
                description: format!("The summary runs {words} words; over 100 reads as a cover letter."),
                recommendation: "Tighten the summary to 30-80 words.".to_string(),
                fixable: true,
                location: Some("summary".to_string()),
                original_text: Some(summary.to_string()),
            }),
        )
    } else {
        (
            60,
            Some(Issue {
                id: issue_id(Category::Sections, "summary", "summary_too_short"),
                category: Category::Sections,
                subcategory: "summary".to_string(),
                severity: Severity::Info,
                title: "Summary is too short".to_string(),
                description: format!("The summary is only {words} words; too little for keyword matching."),
                recommendation: "Expand the summary to 30-80 words.".to_string(),
                fixable: true,
                location: Some("summary".to_string()),
                original_text: Some(summary.to_string()),
            }),
        )
    };

    SubcategoryResult::new(
        "Summary",
        "summary",
        score,
        issue.into_iter().collect(),
        format!("Summary length: {words} words."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::issue::Status;
    use crate::models::resume::{ContactInfo, EducationEntry, ExperienceEntry};

    fn full_contact() -> ContactInfo {
        ContactInfo {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: Some("+44 20 1234 5678".to_string()),
            location: Some("London, UK".to_string()),
            linkedin: Some("linkedin.com/in/ada".to_string()),
        }
    }

    fn experience_entry(bullets: usize) -> ExperienceEntry {
        ExperienceEntry {
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            bullets: (0..bullets).map(|i| format!("Did thing {i}")).collect(),
            ..ExperienceEntry::default()
        }
    }

    #[test]
    fn test_contact_full_scores_100() {
        let resume = ParsedResume {
            contact: full_contact(),
            ..ParsedResume::default()
        };
        let result = check_contact(&resume);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_contact_missing_email_is_critical() {
        let mut contact = full_contact();
        contact.email = None;
        let resume = ParsedResume {
            contact,
            ..ParsedResume::default()
        };
        let result = check_contact(&resume);
        assert_eq!(result.score, 65);
        assert!(result
            .issues
            .iter()
            .any(|i| i.severity == Severity::Critical && i.id.ends_with("missing_email")));
    }

    #[test]
    fn test_contact_missing_linkedin_is_info_only() {
        let mut contact = full_contact();
        contact.linkedin = None;
        let resume = ParsedResume {
            contact,
            ..ParsedResume::default()
        };
        let result = check_contact(&resume);
        // LinkedIn carries no weight; score unchanged.
        assert_eq!(result.score, 100);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_experience_zero_entries_fails_with_one_critical() {
        let result = check_experience(&ParsedResume::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Critical);
        assert!(result.issues[0].title.to_lowercase().contains("work experience"));
    }

    #[test]
    fn test_experience_three_entries_dense_bullets_scores_100() {
        let resume = ParsedResume {
            experience: vec![experience_entry(3), experience_entry(4), experience_entry(3)],
            ..ParsedResume::default()
        };
        let result = check_experience(&resume);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_experience_two_entries_sparse_bullets() {
        let resume = ParsedResume {
            experience: vec![experience_entry(1), experience_entry(1)],
            ..ParsedResume::default()
        };
        let result = check_experience(&resume);
        // 30 (two entries) + 30 (has bullets) + 10 (avg < 2) = 70
        assert_eq!(result.score, 70);
        assert_eq!(result.issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_experience_entries_without_bullets_warns() {
        let resume = ParsedResume {
            experience: vec![experience_entry(0), experience_entry(0), experience_entry(0)],
            ..ParsedResume::default()
        };
        let result = check_experience(&resume);
        assert_eq!(result.score, 40);
        assert_eq!(result.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_education_absent_scores_50() {
        let result = check_education(&ParsedResume::default());
        assert_eq!(result.score, 50);
        assert_eq!(result.issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_education_complete_entries_score_100() {
        let resume = ParsedResume {
            education: vec![EducationEntry {
                institution: Some("MIT".to_string()),
                degree: Some("BSc".to_string()),
                ..EducationEntry::default()
            }],
            ..ParsedResume::default()
        };
        let result = check_education(&resume);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_education_half_complete_scores_85() {
        let resume = ParsedResume {
            education: vec![
                EducationEntry {
                    institution: Some("MIT".to_string()),
                    field: Some("CS".to_string()),
                    ..EducationEntry::default()
                },
                EducationEntry {
                    institution: Some("Stanford".to_string()),
                    ..EducationEntry::default()
                },
            ],
            ..ParsedResume::default()
        };
        let result = check_education(&resume);
        assert_eq!(result.score, 85);
    }

    #[test]
    fn test_skills_twelve_skills_pass_no_issues() {
        let resume = ParsedResume {
            skills: (0..12).map(|i| format!("skill-{i}")).collect(),
            ..ParsedResume::default()
        };
        let result = check_skills(&resume);
        assert_eq!(result.score, 100);
        assert_eq!(result.status, Status::Pass);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_skills_tiers() {
        for (count, expected) in [(0, 0), (2, 30), (3, 50), (5, 70), (7, 85), (10, 100)] {
            let resume = ParsedResume {
                skills: (0..count).map(|i| format!("skill-{i}")).collect(),
                ..ParsedResume::default()
            };
            assert_eq!(check_skills(&resume).score, expected, "count {count}");
        }
    }

    #[test]
    fn test_skills_six_is_info_not_warning() {
        let resume = ParsedResume {
            skills: (0..6).map(|i| format!("skill-{i}")).collect(),
            ..ParsedResume::default()
        };
        let result = check_skills(&resume);
        assert_eq!(result.issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_summary_absent_scores_50_with_warning() {
        let result = check_summary(&ParsedResume::default());
        assert_eq!(result.score, 50);
        assert_eq!(result.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_summary_ideal_band_scores_100() {
        let words: Vec<String> = (0..45).map(|i| format!("word{i}")).collect();
        let resume = ParsedResume {
            summary: Some(words.join(" ")),
            ..ParsedResume::default()
        };
        let result = check_summary(&resume);
        assert_eq!(result.score, 100);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_summary_bands() {
        for (words, expected) in [(10, 60), (25, 85), (45, 100), (90, 85), (120, 70)] {
            let text: Vec<String> = (0..words).map(|i| format!("word{i}")).collect();
            let resume = ParsedResume {
                summary: Some(text.join(" ")),
                ..ParsedResume::default()
            };
            assert_eq!(check_summary(&resume).score, expected, "words {words}");
        }
    }

    #[test]
    fn test_summary_too_long_emits_issue() {
        let text: Vec<String> = (0..120).map(|i| format!("word{i}")).collect();
        let resume = ParsedResume {
            summary: Some(text.join(" ")),
            ..ParsedResume::default()
        };
        let result = check_summary(&resume);
        assert!(result.issues[0].id.ends_with("summary_too_long"));
    }

    #[test]
    fn test_check_sections_returns_all_five() {
        let results = check_sections(&ParsedResume::default());
        let keys: Vec<&str> = results.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["contact", "experience", "education", "skills", "summary"]
        );
    }
}
