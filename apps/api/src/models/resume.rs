#![allow(dead_code)]

//! Structured résumé types — the read-only input produced by the upstream parser.
//!
//! The engine never mutates a `ParsedResume`; every checker receives it by
//! shared reference and returns fresh results.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub graduation_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// The full structured résumé as emitted by the parser.
/// Ordered lists preserve the document order the candidate chose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub contact: ContactInfo,
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub volunteering: Vec<String>,
    #[serde(default)]
    pub publications: Vec<String>,
}

/// Declared file type of the uploaded document. The engine never inspects
/// binary content — only this declaration and the extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Docx,
    Doc,
    Txt,
    Other,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "doc" => FileType::Doc,
            "txt" => FileType::Txt,
            _ => FileType::Other,
        }
    }
}

impl ParsedResume {
    /// Total character count of every extracted field. Used by the parse-rate
    /// check to estimate how much of the raw document survived parsing.
    pub fn extracted_char_count(&self) -> usize {
        let mut total = 0usize;

        let contact = &self.contact;
        for field in [
            &contact.name,
            &contact.email,
            &contact.phone,
            &contact.location,
            &contact.linkedin,
        ] {
            total += field.as_deref().map_or(0, str::len);
        }

        total += self.summary.as_deref().map_or(0, str::len);

        for exp in &self.experience {
            total += exp.company.len() + exp.title.len();
            total += exp.start_date.as_deref().map_or(0, str::len);
            total += exp.end_date.as_deref().map_or(0, str::len);
            total += exp.bullets.iter().map(String::len).sum::<usize>();
        }

        for edu in &self.education {
            for field in [&edu.institution, &edu.degree, &edu.field, &edu.graduation_date] {
                total += field.as_deref().map_or(0, str::len);
            }
        }

        total += self.skills.iter().map(String::len).sum::<usize>();

        for cert in &self.certifications {
            total += cert.name.len();
            total += cert.issuer.as_deref().map_or(0, str::len);
            total += cert.date.as_deref().map_or(0, str::len);
        }

        for project in &self.projects {
            total += project.name.len();
            total += project.description.as_deref().map_or(0, str::len);
            total += project.technologies.iter().map(String::len).sum::<usize>();
        }

        total += self.awards.iter().map(String::len).sum::<usize>();
        total += self.volunteering.iter().map(String::len).sum::<usize>();
        total += self.publications.iter().map(String::len).sum::<usize>();

        total
    }

    /// All experience bullets in document order.
    pub fn all_bullets(&self) -> Vec<&str> {
        self.experience
            .iter()
            .flat_map(|e| e.bullets.iter().map(String::as_str))
            .collect()
    }

    /// Reassembled textual content — summary, bullets, and skills. The live
    /// engine runs word-level checks against this when no raw document text
    /// is available.
    pub fn body_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(summary) = self.summary.as_deref() {
            parts.push(summary);
        }
        for exp in &self.experience {
            for bullet in &exp.bullets {
                parts.push(bullet);
            }
        }
        for skill in &self.skills {
            parts.push(skill);
        }
        parts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(FileType::from_extension("pdf"), FileType::Pdf);
        assert_eq!(FileType::from_extension(".PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("docx"), FileType::Docx);
        assert_eq!(FileType::from_extension("pages"), FileType::Other);
    }

    #[test]
    fn test_extracted_char_count_empty_resume() {
        assert_eq!(ParsedResume::default().extracted_char_count(), 0);
    }

    #[test]
    fn test_extracted_char_count_sums_all_fields() {
        let resume = ParsedResume {
            contact: ContactInfo {
                name: Some("Ada".to_string()),    // 3
                email: Some("a@b.c".to_string()), // 5
                ..ContactInfo::default()
            },
            summary: Some("Engineer".to_string()), // 8
            skills: vec!["Rust".to_string()],      // 4
            ..ParsedResume::default()
        };
        assert_eq!(resume.extracted_char_count(), 20);
    }

    #[test]
    fn test_all_bullets_preserves_order() {
        let resume = ParsedResume {
            experience: vec![
                ExperienceEntry {
                    company: "A".to_string(),
                    title: "Dev".to_string(),
                    bullets: vec!["first".to_string(), "second".to_string()],
                    ..ExperienceEntry::default()
                },
                ExperienceEntry {
                    company: "B".to_string(),
                    title: "Dev".to_string(),
                    bullets: vec!["third".to_string()],
                    ..ExperienceEntry::default()
                },
            ],
            ..ParsedResume::default()
        };
        assert_eq!(resume.all_bullets(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_body_text_joins_summary_bullets_skills() {
        let resume = ParsedResume {
            summary: Some("Backend engineer".to_string()),
            experience: vec![ExperienceEntry {
                company: "Acme".to_string(),
                title: "Dev".to_string(),
                bullets: vec!["Shipped the thing".to_string()],
                ..ExperienceEntry::default()
            }],
            skills: vec!["Rust".to_string()],
            ..ParsedResume::default()
        };
        let text = resume.body_text();
        assert!(text.contains("Backend engineer"));
        assert!(text.contains("Shipped the thing"));
        assert!(text.contains("Rust"));
    }
}
