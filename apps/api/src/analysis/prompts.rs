// All LLM prompt constants for the analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for the spelling/grammar subcheck — enforces JSON-only output.
pub const SPELLING_SYSTEM: &str =
    "You are an expert copy editor reviewing résumé text for spelling and \
    grammar problems. You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Spelling/grammar prompt template. Replace `{resume_text}` before sending.
pub const SPELLING_PROMPT_TEMPLATE: &str = r#"Review the following résumé text for spelling and grammar errors.

Return a JSON object with this EXACT schema (no extra fields):
{
  "overall_quality": 85,
  "issues": [
    {
      "text": "managment",
      "issue_type": "spelling",
      "suggestion": "management",
      "context": "Led managment of the platform team"
    }
  ]
}

Rules:
- "overall_quality" is 0-100: 100 means flawless, subtract for each error by severity.
- "issue_type" is exactly "spelling" or "grammar".
- Report at most 10 issues, worst first.
- Ignore proper nouns, product names, and technical abbreviations.
- An empty résumé scores 0 with no issues.

RESUME TEXT:
{resume_text}"#;

/// System prompt for the tailoring subcheck — enforces JSON-only output.
pub const TAILORING_SYSTEM: &str =
    "You are an expert recruiter comparing a résumé against a specific job \
    description. You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Tailoring prompt template.
/// Replace: {job_title}, {jd_text}, {resume_json}
pub const TAILORING_PROMPT_TEMPLATE: &str = r#"Compare the résumé below against the job description and report keyword and skill coverage.

Return a JSON object with this EXACT schema (no extra fields):
{
  "found_hard_skills": ["Rust", "PostgreSQL"],
  "missing_hard_skills": ["Kubernetes"],
  "found_soft_skills": ["mentoring"],
  "missing_soft_skills": ["stakeholder communication"],
  "keyword_match_score": 70,
  "skills_alignment_score": 65
}

Rules:
- Hard skills are technologies, tools, languages, and certifications.
- Soft skills are behaviors and ways of working the JD asks for.
- "keyword_match_score" (0-100): how much of the JD's keyword vocabulary the résumé covers.
- "skills_alignment_score" (0-100): how well the résumé's declared skills align with the role's core requirements.
- A skill counts as found only when the résumé states it, not when it is merely plausible.

JOB TITLE: {job_title}

JOB DESCRIPTION:
{jd_text}

RESUME (structured JSON):
{resume_json}"#;
