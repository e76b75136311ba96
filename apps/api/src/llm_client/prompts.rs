// Prompts for the remote resume scorer. The response shape mirrors the local
// ScoreReport exactly so either backend can serve the same callers.

/// System prompt that enforces JSON-only output.
pub const SCORE_SYSTEM: &str = "You are an expert ATS (Applicant Tracking System) resume analyzer. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Builds the scoring prompt for one resume/JD pair.
pub fn score_prompt(jd_text: &str, resume_text: &str) -> String {
    format!(
        r#"Analyze the following resume against the job description and produce a scoring report.

JOB DESCRIPTION:
{jd_text}

RESUME:
{resume_text}

Score four categories, each 0-100: keyword coverage of the job description,
ATS-friendly formatting (standard sections, bullet points, dates), section
completeness (contact, summary, experience, education, skills), and relevance
of the candidate's technology experience to the role. Weight them
0.35 / 0.20 / 0.25 / 0.20 respectively for the overall score.

Return STRICT JSON in exactly this shape, with no additional fields:
{{
  "overall_score": <integer 0-100>,
  "details": {{
    "keyword_match": <integer 0-100>,
    "formatting": <integer 0-100>,
    "section_completeness": <integer 0-100>,
    "experience_relevance": <integer 0-100>
  }},
  "categories": [
    {{
      "name": "Keyword Match",
      "score": <integer 0-100>,
      "matched": ["<term present in both>"],
      "missing": ["<term the resume lacks>"],
      "suggestion": "<one actionable sentence>"
    }},
    {{ "name": "Formatting", ... }},
    {{ "name": "Section Completeness", ... }},
    {{ "name": "Experience Relevance", ... }}
  ]
}}"#
    )
}
