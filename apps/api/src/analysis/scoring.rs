//! ATS scoring — four deterministic sub-scores combined with fixed weights.
//!
//! Every scoring function is total: empty input degrades the score toward 0,
//! it never fails. The weighted sum is clamped to [0, 100].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::keywords::{keyword_match_score, partition_keywords};

// ────────────────────────────────────────────────────────────────────────────
// Report types
// ────────────────────────────────────────────────────────────────────────────

/// The four sub-scores, each in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub keyword_match: u32,
    pub formatting: u32,
    pub section_completeness: u32,
    pub experience_relevance: u32,
}

/// Per-category breakdown: which tracked items matched, which are missing,
/// and a templated suggestion. Presentation, not scoring logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryReport {
    pub name: String,
    pub score: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub suggestion: String,
}

/// Full compatibility report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall_score: u32,
    pub details: ScoreDetails,
    pub categories: Vec<CategoryReport>,
    /// "local" | "remote" — which backend produced the report.
    #[serde(default)]
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub keyword_match: f64,
    pub formatting: f64,
    pub section_completeness: f64,
    pub experience_relevance: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.keyword_match + self.formatting + self.section_completeness + self.experience_relevance
    }
}

/// Fixed aggregation weights. Changing these changes every overall score;
/// they must stay in lockstep with the remote scorer's rubric.
pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    keyword_match: 0.35,
    formatting: 0.20,
    section_completeness: 0.25,
    experience_relevance: 0.20,
};

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

const MISSING_SECTION_PENALTY: i32 = 15;
const NO_BULLETS_PENALTY: i32 = 10;
const NO_DATES_PENALTY: i32 = 10;

/// Formatting checks: four required section patterns plus bullet and date
/// presence. The labels feed the category report.
static FORMATTING_CHECKS: Lazy<Vec<(&str, Regex, i32)>> = Lazy::new(|| {
    vec![
        (
            "experience section",
            Regex::new(r"(?i)experience|work history").unwrap(),
            MISSING_SECTION_PENALTY,
        ),
        (
            "education section",
            Regex::new(r"(?i)education").unwrap(),
            MISSING_SECTION_PENALTY,
        ),
        (
            "skills section",
            Regex::new(r"(?i)skills").unwrap(),
            MISSING_SECTION_PENALTY,
        ),
        (
            "contact details",
            Regex::new(r"(?i)contact|email|phone").unwrap(),
            MISSING_SECTION_PENALTY,
        ),
        (
            "bullet points",
            Regex::new(r"[•\-\*]").unwrap(),
            NO_BULLETS_PENALTY,
        ),
        ("dates", Regex::new(r"\d{4}").unwrap(), NO_DATES_PENALTY),
    ]
});

/// The five section-presence checks behind the completeness sub-score.
static SECTION_CHECKS: Lazy<Vec<(&str, Regex)>> = Lazy::new(|| {
    vec![
        ("contact", Regex::new(r"(?i)email|phone|linkedin").unwrap()),
        ("summary", Regex::new(r"(?i)summary|objective|profile").unwrap()),
        (
            "experience",
            Regex::new(r"(?i)experience|work|employment").unwrap(),
        ),
        (
            "education",
            Regex::new(r"(?i)education|degree|university").unwrap(),
        ),
        (
            "skills",
            Regex::new(r"(?i)skills|technologies|technical").unwrap(),
        ),
    ]
});

/// Technologies tracked for the experience-relevance sub-score.
const TECH_KEYWORDS: &[&str] = &[
    "react",
    "node",
    "python",
    "java",
    "javascript",
    "typescript",
    "aws",
    "docker",
    "kubernetes",
    "sql",
    "mongodb",
    "api",
    "agile",
];

/// Starts at 100 and subtracts a fixed penalty per failed check, floored at 0.
pub fn formatting_score(resume_text: &str) -> u32 {
    let penalty: i32 = FORMATTING_CHECKS
        .iter()
        .filter(|(_, pattern, _)| !pattern.is_match(resume_text))
        .map(|(_, _, penalty)| *penalty)
        .sum();
    (100 - penalty).max(0) as u32
}

/// Percentage of the five section checks that match, rounded.
pub fn section_completeness_score(resume_text: &str) -> u32 {
    let present = SECTION_CHECKS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(resume_text))
        .count();
    (present as f64 / SECTION_CHECKS.len() as f64 * 100.0).round() as u32
}

/// Percentage of tracked technologies present in BOTH texts, rounded.
pub fn experience_relevance_score(resume_text: &str, jd_text: &str) -> u32 {
    let resume_lower = resume_text.to_lowercase();
    let jd_lower = jd_text.to_lowercase();
    let matched = TECH_KEYWORDS
        .iter()
        .filter(|tech| resume_lower.contains(*tech) && jd_lower.contains(*tech))
        .count();
    (matched as f64 / TECH_KEYWORDS.len() as f64 * 100.0).round() as u32
}

/// Weighted sum of the sub-scores, rounded and clamped to [0, 100].
pub fn aggregate_score(details: &ScoreDetails) -> u32 {
    let weighted = SCORE_WEIGHTS.keyword_match * f64::from(details.keyword_match)
        + SCORE_WEIGHTS.formatting * f64::from(details.formatting)
        + SCORE_WEIGHTS.section_completeness * f64::from(details.section_completeness)
        + SCORE_WEIGHTS.experience_relevance * f64::from(details.experience_relevance);
    (weighted.round() as u32).min(100)
}

// ────────────────────────────────────────────────────────────────────────────
// Full report
// ────────────────────────────────────────────────────────────────────────────

/// Computes the complete local score report for one resume/JD pair.
pub fn compute_score_report(resume_text: &str, jd_text: &str) -> ScoreReport {
    let details = ScoreDetails {
        keyword_match: keyword_match_score(resume_text, jd_text),
        formatting: formatting_score(resume_text),
        section_completeness: section_completeness_score(resume_text),
        experience_relevance: experience_relevance_score(resume_text, jd_text),
    };

    let categories = vec![
        keyword_category(resume_text, jd_text, details.keyword_match),
        formatting_category(resume_text, details.formatting),
        completeness_category(resume_text, details.section_completeness),
        relevance_category(resume_text, jd_text, details.experience_relevance),
    ];

    ScoreReport {
        overall_score: aggregate_score(&details),
        details,
        categories,
        scorer_backend: String::new(),
    }
}

fn keyword_category(resume_text: &str, jd_text: &str, score: u32) -> CategoryReport {
    let (matched, missing) = partition_keywords(resume_text, jd_text);
    let suggestion = if missing.is_empty() {
        "Your resume already covers the job description's key terms.".to_string()
    } else {
        format!(
            "Work these job-description terms into your resume where they are true: {}.",
            preview(&missing)
        )
    };
    CategoryReport {
        name: "Keyword Match".to_string(),
        score,
        matched,
        missing,
        suggestion,
    }
}

fn formatting_category(resume_text: &str, score: u32) -> CategoryReport {
    let (matched, missing) = split_checks(
        FORMATTING_CHECKS
            .iter()
            .map(|(label, pattern, _)| (*label, pattern.is_match(resume_text))),
    );
    let suggestion = if missing.is_empty() {
        "Formatting looks ATS-friendly: standard sections, bullets, and dates are all present."
            .to_string()
    } else {
        format!("Add the missing structure: {}.", preview(&missing))
    };
    CategoryReport {
        name: "Formatting".to_string(),
        score,
        matched,
        missing,
        suggestion,
    }
}

fn completeness_category(resume_text: &str, score: u32) -> CategoryReport {
    let (matched, missing) = split_checks(
        SECTION_CHECKS
            .iter()
            .map(|(label, pattern)| (*label, pattern.is_match(resume_text))),
    );
    let suggestion = if missing.is_empty() {
        "All standard resume sections are present.".to_string()
    } else {
        format!("Add a {} section.", preview(&missing))
    };
    CategoryReport {
        name: "Section Completeness".to_string(),
        score,
        matched,
        missing,
        suggestion,
    }
}

fn relevance_category(resume_text: &str, jd_text: &str, score: u32) -> CategoryReport {
    let resume_lower = resume_text.to_lowercase();
    let jd_lower = jd_text.to_lowercase();
    let matched: Vec<String> = TECH_KEYWORDS
        .iter()
        .filter(|tech| resume_lower.contains(*tech) && jd_lower.contains(*tech))
        .map(|tech| tech.to_string())
        .collect();
    // Missing = asked for by the JD but absent from the resume.
    let missing: Vec<String> = TECH_KEYWORDS
        .iter()
        .filter(|tech| jd_lower.contains(*tech) && !resume_lower.contains(*tech))
        .map(|tech| tech.to_string())
        .collect();
    let suggestion = if missing.is_empty() {
        "Your experience covers the technologies this job calls for.".to_string()
    } else {
        format!(
            "Highlight hands-on experience with {} if you have it.",
            preview(&missing)
        )
    };
    CategoryReport {
        name: "Experience Relevance".to_string(),
        score,
        matched,
        missing,
        suggestion,
    }
}

/// First few items of a list, joined for a suggestion sentence.
fn preview(items: &[String]) -> String {
    items
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Splits labeled checks into (passed, failed) label lists.
fn split_checks<'a>(checks: impl Iterator<Item = (&'a str, bool)>) -> (Vec<String>, Vec<String>) {
    let mut passed = Vec::new();
    let mut failed = Vec::new();
    for (label, hit) in checks {
        if hit {
            passed.push(label.to_string());
        } else {
            failed.push(label.to_string());
        }
    }
    (passed, failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESUME: &str = "\
JANE DOE
Email: jane@x.com | Phone: (555) 123-4567
SUMMARY
Engineer with python and docker experience.
EXPERIENCE
Software Engineer 2020
• Built python services on aws
EDUCATION
BSc Computer Science, University 2016
SKILLS
python, docker, sql";

    #[test]
    fn test_weights_sum_to_one() {
        assert!((SCORE_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_formatting_full_marks() {
        // experience, education, skills, email, a bullet and a year: no penalties.
        let text = "experience education skills email\n• item\n2020";
        assert_eq!(formatting_score(text), 100);
    }

    #[test]
    fn test_formatting_penalties_stack() {
        // No sections, no bullets, no dates: 100 - 4*15 - 10 - 10 = 20.
        assert_eq!(formatting_score("just some plain words"), 20);
    }

    #[test]
    fn test_formatting_worst_case_stays_in_range() {
        // All six checks fail on empty input; total penalty is 80.
        let score = formatting_score("");
        assert_eq!(score, 20);
        assert!(score <= 100);
    }

    #[test]
    fn test_section_completeness_counts_five_checks() {
        assert_eq!(section_completeness_score(""), 0);
        // contact + experience present, 2 of 5 → 40.
        assert_eq!(section_completeness_score("email experience"), 40);
        assert_eq!(
            section_completeness_score("email summary experience education skills"),
            100
        );
    }

    #[test]
    fn test_experience_relevance_requires_both_sides() {
        // "python" appears in both, "docker" only in the JD: 1 of 13 → 8.
        let score = experience_relevance_score("python developer", "python and docker shop");
        assert_eq!(score, 8);
        assert_eq!(experience_relevance_score("python", "no overlap here"), 0);
    }

    #[test]
    fn test_aggregate_uses_fixed_weights() {
        let details = ScoreDetails {
            keyword_match: 100,
            formatting: 0,
            section_completeness: 0,
            experience_relevance: 0,
        };
        // 0.35 * 100 = 35.
        assert_eq!(aggregate_score(&details), 35);
    }

    #[test]
    fn test_aggregate_perfect_details_score_hundred() {
        let details = ScoreDetails {
            keyword_match: 100,
            formatting: 100,
            section_completeness: 100,
            experience_relevance: 100,
        };
        assert_eq!(aggregate_score(&details), 100);
    }

    #[test]
    fn test_all_scores_bounded_for_arbitrary_input() {
        for (resume, jd) in [
            ("", ""),
            (FULL_RESUME, "python docker kubernetes engineer"),
            ("short", "a very demanding job description with python rust go"),
        ] {
            let report = compute_score_report(resume, jd);
            assert!(report.overall_score <= 100);
            assert!(report.details.keyword_match <= 100);
            assert!(report.details.formatting <= 100);
            assert!(report.details.section_completeness <= 100);
            assert!(report.details.experience_relevance <= 100);
            for category in &report.categories {
                assert!(category.score <= 100);
            }
        }
    }

    #[test]
    fn test_report_carries_four_categories_in_order() {
        let report = compute_score_report(FULL_RESUME, "python docker");
        let names: Vec<_> = report.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Keyword Match",
                "Formatting",
                "Section Completeness",
                "Experience Relevance",
            ]
        );
    }

    #[test]
    fn test_relevance_category_lists_matched_and_missing() {
        let report = compute_score_report("python developer", "python and docker and aws");
        let relevance = &report.categories[3];
        assert_eq!(relevance.matched, vec!["python"]);
        assert_eq!(relevance.missing, vec!["aws", "docker"]);
        assert!(relevance.suggestion.contains("aws"));
    }

    #[test]
    fn test_keyword_category_suggestion_names_missing_terms() {
        let report = compute_score_report("nothing relevant", "needs kubernetes experience");
        let keyword = &report.categories[0];
        assert!(keyword.missing.contains(&"kubernetes".to_string()));
        assert!(keyword.suggestion.contains("kubernetes"));
    }

    #[test]
    fn test_full_resume_scores_well_formed() {
        let report = compute_score_report(FULL_RESUME, "python docker sql engineer");
        assert_eq!(report.details.formatting, 100);
        assert_eq!(report.details.section_completeness, 100);
        assert!(report.details.keyword_match > 0);
        assert!(report.overall_score > 0);
    }
}
