//! Keyword extraction and overlap scoring between resume and job description.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Common English words excluded from the keyword index.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "from", "have", "will", "your", "their", "what",
    "about", "which", "when", "where", "who", "how", "all", "each", "other", "some", "these",
];

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Builds a keyword index: normalized token → occurrence count.
///
/// Tokens are lower-cased, split on non-word runs, and kept only when longer
/// than 3 characters and not a stop-word. Total: empty or whitespace-only
/// input yields an empty map.
pub fn extract_keywords(text: &str) -> HashMap<String, usize> {
    let lowered = text.to_lowercase();
    let mut index = HashMap::new();
    for token in NON_WORD.split(&lowered) {
        if token.len() <= 3 || STOP_WORDS.contains(&token) {
            continue;
        }
        *index.entry(token.to_string()).or_insert(0) += 1;
    }
    index
}

/// Splits the job description's keyword set into (matched, missing) against
/// the resume text. Matching is case-folded substring containment, so
/// "database" in the resume covers the keyword "data". Both lists are sorted
/// for stable output.
pub fn partition_keywords(resume_text: &str, jd_text: &str) -> (Vec<String>, Vec<String>) {
    let resume_lower = resume_text.to_lowercase();
    let (mut matched, mut missing): (Vec<String>, Vec<String>) = extract_keywords(jd_text)
        .into_keys()
        .partition(|keyword| resume_lower.contains(keyword.as_str()));
    matched.sort();
    missing.sort();
    (matched, missing)
}

/// Percentage of job-description keywords present anywhere in the resume,
/// rounded to the nearest integer.
///
/// An empty required set scores 100: nothing was asked for, so nothing is
/// missing. See DESIGN.md for the rationale behind this policy.
pub fn keyword_match_score(resume_text: &str, jd_text: &str) -> u32 {
    let (matched, missing) = partition_keywords(resume_text, jd_text);
    let required = matched.len() + missing.len();
    if required == 0 {
        return 100;
    }
    (matched.len() as f64 / required as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_index() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \t\n  ").is_empty());
    }

    #[test]
    fn test_tokens_are_lowercased_and_counted() {
        let index = extract_keywords("Rust rust RUST python");
        assert_eq!(index.get("rust"), Some(&3));
        assert_eq!(index.get("python"), Some(&1));
    }

    #[test]
    fn test_short_tokens_and_stop_words_are_dropped() {
        let index = extract_keywords("the api and sql with kubernetes");
        // "the", "and", "with" are stop-words; "api" and "sql" are too short.
        assert_eq!(index.len(), 1);
        assert!(index.contains_key("kubernetes"));
    }

    #[test]
    fn test_splits_on_non_word_runs() {
        let index = extract_keywords("docker,kubernetes/terraform (ansible)");
        assert!(index.contains_key("docker"));
        assert!(index.contains_key("kubernetes"));
        assert!(index.contains_key("terraform"));
        assert!(index.contains_key("ansible"));
    }

    #[test]
    fn test_extraction_is_idempotent_on_its_own_keys() {
        let first = extract_keywords("Python developers building Docker pipelines with Python");
        let rejoined = first.keys().cloned().collect::<Vec<_>>().join(" ");
        let second = extract_keywords(&rejoined);
        let mut first_keys: Vec<_> = first.into_keys().collect();
        let mut second_keys: Vec<_> = second.into_keys().collect();
        first_keys.sort();
        second_keys.sort();
        assert_eq!(first_keys, second_keys);
    }

    #[test]
    fn test_fully_absent_keywords_score_zero() {
        assert_eq!(keyword_match_score("I write Haskell", "python docker"), 0);
    }

    #[test]
    fn test_fully_present_keywords_score_hundred() {
        assert_eq!(
            keyword_match_score("Python and Docker expert", "python docker"),
            100
        );
    }

    #[test]
    fn test_partial_overlap_rounds_to_nearest() {
        // 1 of 3 required keywords present: 33.33 → 33.
        let score = keyword_match_score("kubernetes only", "kubernetes terraform ansible");
        assert_eq!(score, 33);
    }

    #[test]
    fn test_empty_required_set_scores_hundred() {
        assert_eq!(keyword_match_score("any resume text", ""), 100);
        // A JD of nothing but stop-words and short tokens also has no requirements.
        assert_eq!(keyword_match_score("any resume text", "the and for a to"), 100);
    }

    #[test]
    fn test_partition_reports_sorted_matched_and_missing() {
        let (matched, missing) =
            partition_keywords("We ship docker containers", "docker kubernetes ansible");
        assert_eq!(matched, vec!["docker"]);
        assert_eq!(missing, vec!["ansible", "kubernetes"]);
    }
}
