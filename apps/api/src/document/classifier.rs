//! Line classification — assigns each resume line a semantic role.
//!
//! Classification is a pure function of the line's text and its index among
//! the trimmed, non-empty lines. The rules form a fixed priority chain; the
//! first matching rule wins, so a short all-caps first line is always `Name`
//! even when it would also match the contact or section patterns.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Semantic role of a single resume line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    Name,
    ContactInfo,
    SectionHeader,
    Bullet,
    DatedHeading,
    Paragraph,
}

/// One line of resume text with its assigned role and position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub text: String,
    pub role: LineRole,
    pub index: usize,
}

/// Glyphs that open a bullet line. Shared with the structurer, which strips
/// the leading glyph when accumulating list items.
pub(crate) const BULLET_GLYPHS: &[char] = &['•', '-', '*', '·', '○', '▪'];

/// Contact lines may only appear within the first few lines of a resume.
const CONTACT_WINDOW: usize = 5;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+").unwrap());

static CONTACT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@|phone|email|linkedin|github|\+?\d{10}|\(\d{3}\)").unwrap());

static YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

/// Section title patterns, including common synonyms. Anchored at the start
/// of the line so body text mentioning "experience" does not become a header.
static SECTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^(EXPERIENCE|WORK EXPERIENCE|PROFESSIONAL EXPERIENCE|EMPLOYMENT)",
        r"(?i)^(EDUCATION|ACADEMIC|QUALIFICATIONS)",
        r"(?i)^(SKILLS|TECHNICAL SKILLS|CORE COMPETENCIES)",
        r"(?i)^(SUMMARY|PROFESSIONAL SUMMARY|PROFILE|OBJECTIVE)",
        r"(?i)^(CERTIFICATIONS?|LICENSES?)",
        r"(?i)^(PROJECTS?|PORTFOLIO)",
        r"(?i)^(ACHIEVEMENTS?|AWARDS?|HONORS?)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Trims the raw text into non-empty lines and classifies each one.
/// Blank lines are dropped before classification and never reappear.
pub fn classify_lines(text: &str) -> Vec<ClassifiedLine> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| ClassifiedLine {
            text: line.to_string(),
            role: classify_line(line, index),
            index,
        })
        .collect()
}

/// The ordered predicate chain. Rule order is load-bearing.
fn classify_line(line: &str, index: usize) -> LineRole {
    if is_name(line, index) {
        LineRole::Name
    } else if is_contact_info(line, index) {
        LineRole::ContactInfo
    } else if is_section_header(line) {
        LineRole::SectionHeader
    } else if is_bullet(line) {
        LineRole::Bullet
    } else if is_dated_heading(line) {
        LineRole::DatedHeading
    } else {
        LineRole::Paragraph
    }
}

/// First line, short, and either fully upper-case or "Firstname Lastname".
fn is_name(line: &str, index: usize) -> bool {
    index == 0
        && line.chars().count() < 50
        && (line == line.to_uppercase() || NAME_PATTERN.is_match(line))
}

fn is_contact_info(line: &str, index: usize) -> bool {
    index < CONTACT_WINDOW && CONTACT_PATTERN.is_match(line)
}

fn is_section_header(line: &str) -> bool {
    SECTION_PATTERNS.iter().any(|p| p.is_match(line))
}

fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLET_GLYPHS)
}

/// A short line carrying a 4-digit year (1900–2099), e.g. a job title with
/// an employment period.
fn is_dated_heading(line: &str) -> bool {
    line.chars().count() < 100 && YEAR_PATTERN.is_match(line)
}
