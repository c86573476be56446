//! Required-skill parsing and literal keyword matching

use crate::error::{Result, ResumeScreenerError};
use crate::ranking::normalizer::normalize;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

/// Ordered set of normalized skill keywords. Duplicates are removed and empty
/// entries dropped, so every keyword is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    keywords: Vec<String>,
}

impl SkillSet {
    /// Parse a comma-separated skill list as entered by the user.
    /// "Python, SQL, python" yields ["python", "sql"].
    pub fn parse(input: &str) -> Self {
        let mut keywords = Vec::new();
        for part in input.split(',') {
            let keyword = normalize(part);
            if !keyword.is_empty() && !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }
        Self { keywords }
    }

    pub fn from_keywords(raw: &[String]) -> Self {
        Self::parse(&raw.join(","))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Matcher for counting which required skills appear in a resume.
///
/// Matching is substring containment over normalized text, not word-boundary
/// matching, so "postgresql" satisfies the skill "sql".
pub struct SkillMatcher {
    automaton: AhoCorasick,
    skill_count: usize,
}

impl SkillMatcher {
    pub fn new(skills: &SkillSet) -> Result<Self> {
        let automaton = AhoCorasick::new(skills.keywords()).map_err(|e| {
            ResumeScreenerError::InvalidInput(format!("Failed to build skill matcher: {}", e))
        })?;

        Ok(Self {
            automaton,
            skill_count: skills.len(),
        })
    }

    /// Count how many distinct skills occur in the normalized resume text.
    /// Always in [0, |skills|]; an empty skill set scores 0 for every resume.
    pub fn match_score(&self, normalized_text: &str) -> usize {
        let mut seen = vec![false; self.skill_count];
        for mat in self.automaton.find_overlapping_iter(normalized_text) {
            seen[mat.pattern().as_usize()] = true;
        }
        seen.iter().filter(|&&hit| hit).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dedup_and_normalize() {
        let skills = SkillSet::parse("Python, SQL, python, , SQL ");
        assert_eq!(skills.keywords(), &["python".to_string(), "sql".to_string()]);
    }

    #[test]
    fn test_parse_empty_input() {
        let skills = SkillSet::parse("");
        assert!(skills.is_empty());
        let skills = SkillSet::parse(" , , ");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_match_score_scenario() {
        let skills = SkillSet::parse("python,sql");
        let matcher = SkillMatcher::new(&skills).unwrap();

        let resume_a = normalize("Python developer with SQL");
        let resume_b = normalize("Java developer");

        assert_eq!(matcher.match_score(&resume_a), 2);
        assert_eq!(matcher.match_score(&resume_b), 0);
    }

    #[test]
    fn test_match_score_bounded() {
        let skills = SkillSet::parse("rust,rust tooling,cargo");
        let matcher = SkillMatcher::new(&skills).unwrap();

        let text = normalize("rust rust rust cargo rust tooling cargo");
        assert!(matcher.match_score(&text) <= skills.len());
        assert_eq!(matcher.match_score(&text), 3);
    }

    #[test]
    fn test_substring_containment() {
        // Containment, not word-boundary: "sql" matches inside "postgresql"
        let skills = SkillSet::parse("sql");
        let matcher = SkillMatcher::new(&skills).unwrap();
        assert_eq!(matcher.match_score("experience with postgresql"), 1);
    }

    #[test]
    fn test_empty_skill_set_scores_zero() {
        let skills = SkillSet::parse("");
        let matcher = SkillMatcher::new(&skills).unwrap();
        assert_eq!(matcher.match_score("python sql rust"), 0);
    }

    #[test]
    fn test_monotonic_in_skills() {
        let text = normalize("Python developer with SQL and Docker");

        let base = SkillMatcher::new(&SkillSet::parse("python,sql"))
            .unwrap()
            .match_score(&text);
        let extended = SkillMatcher::new(&SkillSet::parse("python,sql,docker"))
            .unwrap()
            .match_score(&text);

        assert!(extended >= base);
    }
}
