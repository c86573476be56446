//! Score computation, candidate selection, and shortlist assembly

use crate::error::Result;
use crate::ranking::normalizer::normalize;
use crate::ranking::skills::{SkillMatcher, SkillSet};
use crate::ranking::tfidf::rank_relevance;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel contact address for candidates with no supplied email
pub const UNAVAILABLE_EMAIL: &str = "unavailable";

/// One extracted resume or job description, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub identifier: String,
    pub raw_text: String,
    pub normalized_text: String,
}

impl Document {
    pub fn new(identifier: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = normalize(&raw_text);
        Self {
            identifier: identifier.into(),
            raw_text,
            normalized_text,
        }
    }
}

/// Which score field orders a ranking run. The two modes are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMode {
    SkillMatch,
    Relevance,
}

/// Scores for one resume. Created once per ranking run, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub identifier: String,
    /// 0-based upload position, the deterministic tie-breaker
    pub position: usize,
    pub skill_match_count: usize,
    pub relevance_score: f32,
}

/// A shortlisted candidate: score record plus rank and contact details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub record: ScoreRecord,
    /// 1-based, contiguous within the shortlist
    pub rank: usize,
    pub contact_email: String,
    pub ai_feedback: Option<String>,
}

/// Bounded, ranked subset of candidates selected for notification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shortlist {
    candidates: Vec<RankedCandidate>,
}

/// Compute one ScoreRecord per resume, index-aligned with the upload order.
/// Both score fields are always filled in; the scoring mode only decides which
/// one orders the shortlist later.
pub fn compute_scores(
    job: &Document,
    resumes: &[Document],
    skills: &SkillSet,
) -> Result<Vec<ScoreRecord>> {
    let matcher = SkillMatcher::new(skills)?;

    let resume_texts: Vec<String> = resumes
        .iter()
        .map(|doc| doc.normalized_text.clone())
        .collect();
    let relevance = rank_relevance(&job.normalized_text, &resume_texts);

    Ok(resumes
        .iter()
        .enumerate()
        .map(|(position, doc)| ScoreRecord {
            identifier: doc.identifier.clone(),
            position,
            skill_match_count: matcher.match_score(&doc.normalized_text),
            relevance_score: relevance[position],
        })
        .collect())
}

/// Select the top `n` candidates under the given scoring mode.
///
/// Ordering is total and deterministic: descending by the active score field,
/// ties broken by ascending upload position. Fewer than `n` records returns
/// everything, ranked; ranks are assigned 1..k contiguously.
pub fn select_top(records: &[ScoreRecord], n: usize, mode: ScoringMode) -> Shortlist {
    let mut sorted: Vec<ScoreRecord> = records.to_vec();
    sorted.sort_by(|a, b| {
        let by_score = match mode {
            ScoringMode::SkillMatch => b.skill_match_count.cmp(&a.skill_match_count),
            ScoringMode::Relevance => b.relevance_score.total_cmp(&a.relevance_score),
        };
        by_score.then(a.position.cmp(&b.position))
    });
    sorted.truncate(n);

    let candidates = sorted
        .into_iter()
        .enumerate()
        .map(|(idx, record)| RankedCandidate {
            record,
            rank: idx + 1,
            contact_email: UNAVAILABLE_EMAIL.to_string(),
            ai_feedback: None,
        })
        .collect();

    Shortlist { candidates }
}

impl Shortlist {
    pub fn candidates(&self) -> &[RankedCandidate] {
        &self.candidates
    }

    pub fn candidates_mut(&mut self) -> &mut [RankedCandidate] {
        &mut self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedCandidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Correlate contact emails positionally by upload order. A candidate whose
    /// position has no corresponding email keeps the "unavailable" sentinel.
    pub fn assign_emails(&mut self, emails: &[String]) {
        for candidate in &mut self.candidates {
            candidate.contact_email = emails
                .get(candidate.record.position)
                .map(|e| e.trim())
                .filter(|e| !e.is_empty())
                .map(|e| e.to_string())
                .unwrap_or_else(|| UNAVAILABLE_EMAIL.to_string());
        }
    }

    /// Stronger correlation form: explicit identifier-to-email pairs.
    /// Identifiers absent from the map keep the sentinel.
    pub fn assign_emails_by_identifier(&mut self, emails: &HashMap<String, String>) {
        for candidate in &mut self.candidates {
            candidate.contact_email = emails
                .get(&candidate.record.identifier)
                .map(|e| e.trim())
                .filter(|e| !e.is_empty())
                .map(|e| e.to_string())
                .unwrap_or_else(|| UNAVAILABLE_EMAIL.to_string());
        }
    }
}

impl<'a> IntoIterator for &'a Shortlist {
    type Item = &'a RankedCandidate;
    type IntoIter = std::slice::Iter<'a, RankedCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
