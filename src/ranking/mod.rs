//! Ranking engine: normalization, skill matching, relevance scoring, selection

pub mod normalizer;
pub mod selector;
pub mod skills;
pub mod tfidf;

pub use selector::{
    compute_scores, select_top, Document, RankedCandidate, ScoreRecord, ScoringMode, Shortlist,
    UNAVAILABLE_EMAIL,
};
pub use skills::{SkillMatcher, SkillSet};
