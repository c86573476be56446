//! Feedback provider trait and shortlist annotation

use crate::error::Result;
use crate::ranking::{Document, Shortlist};
use log::warn;
use std::time::Duration;

/// Substituted when feedback generation fails; the ranking run never aborts
/// because a provider call did.
pub const PLACEHOLDER_FEEDBACK: &str =
    "Automated feedback is unavailable for this candidate. The resume was reviewed and shortlisted based on its ranking score.";

/// External text-generation collaborator. Implementations wrap a remote model
/// call; failures surface as `ResumeScreenerError::Provider`.
pub trait FeedbackProvider {
    /// Generate recruiter-style feedback for one resume. `role` carries the
    /// target job title when the caller wants role-specific analysis.
    fn generate(
        &self,
        resume_text: &str,
        role: Option<&str>,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Provider that returns a fixed feedback template. Used for dry runs and as
/// the stand-in when no remote provider is configured.
pub struct StaticFeedbackProvider {
    template: String,
}

impl StaticFeedbackProvider {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Default for StaticFeedbackProvider {
    fn default() -> Self {
        Self::new(
            "Your resume was reviewed against the role requirements and ranked among the strongest submissions.",
        )
    }
}

impl FeedbackProvider for StaticFeedbackProvider {
    async fn generate(&self, _resume_text: &str, role: Option<&str>) -> Result<String> {
        match role {
            Some(role) => Ok(format!("{} Target role: {}.", self.template, role)),
            None => Ok(self.template.clone()),
        }
    }
}

/// Annotate each finalist with provider feedback, in rank order.
///
/// Each provider call is bounded by `timeout`. A failing or timed-out call
/// annotates the candidate with the placeholder text instead of aborting; the
/// shortlist and its scores are never discarded. Dropping the returned future
/// (e.g. on user abort) stops issuing further provider calls.
pub async fn annotate_shortlist(
    provider: &impl FeedbackProvider,
    shortlist: &mut Shortlist,
    documents: &[Document],
    role: Option<&str>,
    timeout: Duration,
) {
    for candidate in shortlist.candidates_mut() {
        let resume_text = documents
            .iter()
            .find(|doc| doc.identifier == candidate.record.identifier)
            .map(|doc| doc.raw_text.as_str())
            .unwrap_or("");

        let feedback =
            match tokio::time::timeout(timeout, provider.generate(resume_text, role)).await {
                Ok(Ok(text)) => text,
                Ok(Err(e)) => {
                    warn!(
                        "Feedback generation failed for {}: {}",
                        candidate.record.identifier, e
                    );
                    PLACEHOLDER_FEEDBACK.to_string()
                }
                Err(_) => {
                    warn!(
                        "Feedback generation timed out for {}",
                        candidate.record.identifier
                    );
                    PLACEHOLDER_FEEDBACK.to_string()
                }
            };

        candidate.ai_feedback = Some(feedback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeScreenerError;
    use crate::ranking::{select_top, ScoreRecord, ScoringMode};

    struct FailingProvider;

    impl FeedbackProvider for FailingProvider {
        async fn generate(&self, _resume_text: &str, _role: Option<&str>) -> Result<String> {
            Err(ResumeScreenerError::Provider("quota exceeded".to_string()))
        }
    }

    fn shortlist_of(ids: &[&str]) -> Shortlist {
        let records: Vec<ScoreRecord> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| ScoreRecord {
                identifier: id.to_string(),
                position: i,
                skill_match_count: ids.len() - i,
                relevance_score: 0.0,
            })
            .collect();
        select_top(&records, ids.len(), ScoringMode::SkillMatch)
    }

    #[tokio::test]
    async fn test_static_provider_with_role() {
        let provider = StaticFeedbackProvider::default();
        let text = provider.generate("resume", Some("Data Scientist")).await.unwrap();
        assert!(text.contains("Data Scientist"));
    }

    #[tokio::test]
    async fn test_provider_failure_yields_placeholder() {
        let mut shortlist = shortlist_of(&["a.pdf", "b.pdf"]);
        let documents = vec![
            Document::new("a.pdf", "python developer"),
            Document::new("b.pdf", "java developer"),
        ];

        annotate_shortlist(
            &FailingProvider,
            &mut shortlist,
            &documents,
            None,
            Duration::from_secs(1),
        )
        .await;

        for candidate in &shortlist {
            assert_eq!(candidate.ai_feedback.as_deref(), Some(PLACEHOLDER_FEEDBACK));
        }
    }

    #[tokio::test]
    async fn test_all_finalists_annotated() {
        let mut shortlist = shortlist_of(&["a.pdf", "b.pdf", "c.pdf"]);
        let documents = vec![
            Document::new("a.pdf", "text a"),
            Document::new("b.pdf", "text b"),
            Document::new("c.pdf", "text c"),
        ];

        annotate_shortlist(
            &StaticFeedbackProvider::default(),
            &mut shortlist,
            &documents,
            Some("Backend Developer"),
            Duration::from_secs(1),
        )
        .await;

        assert!(shortlist.iter().all(|c| c.ai_feedback.is_some()));
    }
}
