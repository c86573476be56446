//! Notification request building and per-candidate dispatch

use crate::error::Result;
use crate::feedback::PLACEHOLDER_FEEDBACK;
use crate::notify::templates::NotificationTemplate;
use crate::ranking::{Shortlist, UNAVAILABLE_EMAIL};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// One outbound message, ready to hand to the mail collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Candidate identifier, kept for per-item failure reporting
    pub identifier: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// A notification that could not be built or sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchFailure {
    pub identifier: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentNotification {
    pub identifier: String,
    pub message_id: String,
}

/// Outcome of a dispatch batch. Partial success is visible: every finalist
/// ends up in exactly one of the two lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchReport {
    pub sent: Vec<SentNotification>,
    pub failures: Vec<DispatchFailure>,
}

/// External mail-delivery collaborator. Each send is independent; retry policy
/// belongs to the implementation, not to the dispatcher.
pub trait MailSender {
    fn send(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Sender that logs the message instead of delivering it
pub struct DryRunMailSender;

impl MailSender for DryRunMailSender {
    async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<String> {
        info!("[dry-run] would send to {}: {}", to, subject);
        Ok(format!("dry-run-{}", to))
    }
}

/// Build one notification per finalist, in ascending rank order.
///
/// Finalists with the "unavailable" contact sentinel are reported in the
/// failure list rather than silently skipped; the caller decides whether to
/// proceed with the remainder. Feedback comes from `feedback_by_identifier`,
/// falling back to the candidate's own annotation, then to the placeholder.
pub fn build_notifications(
    shortlist: &Shortlist,
    feedback_by_identifier: &HashMap<String, String>,
    template: &NotificationTemplate,
    role: &str,
) -> (Vec<NotificationRequest>, Vec<DispatchFailure>) {
    let mut requests = Vec::new();
    let mut failures = Vec::new();

    for candidate in shortlist {
        let identifier = candidate.record.identifier.clone();

        if candidate.contact_email == UNAVAILABLE_EMAIL {
            failures.push(DispatchFailure {
                identifier,
                reason: "contact email unavailable".to_string(),
            });
            continue;
        }

        let feedback = feedback_by_identifier
            .get(&identifier)
            .map(|f| f.as_str())
            .or(candidate.ai_feedback.as_deref())
            .unwrap_or(PLACEHOLDER_FEEDBACK);

        requests.push(NotificationRequest {
            to: candidate.contact_email.clone(),
            subject: template.render_subject(role),
            body: template.render_body(&identifier, role, feedback),
            identifier,
        });
    }

    (requests, failures)
}

/// Hand each request to the mail collaborator, one at a time.
///
/// A failed or timed-out send is recorded against its candidate and the batch
/// continues; the dispatcher never aborts on a per-item error.
pub async fn dispatch(
    sender: &impl MailSender,
    requests: &[NotificationRequest],
    timeout: Duration,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    for request in requests {
        match tokio::time::timeout(
            timeout,
            sender.send(&request.to, &request.subject, &request.body),
        )
        .await
        {
            Ok(Ok(message_id)) => {
                info!("Sent notification to {} ({})", request.to, message_id);
                report.sent.push(SentNotification {
                    identifier: request.identifier.clone(),
                    message_id,
                });
            }
            Ok(Err(e)) => {
                warn!("Send failed for {}: {}", request.identifier, e);
                report.failures.push(DispatchFailure {
                    identifier: request.identifier.clone(),
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                warn!("Send timed out for {}", request.identifier);
                report.failures.push(DispatchFailure {
                    identifier: request.identifier.clone(),
                    reason: "send timed out".to_string(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeScreenerError;
    use crate::ranking::{select_top, ScoreRecord, ScoringMode};

    struct FlakySender {
        failing_address: String,
    }

    impl MailSender for FlakySender {
        async fn send(&self, to: &str, _subject: &str, _body: &str) -> Result<String> {
            if to == self.failing_address {
                Err(ResumeScreenerError::Send(format!("rejected by server: {}", to)))
            } else {
                Ok(format!("msg-{}", to))
            }
        }
    }

    fn shortlist_with_emails(entries: &[(&str, &str)]) -> Shortlist {
        let records: Vec<ScoreRecord> = entries
            .iter()
            .enumerate()
            .map(|(i, (id, _))| ScoreRecord {
                identifier: id.to_string(),
                position: i,
                skill_match_count: entries.len() - i,
                relevance_score: 0.0,
            })
            .collect();
        let mut shortlist = select_top(&records, entries.len(), ScoringMode::SkillMatch);
        let emails: Vec<String> = entries.iter().map(|(_, e)| e.to_string()).collect();
        shortlist.assign_emails(&emails);
        shortlist
    }

    #[test]
    fn test_build_requests_in_rank_order() {
        let shortlist = shortlist_with_emails(&[
            ("a.pdf", "a@example.com"),
            ("b.pdf", "b@example.com"),
        ]);
        let mut feedback = HashMap::new();
        feedback.insert("a.pdf".to_string(), "Great SQL depth.".to_string());
        feedback.insert("b.pdf".to_string(), "Solid fundamentals.".to_string());

        let (requests, failures) = build_notifications(
            &shortlist,
            &feedback,
            &NotificationTemplate::default(),
            "Data Scientist",
        );

        assert!(failures.is_empty());
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].to, "a@example.com");
        assert!(requests[0].body.contains("Great SQL depth."));
        assert!(requests[0].subject.contains("Data Scientist"));
    }

    #[test]
    fn test_unavailable_email_reported_not_skipped() {
        let shortlist = shortlist_with_emails(&[
            ("a.pdf", "a@example.com"),
            ("b.pdf", ""),
            ("c.pdf", "c@example.com"),
        ]);

        let (requests, failures) = build_notifications(
            &shortlist,
            &HashMap::new(),
            &NotificationTemplate::default(),
            "Engineer",
        );

        assert_eq!(requests.len(), 2);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].identifier, "b.pdf");
        assert!(failures[0].reason.contains("unavailable"));
    }

    #[test]
    fn test_missing_feedback_falls_back_to_placeholder() {
        let shortlist = shortlist_with_emails(&[("a.pdf", "a@example.com")]);
        let (requests, _) = build_notifications(
            &shortlist,
            &HashMap::new(),
            &NotificationTemplate::default(),
            "Engineer",
        );
        assert!(requests[0].body.contains(PLACEHOLDER_FEEDBACK));
    }

    #[tokio::test]
    async fn test_one_failed_send_does_not_abort_batch() {
        let shortlist = shortlist_with_emails(&[
            ("a.pdf", "a@example.com"),
            ("b.pdf", "b@example.com"),
            ("c.pdf", "c@example.com"),
        ]);
        let (requests, _) = build_notifications(
            &shortlist,
            &HashMap::new(),
            &NotificationTemplate::default(),
            "Engineer",
        );

        let sender = FlakySender {
            failing_address: "b@example.com".to_string(),
        };
        let report = dispatch(&sender, &requests, Duration::from_secs(1)).await;

        assert_eq!(report.sent.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].identifier, "b.pdf");
        assert!(report.failures[0].reason.contains("rejected"));
    }

    #[tokio::test]
    async fn test_dry_run_sender_reports_all_sent() {
        let shortlist = shortlist_with_emails(&[("a.pdf", "a@example.com")]);
        let (requests, _) = build_notifications(
            &shortlist,
            &HashMap::new(),
            &NotificationTemplate::default(),
            "Engineer",
        );

        let report = dispatch(&DryRunMailSender, &requests, Duration::from_secs(1)).await;
        assert_eq!(report.sent.len(), 1);
        assert!(report.failures.is_empty());
    }
}
