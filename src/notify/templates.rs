//! Email templates for shortlist notifications

use serde::{Deserialize, Serialize};

/// Subject and body templating for outgoing shortlist mail.
/// `{role}` in the subject template is replaced with the target role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub subject_template: String,
    pub sender_name: String,
}

impl Default for NotificationTemplate {
    fn default() -> Self {
        Self {
            subject_template: "You've been shortlisted for the {role} role!".to_string(),
            sender_name: "HR Team".to_string(),
        }
    }
}

impl NotificationTemplate {
    pub fn new(subject_template: impl Into<String>, sender_name: impl Into<String>) -> Self {
        Self {
            subject_template: subject_template.into(),
            sender_name: sender_name.into(),
        }
    }

    pub fn render_subject(&self, role: &str) -> String {
        self.subject_template.replace("{role}", role)
    }

    pub fn render_body(&self, identifier: &str, role: &str, feedback: &str) -> String {
        format!(
            "Dear {name},\n\n\
             Congratulations! After a detailed review of your resume, we are pleased to inform \
             you that you have been shortlisted for the next stage of our hiring process for the \
             {role} position.\n\n\
             Feedback on your resume:\n{feedback}\n\n\
             We'll be in touch soon with the next steps.\n\n\
             Warm regards,\n{sender}",
            name = Self::candidate_name(identifier),
            role = role,
            feedback = feedback,
            sender = self.sender_name,
        )
    }

    /// Derive a salutation name from the resume file name:
    /// "jane_doe.pdf" addresses "jane_doe".
    fn candidate_name(identifier: &str) -> &str {
        identifier.split('.').next().unwrap_or(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_role_substitution() {
        let template = NotificationTemplate::default();
        let subject = template.render_subject("Data Scientist");
        assert_eq!(subject, "You've been shortlisted for the Data Scientist role!");
    }

    #[test]
    fn test_body_embeds_name_role_and_feedback() {
        let template = NotificationTemplate::new("Shortlisted: {role}", "Recruiting");
        let body = template.render_body("jane_doe.pdf", "Backend Developer", "Strong SQL skills.");

        assert!(body.starts_with("Dear jane_doe,"));
        assert!(body.contains("Backend Developer position"));
        assert!(body.contains("Strong SQL skills."));
        assert!(body.ends_with("Recruiting"));
    }

    #[test]
    fn test_candidate_name_without_extension() {
        let template = NotificationTemplate::default();
        let body = template.render_body("resume", "Engineer", "ok");
        assert!(body.starts_with("Dear resume,"));
    }
}
