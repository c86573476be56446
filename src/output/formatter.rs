//! Console and JSON rendering of screening results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::notify::DispatchReport;
use crate::ranking::{ScoreRecord, ScoringMode, Shortlist};
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Everything one screening run produced, in ranking order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub job_identifier: String,
    pub role: String,
    pub mode: ScoringMode,
    /// All candidates with both score fields, in upload order
    pub records: Vec<ScoreRecord>,
    pub shortlist: Shortlist,
    pub dispatch: Option<DispatchReport>,
}

/// Trait for rendering a screening report
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn score_cell(&self, record: &ScoreRecord, mode: ScoringMode) -> String {
        match mode {
            ScoringMode::SkillMatch => format!("{} skills", record.skill_match_count),
            ScoringMode::Relevance => format!("{:.4}", record.relevance_score),
        }
    }

    fn paint(&self, text: String, rank: usize) -> String {
        if !self.use_colors {
            return text;
        }
        match rank {
            1 => text.green().bold().to_string(),
            2 | 3 => text.cyan().to_string(),
            _ => text,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!(
            "Screening results for '{}' ({})\n",
            report.role, report.job_identifier
        ));
        let mode_label = match report.mode {
            ScoringMode::SkillMatch => "skill match count",
            ScoringMode::Relevance => "TF-IDF relevance",
        };
        out.push_str(&format!("Scoring mode: {}\n\n", mode_label));

        out.push_str("Shortlist:\n");
        for candidate in &report.shortlist {
            let line = format!(
                "  #{} {}: {} (contact: {})",
                candidate.rank,
                candidate.record.identifier,
                self.score_cell(&candidate.record, report.mode),
                candidate.contact_email,
            );
            out.push_str(&self.paint(line, candidate.rank));
            out.push('\n');

            if self.detailed {
                if let Some(feedback) = &candidate.ai_feedback {
                    out.push_str(&format!("     feedback: {}\n", feedback));
                }
            }
        }

        if self.detailed {
            out.push_str("\nAll candidates (upload order):\n");
            for record in &report.records {
                out.push_str(&format!(
                    "  {}: {} skills, relevance {:.4}\n",
                    record.identifier, record.skill_match_count, record.relevance_score
                ));
            }
        }

        if let Some(dispatch) = &report.dispatch {
            out.push_str(&format!(
                "\nNotifications: {} sent, {} failed\n",
                dispatch.sent.len(),
                dispatch.failures.len()
            ));
            for failure in &dispatch.failures {
                let line = format!("  failed: {} ({})", failure.identifier, failure.reason);
                if self.use_colors {
                    out.push_str(&line.red().to_string());
                } else {
                    out.push_str(&line);
                }
                out.push('\n');
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// JSON formatter for machine consumption
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{select_top, ScoringMode};

    fn sample_report() -> ScreeningReport {
        let records = vec![
            ScoreRecord {
                identifier: "a.pdf".to_string(),
                position: 0,
                skill_match_count: 2,
                relevance_score: 0.61,
            },
            ScoreRecord {
                identifier: "b.pdf".to_string(),
                position: 1,
                skill_match_count: 0,
                relevance_score: 0.05,
            },
        ];
        let mut shortlist = select_top(&records, 3, ScoringMode::SkillMatch);
        shortlist.assign_emails(&["a@example.com".to_string()]);

        ScreeningReport {
            job_identifier: "job.txt".to_string(),
            role: "Data Scientist".to_string(),
            mode: ScoringMode::SkillMatch,
            records,
            shortlist,
            dispatch: None,
        }
    }

    #[test]
    fn test_console_output_lists_shortlist() {
        let formatter = ConsoleFormatter::new(false, false);
        let text = formatter.format_report(&sample_report()).unwrap();

        assert!(text.contains("#1 a.pdf"));
        assert!(text.contains("2 skills"));
        assert!(text.contains("a@example.com"));
    }

    #[test]
    fn test_json_output_roundtrips() {
        let formatter = JsonFormatter::new(true);
        let json = formatter.format_report(&sample_report()).unwrap();

        let parsed: ScreeningReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.shortlist.len(), 2);
    }
}
