//! CLI interface for the resume screener

use crate::ranking::ScoringMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Resume ranking and shortlist notification tool")]
#[command(
    long_about = "Rank candidate resumes against a job description and required skills, shortlist the top candidates, and build notification emails"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank resumes against a job description and shortlist the top candidates
    Screen {
        /// Path to the job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: PathBuf,

        /// Paths to resume files (PDF, TXT, MD), in upload order
        #[arg(short, long, required = true, num_args = 1..)]
        resumes: Vec<PathBuf>,

        /// Required skills, comma-separated (e.g. "python,sql")
        #[arg(short, long, default_value = "")]
        skills: String,

        /// Candidate emails, comma-separated, in resume order
        #[arg(short, long)]
        emails: Option<String>,

        /// Target role used in feedback and notifications
        #[arg(long)]
        role: Option<String>,

        /// Scoring mode: skill-match or relevance
        #[arg(short, long)]
        mode: Option<String>,

        /// Shortlist size (defaults to configuration)
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console or json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Show all candidate scores and feedback text
        #[arg(short, long)]
        detailed: bool,

        /// Build and dispatch shortlist notifications
        #[arg(long)]
        notify: bool,

        /// Treat unreadable resumes as empty instead of aborting
        #[arg(long)]
        lenient: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate scoring mode
pub fn parse_scoring_mode(mode: &str) -> Result<ScoringMode, String> {
    match mode.to_lowercase().as_str() {
        "skill-match" | "skills" => Ok(ScoringMode::SkillMatch),
        "relevance" | "tfidf" => Ok(ScoringMode::Relevance),
        _ => Err(format!(
            "Invalid scoring mode: {}. Supported: skill-match, relevance",
            mode
        )),
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Check that a job or resume file is in a readable format before any IO
pub fn validate_input_file(path: &PathBuf) -> Result<(), String> {
    match crate::input::SourceFormat::for_path(path) {
        Some(_) => Ok(()),
        None => Err(format!(
            "Unsupported file type: {} (expected pdf, txt, or md)",
            path.display()
        )),
    }
}
