//! Resume screener: rank resumes against a job description and notify the shortlist

mod cli;
mod config;
mod error;
mod feedback;
mod input;
mod notify;
mod output;
mod ranking;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat, ScoringModeConfig};
use error::{Result, ResumeScreenerError};
use feedback::{annotate_shortlist, StaticFeedbackProvider};
use input::{ExtractionPolicy, InputManager};
use log::{error, info};
use notify::{build_notifications, dispatch, DryRunMailSender, NotificationTemplate};
use output::{ConsoleFormatter, JsonFormatter, OutputFormatter, ScreeningReport};
use ranking::{compute_scores, select_top, ScoringMode, SkillSet};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Screen {
            job,
            resumes,
            skills,
            emails,
            role,
            mode,
            top,
            output,
            detailed,
            notify,
            lenient,
        } => {
            run_screen(
                config, job, resumes, skills, emails, role, mode, top, output, detailed, notify,
                lenient,
            )
            .await
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeScreenerError::Configuration(format!(
                            "Failed to serialize config: {}",
                            e
                        ))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::default().save()?;
                    println!("Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn run_screen(
    config: Config,
    job: PathBuf,
    resumes: Vec<PathBuf>,
    skills: String,
    emails: Option<String>,
    role: Option<String>,
    mode: Option<String>,
    top: Option<usize>,
    output: String,
    detailed: bool,
    notify: bool,
    lenient: bool,
) -> Result<()> {
    info!("Starting resume screening run");

    cli::validate_input_file(&job)
        .map_err(|e| ResumeScreenerError::InvalidInput(format!("Job description file: {}", e)))?;
    for resume in &resumes {
        cli::validate_input_file(resume)
            .map_err(|e| ResumeScreenerError::InvalidInput(format!("Resume file: {}", e)))?;
    }

    let output_format =
        cli::parse_output_format(&output).map_err(ResumeScreenerError::InvalidInput)?;

    let scoring_mode = match mode {
        Some(mode) => cli::parse_scoring_mode(&mode).map_err(ResumeScreenerError::InvalidInput)?,
        None => match config.screening.default_mode {
            ScoringModeConfig::SkillMatch => ScoringMode::SkillMatch,
            ScoringModeConfig::Relevance => ScoringMode::Relevance,
        },
    };

    let role = role.unwrap_or_else(|| config.screening.default_role.clone());
    let shortlist_size = top.unwrap_or(config.screening.shortlist_size);

    let policy = if lenient {
        ExtractionPolicy::EmptyDocument
    } else {
        ExtractionPolicy::Propagate
    };

    println!("📂 Extracting text from {} resumes...", resumes.len());
    let mut input_manager = InputManager::new().with_cache(config.processing.enable_caching);
    let job_document = input_manager.load_document(&job).await?;
    let resume_documents = input_manager.load_documents(&resumes, policy).await?;

    let skill_set = SkillSet::parse(&skills);
    info!(
        "Scoring {} resumes against {} required skills",
        resume_documents.len(),
        skill_set.len()
    );

    let records = compute_scores(&job_document, &resume_documents, &skill_set)?;
    let mut shortlist = select_top(&records, shortlist_size, scoring_mode);

    if let Some(emails) = &emails {
        let emails: Vec<String> = emails.split(',').map(|e| e.trim().to_string()).collect();
        shortlist.assign_emails(&emails);
    }

    println!("🧠 Generating feedback for {} finalists...", shortlist.len());
    let provider = StaticFeedbackProvider::default();
    annotate_shortlist(
        &provider,
        &mut shortlist,
        &resume_documents,
        Some(&role),
        Duration::from_secs(config.notification.feedback_timeout_secs),
    )
    .await;

    let dispatch_report = if notify {
        let template = NotificationTemplate::new(
            config.notification.subject_template.clone(),
            config.notification.sender_name.clone(),
        );
        let (requests, build_failures) =
            build_notifications(&shortlist, &HashMap::new(), &template, &role);

        for failure in &build_failures {
            error!(
                "Cannot notify {}: {}",
                failure.identifier, failure.reason
            );
        }

        println!("📨 Dispatching {} notifications...", requests.len());
        let mut report = dispatch(
            &DryRunMailSender,
            &requests,
            Duration::from_secs(config.notification.send_timeout_secs),
        )
        .await;
        report.failures.extend(build_failures);
        Some(report)
    } else {
        None
    };

    let report = ScreeningReport {
        job_identifier: job_document.identifier.clone(),
        role,
        mode: scoring_mode,
        records,
        shortlist,
        dispatch: dispatch_report,
    };

    let formatter: Box<dyn OutputFormatter> = match output_format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(
            config.output.color_output,
            detailed || config.output.detailed,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    };

    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
