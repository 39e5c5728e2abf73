//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use verdant_bot::{Orchestrator, RunReport, Services, VerdantConfig};
use verdant_core::{QueryStrategy, TERM_GROUPS};
use verdant_error::VerdantResult;

/// Verdant - post a captioned nature photo to Twitter/X
#[derive(Parser, Debug)]
#[command(name = "verdant")]
#[command(about = "Post a captioned nature photo to Twitter/X", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to `post`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file to use instead of ./verdant.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Primary attempts before falling back
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,

    /// Always search for this term
    #[arg(long, global = true)]
    pub query: Option<String>,

    /// Log uploads and posts instead of sending them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Find a photo, caption it and publish it
    Post,
    /// List the curated search terms by theme
    Queries,
}

impl Cli {
    /// Command to run, `post` when none was given.
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Post)
    }

    /// Apply command-line overrides on top of loaded configuration.
    ///
    /// `--query` switches to the fixed strategy.
    pub fn apply_overrides(&self, config: &mut VerdantConfig) {
        if let Some(max_attempts) = self.max_attempts {
            config.posting.max_attempts = max_attempts;
        }
        if let Some(query) = &self.query {
            config.query.strategy = QueryStrategy::Fixed;
            config.query.fixed_term = query.clone();
        }
    }

    /// Load layered configuration, apply overrides and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or an override is invalid.
    pub fn load_config(&self) -> VerdantResult<VerdantConfig> {
        let mut config = VerdantConfig::load_with(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }
}

/// Process exit status for a finished run.
pub fn exit_code(report: &RunReport) -> ExitCode {
    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Run the posting loop once.
pub async fn run_post(cli: &Cli) -> ExitCode {
    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    info!(
        max_attempts = config.posting.max_attempts,
        strategy = %config.query.strategy,
        dry_run = cli.dry_run,
        "Starting verdant"
    );

    let services = Services::from_config(&config, cli.dry_run);
    let orchestrator = match Orchestrator::from_config(&config, services) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            error!(error = %e, "Failed to build orchestrator");
            return ExitCode::FAILURE;
        }
    };

    let report = orchestrator.run().await;
    if report.is_success() {
        info!(final_state = %report.final_state(), "Post successful!");
    } else {
        error!(
            final_state = %report.final_state(),
            attempts = report.attempts().len(),
            "Nothing was posted"
        );
    }
    exit_code(&report)
}

/// Print the curated search terms grouped by theme.
pub fn print_queries() {
    for (theme, terms) in TERM_GROUPS {
        println!("{}:", theme);
        for term in terms.iter() {
            println!("  {}", term);
        }
    }
}
