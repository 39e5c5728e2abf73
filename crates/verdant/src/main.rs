//! Verdant CLI binary.
//!
//! - `verdant` / `verdant post`: publish one captioned nature photo
//! - `verdant queries`: list the curated search terms

use clap::Parser;
use std::process::ExitCode;
use verdant::{Cli, Commands, init_tracing, print_queries, run_post};

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may come from a .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command() {
        Commands::Post => run_post(&cli).await,
        Commands::Queries => {
            print_queries();
            ExitCode::SUCCESS
        }
    }
}
