//! Tests for command-line parsing and configuration overrides.

use clap::Parser;
use verdant::{Cli, Commands, QuerySelector, QueryStrategy, SearchQuery};

#[test]
fn test_no_subcommand_means_post() {
    let cli = Cli::try_parse_from(["verdant"]).unwrap();
    assert_eq!(cli.command(), Commands::Post);
    assert!(!cli.dry_run);
    assert!(!cli.verbose);
}

#[test]
fn test_queries_subcommand() {
    let cli = Cli::try_parse_from(["verdant", "queries"]).unwrap();
    assert_eq!(cli.command(), Commands::Queries);
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["verdant", "post", "--dry-run", "-v", "--max-attempts", "3"])
        .unwrap();
    assert_eq!(cli.command(), Commands::Post);
    assert!(cli.dry_run);
    assert!(cli.verbose);
    assert_eq!(cli.max_attempts, Some(3));
}

#[test]
fn test_invalid_max_attempts_rejected_by_parser() {
    assert!(Cli::try_parse_from(["verdant", "--max-attempts", "many"]).is_err());
}

#[test]
fn test_query_override_forces_fixed_strategy() {
    let cli = Cli::try_parse_from(["verdant", "--query", "aurora"]).unwrap();
    let mut config = verdant::VerdantConfig::default();
    cli.apply_overrides(&mut config);

    assert_eq!(config.query.strategy, QueryStrategy::Fixed);
    assert_eq!(
        config.query_selector().unwrap(),
        QuerySelector::Fixed(SearchQuery::from("aurora"))
    );
}

#[test]
fn test_config_file_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[posting]\nmax_attempts = 4\nbackoff_ms = 100\n").unwrap();

    let cli = Cli::try_parse_from([
        "verdant",
        "--config",
        path.to_str().unwrap(),
        "--max-attempts",
        "2",
    ])
    .unwrap();
    let config = cli.load_config().unwrap();

    assert_eq!(config.posting.max_attempts, 2);
    assert_eq!(config.posting.backoff_ms, 100);
}

#[test]
fn test_zero_max_attempts_override_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "").unwrap();

    let cli = Cli::try_parse_from([
        "verdant",
        "--config",
        path.to_str().unwrap(),
        "--max-attempts",
        "0",
    ])
    .unwrap();
    assert!(cli.load_config().is_err());
}

#[test]
fn test_blank_query_override_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "").unwrap();

    let cli = Cli::try_parse_from(["verdant", "--config", path.to_str().unwrap(), "--query", " "])
        .unwrap();
    assert!(cli.load_config().is_err());
}
