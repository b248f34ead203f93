//! CLI parse tests.

mod transform;

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_completions() {
    match parse(&["ghspa", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from([
        "ghspa",
        "redirect",
        "https://h.io/a",
        "--config",
        "/tmp/ghspa.toml",
    ])
    .unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/ghspa.toml"))
    );
}

#[test]
fn cli_rejects_missing_url() {
    assert!(Cli::try_parse_from(["ghspa", "redirect"]).is_err());
}
