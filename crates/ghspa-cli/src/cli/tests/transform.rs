//! Tests for redirect, resolve, simulate, roundtrip.

use super::parse;
use crate::cli::{CliCommand, HostingArgs};
use ghspa_core::ShimConfig;

#[test]
fn cli_parse_redirect() {
    match parse(&["ghspa", "redirect", "https://user.github.io/repo/a"]) {
        CliCommand::Redirect { url, hosting } => {
            assert_eq!(url, "https://user.github.io/repo/a");
            assert!(!hosting.user_pages);
        }
        _ => panic!("expected Redirect"),
    }
}

#[test]
fn cli_parse_resolve_user_pages() {
    match parse(&["ghspa", "resolve", "https://h.io/?p=/a", "--user-pages"]) {
        CliCommand::Resolve { url, hosting } => {
            assert_eq!(url, "https://h.io/?p=/a");
            assert!(hosting.user_pages);
        }
        _ => panic!("expected Resolve with --user-pages"),
    }
}

#[test]
fn cli_parse_simulate_title() {
    match parse(&["ghspa", "simulate", "https://h.io/repo/a", "--title", "404"]) {
        CliCommand::Simulate { url, title, .. } => {
            assert_eq!(url, "https://h.io/repo/a");
            assert_eq!(title.as_deref(), Some("404"));
        }
        _ => panic!("expected Simulate"),
    }
}

#[test]
fn cli_parse_simulate_without_title() {
    match parse(&["ghspa", "simulate", "https://h.io/repo/a"]) {
        CliCommand::Simulate { title, .. } => assert!(title.is_none()),
        _ => panic!("expected Simulate"),
    }
}

#[test]
fn cli_parse_roundtrip() {
    match parse(&["ghspa", "roundtrip", "https://h.io/repo/a?x=1"]) {
        CliCommand::Roundtrip { url, .. } => assert_eq!(url, "https://h.io/repo/a?x=1"),
        _ => panic!("expected Roundtrip"),
    }
}

#[test]
fn user_pages_flag_overrides_config() {
    let cfg = ShimConfig::default();
    assert!(!HostingArgs { user_pages: true }.apply(cfg.clone()).project_pages);
    assert!(HostingArgs { user_pages: false }.apply(cfg).project_pages);
}
