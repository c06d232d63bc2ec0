//! Tests for the extract subcommand.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_extract_defaults() {
    match parse(&["xurls", "extract"]) {
        CliCommand::Extract {
            list,
            concurrency,
            unique,
            with_scheme,
            with_scheme_pattern,
            with_host,
            with_host_pattern,
        } => {
            assert!(list.is_none());
            assert!(concurrency.is_none());
            assert!(!unique);
            assert!(!with_scheme);
            assert!(with_scheme_pattern.is_none());
            assert!(!with_host);
            assert!(with_host_pattern.is_none());
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_filters() {
    match parse(&[
        "xurls",
        "extract",
        "--with-scheme",
        "--with-scheme-pattern",
        "https?",
        "--with-host",
        "--with-host-pattern",
        r"(\w+\.)*example\.com",
        "-l",
        "page.html",
        "--unique",
    ]) {
        CliCommand::Extract {
            list,
            unique,
            with_scheme,
            with_scheme_pattern,
            with_host,
            with_host_pattern,
            ..
        } => {
            assert_eq!(list.as_deref(), Some(std::path::Path::new("page.html")));
            assert!(unique);
            assert!(with_scheme);
            assert_eq!(with_scheme_pattern.as_deref(), Some("https?"));
            assert!(with_host);
            assert_eq!(with_host_pattern.as_deref(), Some(r"(\w+\.)*example\.com"));
        }
        _ => panic!("expected Extract with filters"),
    }
}

#[test]
fn cli_parse_extract_aliases() {
    for alias in ["discover", "e"] {
        match parse(&["xurls", alias, "-c", "4"]) {
            CliCommand::Extract { concurrency, .. } => assert_eq!(concurrency, Some(4)),
            _ => panic!("expected Extract via {alias}"),
        }
    }
}
