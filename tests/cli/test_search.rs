//! Tests for the search CLI command
//!
//! Covers valid queries, empty results, empty query, limit
//! clamping, and output format variations.

use crate::cli::test_helpers::{create_notes, notes_fixture, test_config};
use mdsift::cli::commands::search::{execute, SearchArgs};
use mdsift::cli::OutputFormat;

fn args(query: &str, path: std::path::PathBuf) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        paths: vec![path],
        limit: None,
        headings_only: false,
        include: vec![],
        exclude: vec![],
    }
}

#[test]
fn test_search_valid_query_human() {
    let notes = create_notes(&notes_fixture());

    let result = execute(
        args("thread", notes.path().to_path_buf()),
        &test_config(),
        OutputFormat::Human,
    );
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

#[test]
fn test_search_valid_query_json() {
    let notes = create_notes(&notes_fixture());

    let result = execute(
        args("immutable", notes.path().to_path_buf()),
        &test_config(),
        OutputFormat::Json,
    );
    assert!(
        result.is_ok(),
        "JSON search should succeed: {:?}",
        result.err()
    );
}

#[test]
fn test_search_no_matches_exits_ok() {
    let notes = create_notes(&notes_fixture());

    // Zero matches is success, not an error
    let result = execute(
        args("nonexistent_keyword_xyz", notes.path().to_path_buf()),
        &test_config(),
        OutputFormat::Human,
    );
    assert!(result.is_ok());
}

#[test]
fn test_search_empty_query_matches_everything() {
    let notes = create_notes(&notes_fixture());

    let result = execute(
        args("", notes.path().to_path_buf()),
        &test_config(),
        OutputFormat::Json,
    );
    assert!(result.is_ok());
}

#[test]
fn test_search_headings_only() {
    let notes = create_notes(&notes_fixture());

    let mut a = args("strings", notes.path().to_path_buf());
    a.headings_only = true;

    let result = execute(a, &test_config(), OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_search_limit_clamped() {
    let notes = create_notes(&notes_fixture());

    // Zero limit is clamped to 1 rather than rejected
    let mut a = args("", notes.path().to_path_buf());
    a.limit = Some(0);

    let result = execute(a, &test_config(), OutputFormat::Human);
    assert!(result.is_ok());
}

#[test]
fn test_search_missing_path_fails() {
    let result = execute(
        args("anything", std::path::PathBuf::from("/no/such/notes.md")),
        &test_config(),
        OutputFormat::Human,
    );
    assert!(result.is_err(), "Build over a missing path should fail");

    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("/no/such/notes.md"),
        "Error should name the path: {}",
        err_msg
    );
}

#[test]
fn test_search_include_override() {
    let notes = create_notes(&[
        ("a.md", "# Markdown\nkeyword\n"),
        ("b.rst", "# Rst\nkeyword\n"),
    ]);

    let mut a = args("keyword", notes.path().to_path_buf());
    a.include = vec!["*.rst".to_string()];

    let result = execute(a, &test_config(), OutputFormat::Json);
    assert!(result.is_ok());
}
