//! Loader integration tests
//!
//! Directory walking, pattern filtering, and the all-or-nothing
//! build contract.

use std::fs;
use std::path::PathBuf;

use mdsift::core::loader::Loader;
use mdsift::SiftError;
use tempfile::TempDir;

fn create_notes_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full_path = temp_dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }
    temp_dir
}

fn md_loader() -> Loader {
    Loader::new(
        vec!["*.md".to_string()],
        vec!["**/.git/**".to_string()],
        10,
    )
    .unwrap()
}

#[test]
fn test_directory_build_end_to_end() {
    let dir = create_notes_dir(&[
        ("week1/day1.md", "# Strings\nimmutable\n"),
        ("week1/day2.md", "# GC\n## Generations\nyoung and old\n"),
        ("week2/day8.md", "# Streams\nlazy pipelines\n"),
        ("scratch.txt", "not matched by *.md"),
    ]);

    let (index, stats) = md_loader()
        .build_index(&[dir.path().to_path_buf()])
        .unwrap();

    assert_eq!(stats.documents, 3);
    assert_eq!(stats.sections, 4);

    // Names are root-relative and ids follow sorted path order
    let names: Vec<_> = index.documents().iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["week1/day1.md", "week1/day2.md", "week2/day8.md"]);
}

#[test]
fn test_search_spans_documents_in_build_order() {
    let dir = create_notes_dir(&[
        ("a.md", "# Intro\nshared topic\n"),
        ("b.md", "# Intro\nshared topic\n"),
    ]);

    let (index, _) = md_loader()
        .build_index(&[dir.path().to_path_buf()])
        .unwrap();

    let hits: Vec<_> = index.search("shared").collect();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].doc_name, "a.md");
    assert_eq!(hits[1].doc_name, "b.md");
}

#[test]
fn test_unreadable_file_aborts_whole_build() {
    let missing = PathBuf::from("/nonexistent/java-notes.md");
    let err = md_loader().build_index(&[missing]).unwrap_err();

    assert!(matches!(err, SiftError::Io { .. }));
    assert!(err.message().contains("java-notes.md"));
}

#[test]
fn test_mixed_roots_and_files() {
    let dir = create_notes_dir(&[("inside.md", "# In\n")]);
    let extra = create_notes_dir(&[("extra.txt", "# Out\nbody\n")]);
    let extra_file = extra.path().join("extra.txt");

    // Explicit files bypass include patterns
    let (index, stats) = md_loader()
        .build_index(&[dir.path().to_path_buf(), extra_file])
        .unwrap();

    assert_eq!(stats.documents, 2);
    assert_eq!(index.section_count(), 2);
}

#[test]
fn test_excluded_subtree_skipped() {
    let dir = create_notes_dir(&[
        ("keep.md", "# Keep\n"),
        (".git/objects/blob.md", "# Hidden\n"),
    ]);

    let (_, stats) = md_loader()
        .build_index(&[dir.path().to_path_buf()])
        .unwrap();

    assert_eq!(stats.documents, 1);
}

#[test]
fn test_empty_files_yield_zero_section_documents() {
    let dir = create_notes_dir(&[("empty.md", ""), ("full.md", "# One\n")]);

    let (index, stats) = md_loader()
        .build_index(&[dir.path().to_path_buf()])
        .unwrap();

    // Empty input parses to a zero-section document, not a failure
    assert_eq!(stats.documents, 2);
    assert_eq!(index.section_count(), 1);
    assert!(index.documents()[0].sections.is_empty());
}
