//! Index integration tests
//!
//! Build determinism, duplicate handling, range behavior of the
//! query operations, and shared read-only access.

use std::sync::Arc;
use std::thread;

use mdsift::core::index::IndexBuilder;
use mdsift::core::types::DocId;
use mdsift::SiftError;

fn build_notes_index() -> mdsift::Index {
    let mut builder = IndexBuilder::new();
    builder
        .add_document(
            "day1.md",
            "# Strings\nimmutable\n## Interning\nstring pool\n",
        )
        .unwrap();
    builder
        .add_document("day2.md", "# Concurrency\nThread and Runnable\n")
        .unwrap();
    builder
        .add_document("day3.md", "# Collections\nArrayList vs LinkedList\n")
        .unwrap();
    builder.build()
}

#[test]
fn test_build_twice_identical() {
    let a = build_notes_index();
    let b = build_notes_index();

    assert_eq!(a.flattened(), b.flattened());
    for (x, y) in a.documents().iter().zip(b.documents()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.name, y.name);
        assert_eq!(x.sections, y.sections);
    }
}

#[test]
fn test_shared_headings_are_not_duplicates() {
    let mut builder = IndexBuilder::new();
    builder.add_document("a.md", "# Intro\n# Details\n").unwrap();
    builder.add_document("b.md", "# Intro\n").unwrap();

    // Same section heading in both documents is fine; only the
    // document names must be unique
    let index = builder.build();
    assert_eq!(index.section_count(), 3);
}

#[test]
fn test_duplicate_document_name_fails_build() {
    let mut builder = IndexBuilder::new();
    builder.add_document("notes.md", "# A\n").unwrap();
    let err = builder.add_document("notes.md", "# B\n").unwrap_err();
    assert!(matches!(err, SiftError::DuplicateDocument(_)));
}

#[test]
fn test_lookups_across_full_range() {
    let index = build_notes_index();

    // Every in-range lookup succeeds
    for doc in index.documents() {
        assert!(index.document(doc.id).is_ok());
        for ordinal in 0..doc.sections.len() {
            assert!(index.section(doc.id, ordinal).is_ok());
        }
    }

    // Every out-of-range lookup is a recoverable not-found
    assert!(index.document(DocId(3)).unwrap_err().is_not_found());
    assert!(index.section(DocId(0), 2).unwrap_err().is_not_found());
    assert!(index.section(DocId(99), 0).unwrap_err().is_not_found());

    // Failed queries leave the index usable
    assert!(index.document(DocId(0)).is_ok());
}

#[test]
fn test_search_case_insensitive_across_documents() {
    let index = build_notes_index();

    let hits: Vec<_> = index.search("thread").collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].doc_name, "day2.md");

    let upper: Vec<_> = index.search("THREAD").collect();
    assert_eq!(upper.len(), 1);
}

#[test]
fn test_search_empty_needle_is_identity() {
    let index = build_notes_index();
    let all: Vec<_> = index.search("").collect();
    assert_eq!(all.len(), index.section_count());

    // Exactly once each, in flattened order
    let ranks: Vec<_> = all.iter().map(|h| h.rank).collect();
    let expected: Vec<_> = (0..index.section_count()).collect();
    assert_eq!(ranks, expected);
}

#[test]
fn test_search_lazy_iterator_supports_early_stop() {
    let index = build_notes_index();
    let first = index.search("").next();
    assert!(first.is_some());
    assert_eq!(first.unwrap().rank, 0);
}

#[test]
fn test_parallel_readers_share_one_index() {
    let index = Arc::new(build_notes_index());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                for _ in 0..50 {
                    let hits = index.search("i").count();
                    assert!(hits > 0);
                    let doc = index.document(DocId(i % 3)).unwrap();
                    assert!(!doc.name.is_empty());
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
