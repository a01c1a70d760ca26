//! Index construction and query operations.
//!
//! An [`IndexBuilder`] accumulates named documents, parsing each
//! one as it is added; [`IndexBuilder::build`] freezes the result
//! into an immutable [`Index`]. Because the index never mutates
//! after build, any number of reader threads may query it in
//! parallel without locking.
//!
//! Build is deterministic: adding the same documents in the same
//! order always yields the same id assignment and the same
//! flattened section ordering.

use std::collections::HashSet;

use crate::core::error::{Result, SiftError};
use crate::core::parser;
use crate::core::types::{DocId, Document, Hit, Section, SectionRef};

/// Accumulates documents for one index build.
#[derive(Default)]
pub struct IndexBuilder {
    documents: Vec<Document>,
    seen_names: HashSet<String>,
}

impl IndexBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and append it as the next document.
    ///
    /// Document ids are assigned by insertion order. Fails with
    /// [`SiftError::DuplicateDocument`] if `name` was already
    /// added; callers abort the build on any error.
    pub fn add_document(&mut self, name: impl Into<String>, text: &str) -> Result<()> {
        let name = name.into();
        if !self.seen_names.insert(name.clone()) {
            return Err(SiftError::DuplicateDocument(name));
        }

        let id = DocId(self.documents.len());
        let sections = parser::parse(text);
        tracing::debug!("Parsed {:?}: {} sections", name, sections.len());

        self.documents.push(Document { id, name, sections });
        Ok(())
    }

    /// Number of documents added so far
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True if no documents have been added
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Freeze the accumulated documents into an immutable index.
    pub fn build(self) -> Index {
        let flat = self
            .documents
            .iter()
            .flat_map(|doc| {
                (0..doc.sections.len()).map(|ordinal| SectionRef {
                    doc: doc.id,
                    ordinal,
                })
            })
            .collect();

        Index {
            documents: self.documents,
            flat,
        }
    }
}

/// Immutable, queryable aggregate of all parsed documents.
#[derive(Debug)]
pub struct Index {
    documents: Vec<Document>,
    flat: Vec<SectionRef>,
}

impl Index {
    /// Look up a document by id.
    pub fn document(&self, id: DocId) -> Result<&Document> {
        self.documents
            .get(id.0)
            .ok_or(SiftError::DocumentNotFound(id.0))
    }

    /// Look up a section by document id and per-document ordinal.
    pub fn section(&self, id: DocId, ordinal: usize) -> Result<&Section> {
        let doc = self.document(id)?;
        doc.sections
            .get(ordinal)
            .ok_or(SiftError::SectionNotFound {
                doc: id.0,
                ordinal,
            })
    }

    /// All documents in id order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Flattened section positions in build order
    pub fn flattened(&self) -> &[SectionRef] {
        &self.flat
    }

    /// Total section count across all documents
    pub fn section_count(&self) -> usize {
        self.flat.len()
    }

    /// Case-insensitive substring search over headings and bodies.
    ///
    /// Returns a lazy iterator of hits in flattened build order.
    /// The empty needle matches every section exactly once. No
    /// match yields an empty iterator, never an error.
    pub fn search<'a>(&'a self, needle: &str) -> impl Iterator<Item = Hit<'a>> + 'a {
        let needle = needle.to_lowercase();
        self.flat.iter().enumerate().filter_map(move |(rank, loc)| {
            let doc = &self.documents[loc.doc.0];
            let section = &doc.sections[loc.ordinal];
            let matches = needle.is_empty()
                || section.heading.to_lowercase().contains(&needle)
                || section.body.to_lowercase().contains(&needle);
            matches.then_some(Hit {
                rank,
                doc_name: &doc.name,
                loc: *loc,
                section,
            })
        })
    }
}
