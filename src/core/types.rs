//! Domain data structures for mdsift.
//!
//! Documents and sections are plain value records: they are created
//! once at build time and never mutated afterward.

use serde::Serialize;

/// Stable identifier for a document, assigned by input order at
/// build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DocId(pub usize);

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One heading-delimited region of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading text without marker symbols
    pub heading: String,

    /// Nesting depth, 1 for top-level (length of the marker run)
    pub level: usize,

    /// All lines between this heading and the next, verbatim.
    /// Embedded code fragments are opaque text.
    pub body: String,
}

/// One parsed input unit corresponding to a single source file.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Build-order id
    pub id: DocId,

    /// Source name, unique within a build (path relative to the
    /// walk root)
    pub name: String,

    /// Sections in source order
    pub sections: Vec<Section>,
}

/// Position of a section: document id plus the section's ordinal
/// within that document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionRef {
    pub doc: DocId,
    pub ordinal: usize,
}

/// A single search match.
#[derive(Debug, Clone, Serialize)]
pub struct Hit<'a> {
    /// Position in the flattened build-order sequence
    pub rank: usize,
    pub doc_name: &'a str,
    #[serde(flatten)]
    pub loc: SectionRef,
    pub section: &'a Section,
}

/// Statistics from one index build
#[derive(Debug, Clone, Serialize)]
pub struct BuildStats {
    pub documents: usize,
    pub sections: usize,
    pub duration_ms: u64,
}
