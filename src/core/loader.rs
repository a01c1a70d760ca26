//! Input collection and index build orchestration.
//!
//! Walks directory trees with pattern-based filtering, reads the
//! selected files, and feeds them to an [`IndexBuilder`]. Walk
//! errors (unreadable subtrees) are logged and skipped, but a
//! failure to read a selected file is fatal to the whole build:
//! no partial index is ever exposed.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{Result, SiftError};
use crate::core::index::{Index, IndexBuilder};
use crate::core::types::BuildStats;

/// File collector with glob-based filtering
pub struct Loader {
    /// Patterns to include (e.g., "*.md")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "**/.git/**")
    exclude_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl Loader {
    /// Create a new loader.
    ///
    /// Fails with [`SiftError::Config`] if a glob pattern is
    /// invalid.
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        let include = compile_patterns(include_patterns, "include")?;
        let exclude = compile_patterns(exclude_patterns, "exclude")?;

        Ok(Self {
            include_patterns: include,
            exclude_patterns: exclude,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Collect all matching files under `root`, sorted by path.
    ///
    /// Sorting makes document id assignment independent of
    /// file-system enumeration order. Unreadable subtrees are
    /// logged and skipped; selection failures never abort the
    /// walk.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let walk = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            // Prune hidden and excluded directories early, but
            // never the root itself (temp dirs are often hidden)
            .filter_entry(|e| e.depth() == 0 || !self.prune_dir(e));

        let mut files = Vec::new();
        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };
            if entry.file_type().is_file() && self.selects(&entry) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Build an index from explicit paths and/or directory roots.
    ///
    /// Directories are walked with the configured patterns;
    /// explicitly listed files bypass pattern filtering. Document
    /// names are paths relative to their root where possible; when
    /// two roots contain the same relative path, later documents
    /// fall back to their full path so distinct files never
    /// collide.
    pub fn build_index(&self, paths: &[PathBuf]) -> Result<(Index, BuildStats)> {
        let start = Instant::now();
        let mut builder = IndexBuilder::new();
        let mut used_names: HashSet<String> = HashSet::new();

        for path in paths {
            if path.is_dir() {
                tracing::info!("Collecting files from {:?}", path);
                let files = self.collect_files(path)?;
                tracing::info!("Found {} files under {:?}", files.len(), path);

                for file in &files {
                    let name = document_name(file, path, &used_names);
                    used_names.insert(name.clone());
                    add_file(&mut builder, &name, file)?;
                }
            } else {
                let name = path.to_string_lossy().into_owned();
                used_names.insert(name.clone());
                add_file(&mut builder, &name, path)?;
            }
        }

        let documents = builder.len();
        let index = builder.build();
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Indexed {} documents ({} sections) in {}ms",
            documents,
            index.section_count(),
            duration_ms
        );

        let stats = BuildStats {
            documents,
            sections: index.section_count(),
            duration_ms,
        };

        Ok((index, stats))
    }

    /// True if a directory should be pruned from the walk: hidden
    /// (dot-named) or matching an exclude pattern.
    fn prune_dir(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_dir() {
            return false;
        }

        let hidden = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            return true;
        }

        let excluded = self
            .exclude_patterns
            .iter()
            .any(|p| p.matches_path(entry.path()));
        if excluded {
            tracing::debug!("Skipping excluded directory: {:?}", entry.path());
        }
        excluded
    }

    /// Decide whether one file enters the build: within the size
    /// cap, matched by the include patterns, and not excluded.
    fn selects(&self, entry: &DirEntry) -> bool {
        let path = entry.path();

        match entry.metadata() {
            Ok(meta) if meta.len() > self.max_file_size_bytes => {
                tracing::debug!("Skipping large file: {:?} ({} bytes)", path, meta.len());
                return false;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Could not stat {:?}: {}; size cap not applied", path, e);
            }
        }

        self.matches_include(path) && !self.excluded(path)
    }

    /// An empty include list matches everything. A pattern with a
    /// path separator is matched against the full path; a bare
    /// pattern like "*.md" is matched against the file name only.
    fn matches_include(&self, path: &Path) -> bool {
        if self.include_patterns.is_empty() {
            return true;
        }

        self.include_patterns.iter().any(|p| {
            if p.as_str().contains('/') {
                p.matches_path(path)
            } else {
                path.file_name()
                    .and_then(|f| f.to_str())
                    .is_some_and(|f| p.matches(f))
            }
        })
    }

    fn excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.iter().any(|p| p.matches_path(path))
    }
}

/// Compile glob strings, naming the offending pattern on failure
fn compile_patterns(patterns: Vec<String>, kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .into_iter()
        .map(|p| {
            Pattern::new(&p)
                .map_err(|e| SiftError::Config(format!("Invalid {kind} pattern '{p}': {e}")))
        })
        .collect()
}

/// Root-relative document name, falling back to the full path when
/// the relative name is already taken by an earlier root.
fn document_name(file: &Path, root: &Path, used: &HashSet<String>) -> String {
    let relative = file
        .strip_prefix(root)
        .unwrap_or(file)
        .to_string_lossy()
        .into_owned();
    if used.contains(&relative) {
        file.to_string_lossy().into_owned()
    } else {
        relative
    }
}

/// Read one file and add it to the builder. A read failure names
/// the offending path and fails the build.
fn add_file(builder: &mut IndexBuilder, name: &str, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).map_err(|source| SiftError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    builder.add_document(name, &text)
}
