//! Collection Entity
//!
//! Describes the content being published as a list of file patterns, each
//! carrying an attribute set.

use crate::domain::value_objects::Attributes;

/// One file-pattern → attributes association
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    /// Glob pattern relative to the source root (`*.jpg`)
    pub file: String,
    pub attributes: Attributes,
}

impl FileEntry {
    pub fn new(file: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            file: file.into(),
            attributes,
        }
    }
}

/// Ordered set of file entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub files: Vec<FileEntry>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FileEntry) {
        self.files.push(entry);
    }

    /// Look up an entry by its exact pattern
    pub fn entry(&self, pattern: &str) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.file == pattern)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
