//! The fixed set of previewable files.

use serde::Serialize;

use crate::error::CatalogError;

/// A previewable file and the location it is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FileDescriptor {
    /// Unique identifier, used as the selection key.
    pub id: &'static str,
    /// Label shown in the selector.
    pub name: &'static str,
    /// Path requested relative to the server origin.
    pub path: &'static str,
}

/// Every file the selector offers, in display order.
pub static FILES: [FileDescriptor; 3] = [
    FileDescriptor {
        id: "project-logic",
        name: "Test.2readme.txt",
        path: "/files/Web-1.txt",
    },
    FileDescriptor {
        id: "api-sample",
        name: "API-Sample.txt",
        path: "/files/Web-2.txt",
    },
    FileDescriptor {
        id: "sql-schema",
        name: "SQL-Schema.txt",
        path: "/files/Web-3.txt",
    },
];

/// Read-only view over a list of file descriptors.
///
/// The default catalog is backed by [`FILES`]. Tests may build a catalog
/// over their own slice to exercise lookups that miss.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    files: &'static [FileDescriptor],
}

impl Catalog {
    /// Catalog over an arbitrary static slice.
    pub const fn new(files: &'static [FileDescriptor]) -> Self {
        Self { files }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate entries in display order.
    pub fn iter(&self) -> std::slice::Iter<'static, FileDescriptor> {
        self.files.iter()
    }

    /// Entry at a display position.
    pub fn get(&self, index: usize) -> Option<&'static FileDescriptor> {
        self.files.get(index)
    }

    /// Find an entry by id.
    pub fn find(&self, id: &str) -> Option<&'static FileDescriptor> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Find an entry by id, failing with [`CatalogError::UnknownFile`].
    pub fn lookup(&self, id: &str) -> Result<&'static FileDescriptor, CatalogError> {
        self.find(id).ok_or_else(|| CatalogError::UnknownFile { id: id.to_string() })
    }

    /// Display position of an entry.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.files.iter().position(|f| f.id == id)
    }

    /// Display name for an id, if known.
    pub fn name_of(&self, id: &str) -> Option<&'static str> {
        self.find(id).map(|f| f.name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&FILES)
    }
}
