//! File metadata records produced by a drop.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Metadata for one dragged file as reported by the platform.
pub struct FileDescriptor {
    /// File name without any directory component.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// Last-modified timestamp in Unix epoch milliseconds.
    pub last_modified: u64,
}

impl FileDescriptor {
    /// Creates a descriptor from its raw parts.
    pub fn new(name: impl Into<String>, size: u64, last_modified: u64) -> Self {
        Self {
            name: name.into(),
            size,
            last_modified,
        }
    }

    /// Stable key for keyed list rendering.
    ///
    /// Two drops of the same file produce the same key; files sharing a name but modified at
    /// different times do not.
    pub fn list_key(&self) -> String {
        format!("{}_{}", self.name, self.last_modified)
    }
}
