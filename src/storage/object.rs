use serde::{Deserialize, Serialize};

/// Metadata for a single object returned by a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageObject {
    /// Object name relative to the bucket (e.g., "scans/a.pdf")
    pub name: String,
    /// MIME type recorded for the object
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
}

impl StorageObject {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
        }
    }

    /// Folder markers are zero-content objects named with a trailing slash
    pub fn is_directory_placeholder(&self) -> bool {
        self.name.ends_with('/')
    }
}
