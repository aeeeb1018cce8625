// config.rs - batch limits and accepted input formats
use std::collections::HashSet;
use thiserror::Error;

/// Files per batch when the caller doesn't ask for a size
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Hard ceiling on files per batch request
pub const MAX_BATCH_SIZE: usize = 50;

/// Largest file a batch request will accept (1 GiB)
pub const MAX_FILE_SIZE_BYTES: u64 = 1_073_741_824;

/// MIME types the batch API can process
pub const VALID_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/bmp",
    "image/gif",
    "image/jpeg",
    "image/png",
    "image/tiff",
    "image/webp",
];

/// Settings for a single batching run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub batch_size: usize,
    pub max_file_size: u64,
    pub valid_mime_types: HashSet<String>,
}

impl BatchConfig {
    pub fn new() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            max_file_size: MAX_FILE_SIZE_BYTES,
            valid_mime_types: VALID_MIME_TYPES.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Set the number of documents per batch
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Set the maximum individual file size in bytes
    pub fn max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Replace the accepted MIME types
    pub fn valid_mime_types<I, S>(mut self, mime_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_mime_types = mime_types.into_iter().map(Into::into).collect();
        self
    }

    /// Accept one more MIME type on top of the current set
    pub fn allow_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.valid_mime_types.insert(mime_type.into());
        self
    }

    pub fn accepts_mime_type(&self, mime_type: &str) -> bool {
        self.valid_mime_types.contains(mime_type)
    }

    /// Check the batch size against `MAX_BATCH_SIZE`.
    ///
    /// Zero is rejected too, since it could only ever produce empty batches.
    pub fn validate(&self) -> Result<(), InvalidBatchSize> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(InvalidBatchSize {
                provided: self.batch_size,
                max: MAX_BATCH_SIZE,
            });
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A batch size outside `1..=MAX_BATCH_SIZE`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Batch size must be between 1 and {max}. You provided {provided}.")]
pub struct InvalidBatchSize {
    pub provided: usize,
    pub max: usize,
}
