use crate::storage::StorageObject;
use std::fmt;

/// Why an object was left out of every batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    InvalidMimeType { mime_type: String },
    FileTooLarge { size: u64, max: u64 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidMimeType { mime_type } => {
                write!(f, "Invalid Mime Type {}", mime_type)
            }
            SkipReason::FileTooLarge { size, max } => write!(
                f,
                "File size must be less than {} bytes. File size is {} bytes",
                max, size
            ),
        }
    }
}

/// Receives a notice for every object dropped during batching
pub trait SkipObserver {
    fn skipped(&self, object: &StorageObject, reason: &SkipReason);
}

/// Reports skipped files as `tracing` warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SkipObserver for TracingObserver {
    fn skipped(&self, object: &StorageObject, reason: &SkipReason) {
        tracing::warn!(file = %object.name, "Skipping file {}. {}.", object.name, reason);
    }
}

/// Discards all skip notices
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SkipObserver for NullObserver {
    fn skipped(&self, _object: &StorageObject, _reason: &SkipReason) {}
}

impl<F> SkipObserver for F
where
    F: Fn(&StorageObject, &SkipReason),
{
    fn skipped(&self, object: &StorageObject, reason: &SkipReason) {
        self(object, reason)
    }
}
