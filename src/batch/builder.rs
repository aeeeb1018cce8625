// builder.rs - groups listed objects into batch request inputs
use super::{
    BatchDocumentsInputConfig, BatchError, GcsDocument, SkipObserver, SkipReason, TracingObserver,
};
use crate::config::BatchConfig;
use crate::storage::{ObjectLister, StorageObject};

/// Splits the objects under a bucket prefix into fixed-size batches
pub struct BatchBuilder<'a, L: ObjectLister> {
    lister: &'a L,
    config: BatchConfig,
    observer: Box<dyn SkipObserver + 'a>,
}

impl<'a, L: ObjectLister> BatchBuilder<'a, L> {
    /// Create a builder with default limits and `tracing` skip warnings
    pub fn new(lister: &'a L) -> Self {
        Self {
            lister,
            config: BatchConfig::default(),
            observer: Box::new(TracingObserver),
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of documents per batch
    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size;
        self
    }

    /// Route skip notices somewhere other than the log
    pub fn observer(mut self, observer: impl SkipObserver + 'a) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// List `bucket`/`prefix` and group accepted objects into batches
    ///
    /// Directory placeholders are dropped silently; objects with an unknown
    /// MIME type or above the size limit are reported to the observer. Every
    /// batch but the last holds exactly `batch_size` documents, and listing
    /// order is preserved.
    ///
    /// # Errors
    /// `InvalidBatchSize` before any listing call when the size is out of
    /// range; `Listing` with the lister's error as soon as it fails.
    pub fn create_batches(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<Vec<BatchDocumentsInputConfig>, BatchError<L::Error>> {
        self.config.validate()?;
        let batch_size = self.config.batch_size;

        let objects = self
            .lister
            .list(bucket, prefix)
            .map_err(BatchError::Listing)?;

        let mut batches = Vec::new();
        let mut batch = Vec::with_capacity(batch_size);
        let mut skipped = 0usize;

        for object in objects {
            let object = object.map_err(BatchError::Listing)?;

            if object.is_directory_placeholder() {
                tracing::trace!(name = %object.name, "Skipping directory placeholder");
                continue;
            }

            if let Some(reason) = self.rejection(&object) {
                self.observer.skipped(&object, &reason);
                skipped += 1;
                continue;
            }

            batch.push(GcsDocument::from_object(
                bucket,
                &object.name,
                object.content_type,
            ));

            if batch.len() == batch_size {
                let full = std::mem::replace(&mut batch, Vec::with_capacity(batch_size));
                batches.push(BatchDocumentsInputConfig::new(full));
            }
        }

        // Last batch may be short
        if !batch.is_empty() {
            batches.push(BatchDocumentsInputConfig::new(batch));
        }

        tracing::debug!(
            bucket,
            prefix,
            batches = batches.len(),
            documents = batches.iter().map(|b| b.len()).sum::<usize>(),
            skipped,
            "Created batches"
        );

        Ok(batches)
    }

    fn rejection(&self, object: &StorageObject) -> Option<SkipReason> {
        if !self.config.accepts_mime_type(&object.content_type) {
            return Some(SkipReason::InvalidMimeType {
                mime_type: object.content_type.clone(),
            });
        }

        if object.size > self.config.max_file_size {
            return Some(SkipReason::FileTooLarge {
                size: object.size,
                max: self.config.max_file_size,
            });
        }

        None
    }
}

/// Batch `bucket`/`prefix` with default limits
///
/// `batch_size` falls back to `DEFAULT_BATCH_SIZE` when `None`. Skipped files
/// are reported as `tracing` warnings.
pub fn create_batches<L: ObjectLister>(
    lister: &L,
    bucket: &str,
    prefix: &str,
    batch_size: Option<usize>,
) -> Result<Vec<BatchDocumentsInputConfig>, BatchError<L::Error>> {
    let mut builder = BatchBuilder::new(lister);
    if let Some(size) = batch_size {
        builder = builder.batch_size(size);
    }
    builder.create_batches(bucket, prefix)
}
