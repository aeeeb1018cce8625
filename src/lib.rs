// Public API exports
pub mod batch;
pub mod config;
pub mod processor;
pub mod storage;

// Re-export main types for convenience
pub use config::{
    BatchConfig, DEFAULT_BATCH_SIZE, InvalidBatchSize, MAX_BATCH_SIZE, MAX_FILE_SIZE_BYTES,
    VALID_MIME_TYPES,
};

pub use storage::{
    LocalStorage, LocalStorageError, MemoryStorage, ObjectLister, ObjectStream, StorageObject,
};

pub use batch::{
    BatchBuilder, BatchDocumentsInputConfig, BatchError, GcsDocument, GcsDocuments, NullObserver,
    SkipObserver, SkipReason, TracingObserver, create_batches,
};

pub use processor::{document_type_to_processor_type, supported_document_types};
