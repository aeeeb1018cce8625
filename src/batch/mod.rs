mod builder;
mod error;
mod observer;
mod types;


pub use builder::{BatchBuilder, create_batches};
pub use error::BatchError;
pub use observer::{NullObserver, SkipObserver, SkipReason, TracingObserver};
pub use types::{BatchDocumentsInputConfig, GcsDocument, GcsDocuments};
