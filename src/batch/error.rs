use crate::config::InvalidBatchSize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError<E> {
    #[error("Batch size must be between 1 and {max}. You provided {provided}.")]
    InvalidBatchSize { provided: usize, max: usize },

    /// Failure reported by the object lister, passed through as-is
    #[error(transparent)]
    Listing(E),
}

impl<E> BatchError<E> {
    /// The lister's own error, if that is what ended the run
    pub fn into_listing(self) -> Option<E> {
        match self {
            BatchError::Listing(err) => Some(err),
            BatchError::InvalidBatchSize { .. } => None,
        }
    }
}

impl<E> From<InvalidBatchSize> for BatchError<E> {
    fn from(err: InvalidBatchSize) -> Self {
        BatchError::InvalidBatchSize {
            provided: err.provided,
            max: err.max,
        }
    }
}
