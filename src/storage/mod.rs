mod local;
mod memory;
mod object;

#[cfg(test)]
mod tests;

pub use local::{LocalStorage, LocalStorageError};
pub use memory::MemoryStorage;
pub use object::StorageObject;

/// Lazy stream of listed objects; each item may fail independently
pub type ObjectStream<'a, E> = Box<dyn Iterator<Item = Result<StorageObject, E>> + 'a>;

/// Capability to list the objects stored under a bucket prefix
pub trait ObjectLister {
    type Error: std::error::Error + 'static;

    /// List objects in `bucket` whose names start with `prefix`
    ///
    /// # Arguments
    /// * `bucket` - Bucket name without scheme (e.g., "invoices")
    /// * `prefix` - Object name prefix (e.g., "2024/march/"), may be empty
    ///
    /// # Returns
    /// Objects in listing order. No ordering is guaranteed across backends.
    fn list(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<ObjectStream<'_, Self::Error>, Self::Error>;
}
