use super::{ObjectLister, ObjectStream, StorageObject};
use std::collections::HashMap;
use std::convert::Infallible;

/// In-process object store keyed by bucket name
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    buckets: HashMap<String, Vec<StorageObject>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object to a bucket, creating the bucket if needed
    pub fn insert(&mut self, bucket: impl Into<String>, object: StorageObject) {
        self.buckets.entry(bucket.into()).or_default().push(object);
    }

    /// Builder-style variant of `insert`
    pub fn with_object(mut self, bucket: impl Into<String>, object: StorageObject) -> Self {
        self.insert(bucket, object);
        self
    }

    /// Number of objects held in a bucket
    pub fn object_count(&self, bucket: &str) -> usize {
        self.buckets.get(bucket).map_or(0, Vec::len)
    }
}

impl ObjectLister for MemoryStorage {
    type Error = Infallible;

    fn list(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<ObjectStream<'_, Infallible>, Infallible> {
        let prefix = prefix.to_string();
        let objects = self.buckets.get(bucket).map(Vec::as_slice).unwrap_or(&[]);

        Ok(Box::new(
            objects
                .iter()
                .filter(move |object| object.name.starts_with(&prefix))
                .cloned()
                .map(Ok),
        ))
    }
}
