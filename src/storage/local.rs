use super::{ObjectLister, ObjectStream, StorageObject};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Content type recorded for folder placeholder objects
const DIRECTORY_CONTENT_TYPE: &str = "application/x-directory";

#[derive(Error, Debug)]
pub enum LocalStorageError {
    #[error("Invalid bucket name: {0}")]
    InvalidBucket(String),

    #[error("Bucket not found: {}", .0.display())]
    BucketNotFound(PathBuf),

    #[error("Failed to walk bucket directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Object lister backed by a directory tree
///
/// Every immediate subdirectory of `root` is a bucket. Object names are the
/// slash-separated paths below the bucket directory, and subdirectories show
/// up as `name/` placeholders the way folder markers do in Cloud Storage.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a bucket to its directory under `root`
    ///
    /// The name must be exactly one normal path component, so a bucket can
    /// never point outside `root`.
    pub fn bucket_dir(&self, bucket: &str) -> Result<PathBuf, LocalStorageError> {
        let mut components = Path::new(bucket).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(bucket)),
            _ => Err(LocalStorageError::InvalidBucket(bucket.to_string())),
        }
    }

    /// Heuristic MIME detection from extension
    pub fn guess_mime_type(path: &Path) -> &'static str {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => "application/pdf",
            "bmp" => "image/bmp",
            "gif" => "image/gif",
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "tif" | "tiff" => "image/tiff",
            "webp" => "image/webp",
            "json" => "application/json",
            "txt" => "text/plain",
            "html" | "htm" => "text/html",
            "csv" => "text/csv",
            _ => "application/octet-stream",
        }
    }

    /// Slash-separated object name of `path` relative to the bucket
    fn object_name(bucket_dir: &Path, path: &Path) -> String {
        path.strip_prefix(bucket_dir)
            .unwrap_or(path)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Whether the directory `name` can hold objects matching `prefix`
    fn dir_in_scope(name: &str, prefix: &str) -> bool {
        let dir = format!("{}/", name);
        dir.starts_with(prefix) || prefix.starts_with(&dir)
    }

    fn to_object(bucket_dir: &Path, entry: &DirEntry) -> Result<StorageObject, LocalStorageError> {
        let mut name = Self::object_name(bucket_dir, entry.path());

        if entry.file_type().is_dir() {
            name.push('/');
            return Ok(StorageObject::new(name, DIRECTORY_CONTENT_TYPE, 0));
        }

        let size = entry.metadata()?.len();
        Ok(StorageObject::new(
            name,
            Self::guess_mime_type(entry.path()),
            size,
        ))
    }
}

impl ObjectLister for LocalStorage {
    type Error = LocalStorageError;

    fn list(
        &self,
        bucket: &str,
        prefix: &str,
    ) -> Result<ObjectStream<'_, LocalStorageError>, LocalStorageError> {
        let bucket_dir = self.bucket_dir(bucket)?;
        if !bucket_dir.is_dir() {
            return Err(LocalStorageError::BucketNotFound(bucket_dir));
        }

        let prefix = prefix.to_string();
        let scope_dir = bucket_dir.clone();
        let scope_prefix = prefix.clone();

        // Never descend into directories that cannot match the prefix
        let walker = WalkDir::new(&bucket_dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                !entry.file_type().is_dir()
                    || Self::dir_in_scope(
                        &Self::object_name(&scope_dir, entry.path()),
                        &scope_prefix,
                    )
            });

        Ok(Box::new(walker.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // Failures on paths outside the prefix are not ours to report
                    let in_scope = err.path().map_or(true, |path| {
                        let name = Self::object_name(&bucket_dir, path);
                        name.is_empty()
                            || name.starts_with(&prefix)
                            || Self::dir_in_scope(&name, &prefix)
                    });
                    return in_scope.then(|| Err(LocalStorageError::from(err)));
                }
            };

            match Self::to_object(&bucket_dir, &entry) {
                Ok(object) if !object.name.starts_with(&prefix) => None,
                other => Some(other),
            }
        })))
    }
}
