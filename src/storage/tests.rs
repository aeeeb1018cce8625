use super::*;
use std::fs;
use std::path::Path;

fn names<L: ObjectLister>(lister: &L, bucket: &str, prefix: &str) -> Vec<String> {
    lister
        .list(bucket, prefix)
        .unwrap()
        .map(|object| object.unwrap().name)
        .collect()
}

#[test]
fn test_directory_placeholder_detection() {
    assert!(StorageObject::new("scans/", "", 0).is_directory_placeholder());
    assert!(!StorageObject::new("scans/a.pdf", "application/pdf", 10).is_directory_placeholder());
    assert!(!StorageObject::new("scans", "", 0).is_directory_placeholder());
}

#[test]
fn test_memory_storage_preserves_insertion_order() {
    let storage = MemoryStorage::new()
        .with_object("bucket", StorageObject::new("b.pdf", "application/pdf", 1))
        .with_object("bucket", StorageObject::new("a.pdf", "application/pdf", 1))
        .with_object("bucket", StorageObject::new("c.pdf", "application/pdf", 1));

    assert_eq!(storage.object_count("bucket"), 3);
    assert_eq!(names(&storage, "bucket", ""), vec!["b.pdf", "a.pdf", "c.pdf"]);
}

#[test]
fn test_memory_storage_prefix_filter() {
    let storage = MemoryStorage::new()
        .with_object("bucket", StorageObject::new("in/a.pdf", "application/pdf", 1))
        .with_object("bucket", StorageObject::new("out/b.pdf", "application/pdf", 1))
        .with_object("bucket", StorageObject::new("inbox/c.pdf", "application/pdf", 1));

    // Plain string prefix, not a directory match
    assert_eq!(names(&storage, "bucket", "in"), vec!["in/a.pdf", "inbox/c.pdf"]);
    assert_eq!(names(&storage, "bucket", "in/"), vec!["in/a.pdf"]);
}

#[test]
fn test_memory_storage_unknown_bucket_is_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.object_count("missing"), 0);
    assert!(names(&storage, "missing", "").is_empty());
}

#[test]
fn test_guess_mime_type() {
    let test_cases = vec![
        ("a.pdf", "application/pdf"),
        ("a.PDF", "application/pdf"),
        ("a.jpg", "image/jpeg"),
        ("a.jpeg", "image/jpeg"),
        ("a.tif", "image/tiff"),
        ("a.webp", "image/webp"),
        ("a.txt", "text/plain"),
        ("Makefile", "application/octet-stream"),
    ];

    for (path, expected) in test_cases {
        assert_eq!(
            LocalStorage::guess_mime_type(Path::new(path)),
            expected,
            "Failed for {}",
            path
        );
    }
}

#[test]
fn test_local_storage_lists_bucket() {
    let dir = tempfile::tempdir().unwrap();
    let bucket = dir.path().join("docs");
    fs::create_dir_all(bucket.join("scans")).unwrap();
    fs::write(bucket.join("scans/b.pdf"), b"%PDF-1.7").unwrap();
    fs::write(bucket.join("scans/a.png"), b"png").unwrap();
    fs::write(bucket.join("notes.txt"), b"hello").unwrap();

    let storage = LocalStorage::new(dir.path());
    let objects: Vec<StorageObject> = storage
        .list("docs", "")
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    let listed: Vec<&str> = objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(listed, vec!["notes.txt", "scans/", "scans/a.png", "scans/b.pdf"]);

    assert!(objects[1].is_directory_placeholder());
    assert_eq!(objects[0].content_type, "text/plain");
    assert_eq!(objects[0].size, 5);
    assert_eq!(objects[3].content_type, "application/pdf");
    assert_eq!(objects[3].size, 8);
}

#[test]
fn test_local_storage_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let bucket = dir.path().join("docs");
    fs::create_dir_all(bucket.join("scans")).unwrap();
    fs::write(bucket.join("scans/a.pdf"), b"a").unwrap();
    fs::write(bucket.join("other.pdf"), b"b").unwrap();

    let storage = LocalStorage::new(dir.path());
    assert_eq!(names(&storage, "docs", "scans/"), vec!["scans/", "scans/a.pdf"]);
}

#[test]
fn test_local_storage_missing_bucket() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path());

    let result = storage.list("nope", "");
    assert!(matches!(result, Err(LocalStorageError::BucketNotFound(_))));
}

#[test]
fn test_local_storage_rejects_bucket_outside_root() {
    let root = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    fs::write(outside.path().join("secret.pdf"), b"%PDF").unwrap();
    fs::create_dir_all(root.path().join("docs")).unwrap();

    let storage = LocalStorage::new(root.path());
    let absolute = outside.path().to_str().unwrap().to_string();

    for bucket in [absolute.as_str(), "../docs", "..", "", "/", ".", "docs/../docs", "a/b"] {
        let result = storage.list(bucket, "");
        assert!(
            matches!(result, Err(LocalStorageError::InvalidBucket(ref name)) if name == bucket),
            "Failed for {:?}",
            bucket
        );
    }
}

#[test]
fn test_bucket_dir_resolves_under_root() {
    let storage = LocalStorage::new("/data");
    assert_eq!(storage.bucket_dir("docs").unwrap(), Path::new("/data/docs"));
    assert!(storage.bucket_dir("/etc").is_err());

    let err = storage.bucket_dir("../etc").unwrap_err();
    assert_eq!(err.to_string(), "Invalid bucket name: ../etc");
}

#[test]
fn test_local_storage_skips_directories_outside_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let bucket = dir.path().join("docs");
    fs::create_dir_all(bucket.join("in")).unwrap();
    fs::create_dir_all(bucket.join("inbox/deep")).unwrap();
    fs::create_dir_all(bucket.join("archive/2020")).unwrap();
    fs::write(bucket.join("in/a.pdf"), b"a").unwrap();
    fs::write(bucket.join("inbox/deep/b.pdf"), b"b").unwrap();
    fs::write(bucket.join("archive/2020/c.pdf"), b"c").unwrap();

    let storage = LocalStorage::new(dir.path());
    assert_eq!(
        names(&storage, "docs", "in"),
        vec!["in/", "in/a.pdf", "inbox/", "inbox/deep/", "inbox/deep/b.pdf"]
    );
    assert_eq!(names(&storage, "docs", "inbox/deep/b"), vec!["inbox/deep/b.pdf"]);
}

#[cfg(unix)]
#[test]
fn test_local_storage_unreadable_directory_outside_prefix() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let bucket = dir.path().join("docs");
    fs::create_dir_all(bucket.join("in")).unwrap();
    fs::create_dir_all(bucket.join("locked")).unwrap();
    fs::write(bucket.join("in/a.pdf"), b"a").unwrap();
    fs::write(bucket.join("locked/b.pdf"), b"b").unwrap();

    let locked = bucket.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let storage = LocalStorage::new(dir.path());
    let listed: Result<Vec<String>, _> = storage
        .list("docs", "in/")
        .unwrap()
        .map(|object| object.map(|o| o.name))
        .collect();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    assert_eq!(listed.unwrap(), vec!["in/", "in/a.pdf"]);
}
