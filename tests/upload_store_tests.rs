use bytes::Bytes;
use infographic_catalog::upload_store::{generate_name, LocalStore, UploadStore, UploadStoreError};

#[tokio::test]
async fn test_local_store_put() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path()).unwrap();

    let stored = store
        .put("abc.png", Bytes::from("hello world"))
        .await
        .unwrap();

    assert_eq!(stored.generated_name, "abc.png");
    assert_eq!(stored.public_url, "/uploads/abc.png");
    assert_eq!(stored.storage_path, dir.path().join("abc.png"));
    assert_eq!(std::fs::read(&stored.storage_path).unwrap(), b"hello world");
}

#[tokio::test]
async fn test_local_store_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("shared").join("uploads");
    let store = LocalStore::new(&nested).unwrap();

    assert!(nested.is_dir());
    assert_eq!(store.base_path(), nested.as_path());
}

#[tokio::test]
async fn test_same_content_stored_twice() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path()).unwrap();
    let data = Bytes::from("identical");

    let first = store.put(&generate_name("logo.png"), data.clone()).await.unwrap();
    let second = store.put(&generate_name("logo.png"), data).await.unwrap();

    assert_ne!(first.public_url, second.public_url);
    assert!(first.storage_path.exists());
    assert!(second.storage_path.exists());
}

#[tokio::test]
async fn test_local_store_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("uploads");
    let store = LocalStore::new(&base).unwrap();
    std::fs::remove_dir_all(&base).unwrap();

    let result = store.put("lost.png", Bytes::from("data")).await;
    assert!(matches!(result, Err(UploadStoreError::Io(_))));
}
