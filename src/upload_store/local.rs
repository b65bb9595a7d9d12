use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};

use super::{public_url, UploadStore, UploadStoreError, UploadedFile};

/// Writes uploads into a shared directory on the local filesystem.
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, std::io::Error> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn object_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }
}

#[async_trait]
impl UploadStore for LocalStore {
    async fn put(&self, name: &str, data: Bytes) -> Result<UploadedFile, UploadStoreError> {
        let path = self.object_path(name);
        tokio::fs::write(&path, &data).await?;
        Ok(UploadedFile {
            generated_name: name.to_string(),
            storage_path: path,
            public_url: public_url(name),
        })
    }
}
