mod local;

pub use local::LocalStore;

use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use thiserror::Error;

/// URL prefix under which the static file layer serves the upload directory.
pub const PUBLIC_PREFIX: &str = "/uploads/";

#[derive(Debug, Error)]
pub enum UploadStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored upload. Not linked to any catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub generated_name: String,
    pub storage_path: PathBuf,
    pub public_url: String,
}

/// Abstraction over upload storage backends.
/// Names are generated by the caller, see [`generate_name`].
#[async_trait]
pub trait UploadStore: Send + Sync {
    async fn put(&self, name: &str, data: Bytes) -> Result<UploadedFile, UploadStoreError>;
}

/// Extension of the client-supplied file name, including the leading dot.
/// Only the final path segment is considered; empty when it has no dot.
pub fn extension_of(original_name: &str) -> &str {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);
    match base.rfind('.') {
        Some(idx) => &base[idx..],
        None => "",
    }
}

/// Random v4 UUID token followed by the original extension.
pub fn generate_name(original_name: &str) -> String {
    format!("{}{}", uuid::Uuid::new_v4(), extension_of(original_name))
}

pub fn public_url(name: &str) -> String {
    format!("{PUBLIC_PREFIX}{name}")
}
