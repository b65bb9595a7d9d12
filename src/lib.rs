//! infographic-catalog - REST API for a catalog of infographic entries
//!
//! This crate provides:
//! - List, create and delete of catalog records stored in PostgreSQL
//! - Multipart file upload into a shared directory served under `/uploads/`
//! - A `Catalog` abstraction with an in-memory implementation for tests

pub mod api;
pub mod config;
pub mod storage;
#[cfg(test)]
pub mod testutil;
pub mod upload_store;

use std::sync::Arc;

use storage::Catalog;
use upload_store::UploadStore;

/// Shared application state
pub struct AppState {
    pub catalog: Arc<dyn Catalog>,
    pub uploads: Arc<dyn UploadStore>,
}
