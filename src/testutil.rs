//! Shared test helpers for handler tests.

use std::sync::Arc;

use crate::storage::MemoryCatalog;
use crate::upload_store::LocalStore;
use crate::AppState;

/// Create a test AppState with an in-memory catalog and a local upload store.
pub fn test_state(temp_dir: &tempfile::TempDir) -> Arc<AppState> {
    let uploads_dir = temp_dir.path().join("uploads");
    let uploads = LocalStore::new(&uploads_dir).expect("Failed to create test upload store");

    Arc::new(AppState {
        catalog: Arc::new(MemoryCatalog::new()),
        uploads: Arc::new(uploads),
    })
}
