pub mod db;
mod infographics;
pub mod memory;
pub mod models;

pub use db::{create_pool, DatabaseError};
pub use infographics::PgCatalog;
pub use memory::MemoryCatalog;

use async_trait::async_trait;

use models::{InfographicRecord, NewInfographic};

/// Record repository for the infographic catalog.
/// Ids and creation timestamps are assigned by the backend, never by callers.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// All records, newest first.
    async fn list(&self) -> Result<Vec<InfographicRecord>, DatabaseError>;
    async fn insert(&self, new: NewInfographic) -> Result<InfographicRecord, DatabaseError>;
    /// Returns `false` when no record had this id.
    async fn delete(&self, id: i64) -> Result<bool, DatabaseError>;
}
