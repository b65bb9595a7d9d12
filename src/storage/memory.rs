use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Mutex, MutexGuard};

use super::db::DatabaseError;
use super::models::{InfographicRecord, NewInfographic};
use super::Catalog;

/// In-process catalog with the same id and ordering rules as the database:
/// ids are increasing and never reused, listing is newest first.
#[derive(Default)]
pub struct MemoryCatalog {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    records: Vec<InfographicRecord>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn list(&self) -> Result<Vec<InfographicRecord>, DatabaseError> {
        let mut records = self.lock().records.clone();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }

    async fn insert(&self, new: NewInfographic) -> Result<InfographicRecord, DatabaseError> {
        let mut inner = self.lock();
        inner.last_id += 1;

        let record = InfographicRecord {
            id: inner.last_id,
            created_at: Utc::now(),
            title: new.title,
            thumbnail_url: new.thumbnail_url,
            page_url: new.page_url,
            description: new.description,
            category: new.category,
            category_color: new.category_color,
        };
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let mut inner = self.lock();
        let before = inner.records.len();
        inner.records.retain(|r| r.id != id);
        Ok(inner.records.len() < before)
    }
}
