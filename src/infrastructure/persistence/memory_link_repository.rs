//! In-memory implementation of the link repository.
//!
//! Serves as the test double for the resolution path; also usable for local
//! experiments without a database.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::domain::short_code::ShortCode;
use crate::error::AppError;

/// In-process link store backed by a `HashMap`.
///
/// The increment runs entirely under the write lock, so it is atomic with
/// respect to concurrent callers, matching the contract of the PostgreSQL
/// adapter.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, LinkRecord>>,
}

impl MemoryLinkRepository {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a record, keyed by its code.
    pub async fn insert(&self, record: LinkRecord) {
        self.links
            .write()
            .await
            .insert(record.code.clone(), record);
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>, AppError> {
        Ok(self.links.read().await.get(code.as_str()).cloned())
    }

    async fn increment_visit(&self, code: &ShortCode) -> Result<bool, AppError> {
        match self.links.write().await.get_mut(code.as_str()) {
            Some(record) => {
                record.visit_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
