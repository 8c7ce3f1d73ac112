#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use linkhop::domain::entities::LinkRecord;
use linkhop::domain::repositories::LinkRepository;
use linkhop::domain::short_code::ShortCode;
use linkhop::error::AppError;
use linkhop::infrastructure::persistence::MemoryLinkRepository;
use linkhop::state::AppState;
use serde_json::json;

/// Builds application state over a fresh in-memory store.
///
/// The repository handle is returned alongside the state so tests can seed
/// records and inspect counters directly.
pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    (AppState::new(repo.clone()), repo)
}

pub async fn seed_link(repo: &MemoryLinkRepository, code: &str, destination: &str, visits: i64) {
    repo.insert(LinkRecord::new(code, destination, visits)).await;
}

pub async fn visit_count(repo: &MemoryLinkRepository, code: &str) -> i64 {
    repo.lookup(&ShortCode::normalize(code))
        .await
        .unwrap()
        .expect("record should exist")
        .visit_count
}

/// Store double whose every operation fails with `StoreUnavailable`.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn lookup(&self, _code: &ShortCode) -> Result<Option<LinkRecord>, AppError> {
        Err(AppError::store_unavailable("Store unavailable", json!({})))
    }

    async fn increment_visit(&self, _code: &ShortCode) -> Result<bool, AppError> {
        Err(AppError::store_unavailable("Store unavailable", json!({})))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::store_unavailable("Store unavailable", json!({})))
    }
}
