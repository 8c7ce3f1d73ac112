//! Repository trait for short link data access.

use crate::domain::entities::LinkRecord;
use crate::domain::short_code::ShortCode;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability set for short links.
///
/// The resolution path depends only on this interface, never on a concrete
/// backend.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process test double
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its canonical short code.
    ///
    /// Never mutates state.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the backend cannot be reached.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>, AppError>;

    /// Atomically increments the visit counter for a short code.
    ///
    /// The increment must be a single atomic operation at the storage layer,
    /// never a read-modify-write at the caller; concurrent increments on the
    /// same key are all reflected in the final count.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a record was updated, `Ok(false)` if no record matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the backend cannot be reached.
    async fn increment_visit(&self, code: &ShortCode) -> Result<bool, AppError>;

    /// Probes backend connectivity. Used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the backend cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
