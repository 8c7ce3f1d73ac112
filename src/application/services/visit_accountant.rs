//! Visit counting decision logic.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::domain::short_code::ShortCode;
use crate::error::AppError;
use serde_json::json;

/// Decides whether a resolution counts as a visit and applies the counter
/// update without losing concurrent increments.
///
/// The counter update itself is delegated to
/// [`LinkRepository::increment_visit`], which is atomic at the storage layer.
pub struct VisitAccountant {
    repository: Arc<dyn LinkRepository>,
}

impl VisitAccountant {
    /// Creates a new accountant over the given store.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Returns the destination for a short code, counting a visit when asked.
    ///
    /// # Behavior
    ///
    /// - No record for `code`: returns `Ok(None)`, performs no mutation.
    /// - Record exists, `should_count` is `true`: increments the visit
    ///   counter, then returns the destination.
    /// - Record exists, `should_count` is `false`: returns the destination
    ///   without mutating. This lets callers preview where a code points
    ///   without inflating counts.
    ///
    /// Once the decision to count is made, the increment survives client
    /// disconnects: it runs on a spawned task that the runtime drives to
    /// completion even if this future is dropped. On the normal path the task
    /// is awaited, so the count is applied before the destination is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the store cannot be
    /// reached for either the lookup or the increment.
    pub async fn record_visit_if_requested(
        &self,
        code: &ShortCode,
        should_count: bool,
    ) -> Result<Option<String>, AppError> {
        let Some(record) = self.repository.lookup(code).await? else {
            return Ok(None);
        };

        if should_count {
            let repository = self.repository.clone();
            let task_code = code.clone();
            let updated =
                tokio::spawn(async move { repository.increment_visit(&task_code).await })
                    .await
                    .map_err(|e| {
                        AppError::internal("Visit task aborted", json!({ "reason": e.to_string() }))
                    })??;

            // External deletion can race the lookup; the destination is still
            // served, but the uncounted visit should not pass silently.
            if !updated {
                tracing::warn!(%code, "visit not recorded, link disappeared before increment");
            }
        }

        Ok(Some(record.destination))
    }
}
