//! Short code resolution service.

use std::sync::Arc;

use crate::application::services::VisitAccountant;
use crate::domain::repositories::LinkRepository;
use crate::domain::short_code::ShortCode;
use crate::error::AppError;

/// Outcome of resolving a raw short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A record exists; `destination` is where the caller should be sent.
    Found { destination: String },
    /// The raw input was empty or normalized to nothing; the store was never
    /// consulted.
    Invalid,
    /// No record exists for the normalized code.
    NotFound,
}

/// Composes the normalizer, the store, and the visit accountant to answer
/// "given a raw short code, what is the destination, and did we count a
/// visit?".
pub struct ResolutionService {
    accountant: VisitAccountant,
}

impl ResolutionService {
    /// Creates a new resolution service over the given store.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            accountant: VisitAccountant::new(repository),
        }
    }

    /// Resolves a raw short code to its destination.
    ///
    /// Empty and whitespace-only input is rejected as [`Resolution::Invalid`]
    /// before normalization; the store is never consulted for it. Otherwise
    /// the input is normalized and handed to the [`VisitAccountant`], so two
    /// raw inputs that normalize equal always resolve identically.
    ///
    /// On `Found` with `count_visit` set, the visit counter has been
    /// durably incremented by the time this returns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the store cannot be
    /// reached. `Invalid` and `NotFound` are outcomes, not errors.
    pub async fn resolve(
        &self,
        raw_code: &str,
        count_visit: bool,
    ) -> Result<Resolution, AppError> {
        if raw_code.is_empty() {
            return Ok(Resolution::Invalid);
        }

        let code = ShortCode::normalize(raw_code);
        if code.is_empty() {
            return Ok(Resolution::Invalid);
        }

        match self
            .accountant
            .record_visit_if_requested(&code, count_visit)
            .await?
        {
            Some(destination) => Ok(Resolution::Found { destination }),
            None => Ok(Resolution::NotFound),
        }
    }
}
