//! Link entity representing a short code to destination mapping.

/// A stored short link together with its visit counter.
///
/// Owned exclusively by the link store. `visit_count` is monotonically
/// non-decreasing and only ever mutated through
/// [`crate::domain::repositories::LinkRepository::increment_visit`].
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LinkRecord {
    pub code: String,
    pub destination: String,
    pub visit_count: i64,
}

impl LinkRecord {
    /// Creates a new LinkRecord instance.
    pub fn new(code: impl Into<String>, destination: impl Into<String>, visit_count: i64) -> Self {
        Self {
            code: code.into(),
            destination: destination.into(),
            visit_count,
        }
    }
}
