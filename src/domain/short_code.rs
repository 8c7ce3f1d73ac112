//! Canonical short code representation.
//!
//! Every place a short code is compared or looked up goes through
//! [`ShortCode::normalize`], so equivalent raw inputs always hit the same key.

use std::fmt;

/// A normalized short link identifier.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. The remainder is lower-cased
///
/// The transformation is total and idempotent: normalizing an already
/// normalized code is a no-op. An empty result is representable ("" or
/// whitespace-only input) but is never valid for lookup; callers must check
/// [`ShortCode::is_empty`] before consulting the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Canonicalizes a raw short code string.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Returns the canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for codes that must not be looked up.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
