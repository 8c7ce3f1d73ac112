//! DTOs for the resolve endpoint.

use serde::{Deserialize, Serialize};

/// Body returned for `visit=false` lookups: the destination without a redirect.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub url: String,
}
