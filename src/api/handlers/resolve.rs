//! Handler for short link resolution and redirect.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::collections::HashMap;

use crate::api::dto::resolve::ResolveResponse;
use crate::application::services::Resolution;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code and redirects or returns the destination.
///
/// # Endpoint
///
/// `GET /{code}?visit={true|false}`
///
/// # Behavior
///
/// - `visit=true` (the default): counts the visit and answers
///   `301 Moved Permanently` with a `Location` header, which clients and
///   intermediaries may cache.
/// - `visit=false`: previews the destination as `200 OK` with body
///   `{"url": ...}` and leaves the visit counter untouched.
/// - Any other `visit` value is rejected as a validation error.
///
/// # Errors
///
/// Returns 404 Not Found when no record exists for the normalized code, or
/// when the code normalizes to nothing (whitespace-only path segment).
/// Returns 400 Bad Request for an unrecognized `visit` value.
/// Returns 503 Service Unavailable when the store cannot be reached.
pub async fn resolve_handler(
    Path(code): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let count_visit = parse_visit_param(params.get("visit").map(String::as_str))?;

    match state.resolver.resolve(&code, count_visit).await? {
        Resolution::Found { destination } => {
            if count_visit {
                Ok((
                    StatusCode::MOVED_PERMANENTLY,
                    [(header::LOCATION, destination)],
                )
                    .into_response())
            } else {
                Ok(Json(ResolveResponse { url: destination }).into_response())
            }
        }
        Resolution::Invalid | Resolution::NotFound => Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        )),
    }
}

/// Parses the `visit` query parameter.
///
/// Recognized values are `true` and `false`; absence means `true`.
fn parse_visit_param(raw: Option<&str>) -> Result<bool, AppError> {
    match raw {
        None | Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(AppError::bad_request(
            "Unrecognized visit value",
            json!({ "visit": other, "expected": ["true", "false"] }),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_param_defaults_to_true() {
        assert!(parse_visit_param(None).unwrap());
    }

    #[test]
    fn test_visit_param_recognized_values() {
        assert!(parse_visit_param(Some("true")).unwrap());
        assert!(!parse_visit_param(Some("false")).unwrap());
    }

    #[test]
    fn test_visit_param_rejects_anything_else() {
        for raw in ["0", "1", "TRUE", "yes", ""] {
            let err = parse_visit_param(Some(raw)).unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
        }
    }
}
