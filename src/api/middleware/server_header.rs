//! Middleware attaching the serving software identity to every response.

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// `Server` header value, e.g. `linkhop/0.1.0`.
pub const SERVER_IDENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Appends `Server: <name>/<version>` to every outgoing response, including
/// error and fallback responses.
pub async fn server_header_mw(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    response
        .headers_mut()
        .insert(header::SERVER, HeaderValue::from_static(SERVER_IDENT));

    response
}
