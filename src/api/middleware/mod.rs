//! Cross-cutting request lifecycle middleware.

pub mod server_header;
pub mod tracing;
