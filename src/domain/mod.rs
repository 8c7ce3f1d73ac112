//! Core business entities, identifiers, and repository traits.

pub mod entities;
pub mod repositories;
pub mod short_code;
