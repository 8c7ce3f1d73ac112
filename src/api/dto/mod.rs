//! API data transfer objects.

pub mod health;
pub mod resolve;
