//! Domain entities.

mod link;

pub use link::LinkRecord;
