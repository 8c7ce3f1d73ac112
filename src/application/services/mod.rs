//! Application services.

mod resolution_service;
mod visit_accountant;

pub use resolution_service::{Resolution, ResolutionService};
pub use visit_accountant::VisitAccountant;
