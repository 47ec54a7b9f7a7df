//! Domain types exposed by the feedback service layer.

pub mod feedback;
pub mod specification;
pub mod types;
