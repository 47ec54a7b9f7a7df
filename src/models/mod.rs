//! Database models shared across the feedback repository.

#[cfg(feature = "server")]
pub mod config;
pub mod feedback;
