//! Business logic shared by the HTTP handlers and the binaries.

pub mod errors;
pub mod feedback;
pub mod logging;

pub use errors::{ServiceError, ServiceResult};
