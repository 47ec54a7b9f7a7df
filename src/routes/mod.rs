use std::fmt::Display;

use actix_web::HttpResponse;
use actix_web::error::BlockingError;

use crate::dto::feedback::MessageResponse;

pub mod feedback;

/// Answer 500 with `"{context}. {err}."` after logging the failure.
pub fn internal_error(context: &str, err: impl Display) -> HttpResponse {
    log::error!("{context}: {err}");
    HttpResponse::InternalServerError().json(MessageResponse::new(format!("{context}. {err}.")))
}

/// Answer 500 when the blocking thread pool dropped a job.
pub fn blocking_error(err: BlockingError) -> HttpResponse {
    internal_error("Database worker is unavailable", err)
}
