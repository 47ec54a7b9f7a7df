//! JSON endpoints under `/api/feedback`.
//!
//! Repository calls run on actix's blocking pool so the async workers stay
//! free while SQLite is busy.

use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::feedback::{FeedbackFilter, QueryOptions};
use crate::dto::feedback::MessageResponse;
use crate::forms::feedback::FeedbackForm;
use crate::repository::DieselRepository;
use crate::routes::{blocking_error, internal_error};
use crate::services::logging::LogSink;
use crate::services::{ServiceError, feedback as feedback_service};

pub const NO_MATCHES_MESSAGE: &str = "No feedback entries match the specified criteria.";

fn not_found_message(feedback_id: i32) -> MessageResponse {
    MessageResponse::new(format!("Feedback with ID {feedback_id} not found."))
}

fn retrieval_error(err: ServiceError) -> HttpResponse {
    match err {
        // Already reported through the sink.
        ServiceError::RetrievalFailed(message) => {
            HttpResponse::InternalServerError().json(MessageResponse::new(message))
        }
        other => internal_error("An error occurred while fetching feedbacks", other),
    }
}

#[get("")]
/// Return one page of all feedback records.
pub async fn list_feedbacks(
    params: web::Query<QueryOptions>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let options = params.into_inner();

    match web::block(move || feedback_service::get_feedbacks(&repo, &LogSink, options)).await {
        Ok(Ok(page)) => HttpResponse::Ok().json(page),
        Ok(Err(err)) => retrieval_error(err),
        Err(err) => blocking_error(err),
    }
}

#[post("/filter")]
/// Return one page of the feedback records matching the filter in the body.
///
/// An empty page answers `404 Not Found`, even when only the page number is
/// past the last match.
pub async fn filter_feedbacks(
    filter: web::Json<FeedbackFilter>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let filter = filter.into_inner();

    match web::block(move || feedback_service::get_filtered_feedbacks(&repo, &LogSink, filter))
        .await
    {
        Ok(Ok(page)) if page.data.is_empty() => {
            HttpResponse::NotFound().json(MessageResponse::new(NO_MATCHES_MESSAGE))
        }
        Ok(Ok(page)) => HttpResponse::Ok().json(page),
        Ok(Err(err)) => retrieval_error(err),
        Err(err) => blocking_error(err),
    }
}

#[get("/{feedback_id}")]
pub async fn show_feedback(
    feedback_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let feedback_id = feedback_id.into_inner();
    let repo = repo.get_ref().clone();

    match web::block(move || feedback_service::get_feedback(&repo, feedback_id)).await {
        Ok(Ok(feedback)) => HttpResponse::Ok().json(feedback),
        Ok(Err(ServiceError::NotFound)) => {
            HttpResponse::NotFound().json(not_found_message(feedback_id))
        }
        Ok(Err(err)) => internal_error(
            &format!("An unexpected error occurred while fetching feedback with ID {feedback_id}"),
            err,
        ),
        Err(err) => blocking_error(err),
    }
}

#[post("")]
/// Store a new feedback record and point `Location` at it.
pub async fn create_feedback(
    form: web::Json<FeedbackForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let form = form.into_inner();
    let context = format!(
        "An unexpected error occurred while creating feedback for product {} from customer with id {}",
        form.product_id, form.customer_id
    );
    let repo = repo.get_ref().clone();

    match web::block(move || feedback_service::create_feedback(&repo, &form)).await {
        Ok(Ok(feedback)) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/feedback/{}", feedback.id)))
            .json(feedback),
        Ok(Err(ServiceError::Form(message))) => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        Ok(Err(err)) => internal_error(&context, err),
        Err(err) => blocking_error(err),
    }
}

#[put("/{feedback_id}")]
pub async fn update_feedback(
    feedback_id: web::Path<i32>,
    form: web::Json<FeedbackForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let feedback_id = feedback_id.into_inner();
    let form = form.into_inner();
    let repo = repo.get_ref().clone();

    match web::block(move || feedback_service::update_feedback(&repo, feedback_id, &form)).await {
        Ok(Ok(feedback)) => HttpResponse::Ok().json(feedback),
        Ok(Err(ServiceError::Form(message))) => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        Ok(Err(ServiceError::NotFound)) => {
            HttpResponse::NotFound().json(not_found_message(feedback_id))
        }
        Ok(Err(err)) => internal_error(
            &format!("An unexpected error occurred while updating feedback with ID {feedback_id}"),
            err,
        ),
        Err(err) => blocking_error(err),
    }
}

#[delete("/{feedback_id}")]
pub async fn delete_feedback(
    feedback_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let feedback_id = feedback_id.into_inner();
    let repo = repo.get_ref().clone();

    match web::block(move || feedback_service::delete_feedback(&repo, feedback_id)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(ServiceError::NotFound)) => HttpResponse::NotFound().finish(),
        Ok(Err(err)) => internal_error(
            &format!("An unexpected error occurred while deleting feedback with ID {feedback_id}"),
            err,
        ),
        Err(err) => blocking_error(err),
    }
}

/// Register every feedback endpoint on a scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/feedback")
            .service(list_feedbacks)
            .service(filter_feedbacks)
            .service(create_feedback)
            .service(show_feedback)
            .service(update_feedback)
            .service(delete_feedback),
    );
}
