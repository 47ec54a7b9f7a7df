//! Feedback retrieval and maintenance.
//!
//! Retrieval normalizes pagination, turns the filter into specifications and
//! lets the repository apply them, count the matches and cut out the requested
//! page. Every retrieval failure is reported once to the [`ErrorSink`] and
//! surfaced as [`ServiceError::RetrievalFailed`].

use crate::domain::feedback::{Feedback, FeedbackFilter, QueryOptions};
use crate::domain::specification::build_specifications;
use crate::domain::types::FeedbackId;
use crate::dto::feedback::FeedbackPage;
use crate::forms::feedback::FeedbackForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{FeedbackListQuery, FeedbackReader, FeedbackWriter};
use crate::services::logging::ErrorSink;
use crate::services::{ServiceError, ServiceResult};

/// Leading sentence of every retrieval failure message.
pub const RETRIEVAL_ERROR: &str = "An error occurred while fetching feedbacks.";

fn retrieval_failed<S>(sink: &S, err: RepositoryError) -> ServiceError
where
    S: ErrorSink + ?Sized,
{
    let detail = err.to_string();
    let message = format!("{RETRIEVAL_ERROR} {detail}.");
    sink.error(&message, &detail);
    ServiceError::RetrievalFailed(message)
}

fn fetch_page<R, S>(
    repo: &R,
    sink: &S,
    query: FeedbackListQuery,
    page: i32,
    page_size: i32,
) -> ServiceResult<FeedbackPage>
where
    R: FeedbackReader + ?Sized,
    S: ErrorSink + ?Sized,
{
    // Both values are positive once normalized.
    let query = query.paginate(page as usize, page_size as usize);

    let (total_records, data) = repo
        .list_feedbacks(query)
        .map_err(|err| retrieval_failed(sink, err))?;

    Ok(FeedbackPage {
        total_records,
        page,
        page_size,
        data,
    })
}

/// Returns one page of all feedback records. The total is the size of the
/// whole population.
pub fn get_feedbacks<R, S>(
    repo: &R,
    sink: &S,
    mut options: QueryOptions,
) -> ServiceResult<FeedbackPage>
where
    R: FeedbackReader + ?Sized,
    S: ErrorSink + ?Sized,
{
    options.normalize();

    fetch_page(
        repo,
        sink,
        FeedbackListQuery::new(),
        options.page,
        options.page_size,
    )
}

/// Returns one page of the feedback records matching every active field of
/// `filter`. The total counts all matches, not just the page.
pub fn get_filtered_feedbacks<R, S>(
    repo: &R,
    sink: &S,
    mut filter: FeedbackFilter,
) -> ServiceResult<FeedbackPage>
where
    R: FeedbackReader + ?Sized,
    S: ErrorSink + ?Sized,
{
    filter.normalize_pagination();

    let query = FeedbackListQuery::new().specifications(build_specifications(Some(&filter)));

    fetch_page(repo, sink, query, filter.page, filter.page_size)
}

/// Fetches a single feedback record.
pub fn get_feedback<R>(repo: &R, feedback_id: i32) -> ServiceResult<Feedback>
where
    R: FeedbackReader + ?Sized,
{
    // Non-positive ids are never assigned by the store.
    let feedback_id = FeedbackId::new(feedback_id).map_err(|_| ServiceError::NotFound)?;

    repo.get_feedback_by_id(feedback_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the form and stores a new feedback record.
pub fn create_feedback<R>(repo: &R, form: &FeedbackForm) -> ServiceResult<Feedback>
where
    R: FeedbackWriter + ?Sized,
{
    let new_feedback = form.to_new_feedback()?;

    repo.create_feedback(&new_feedback)
        .map_err(ServiceError::from)
}

/// Validates the form and overwrites the customer, product, rating and
/// comment of an existing record.
pub fn update_feedback<R>(repo: &R, feedback_id: i32, form: &FeedbackForm) -> ServiceResult<Feedback>
where
    R: FeedbackWriter + ?Sized,
{
    let updates = form.to_update_feedback()?;
    let feedback_id = FeedbackId::new(feedback_id).map_err(|_| ServiceError::NotFound)?;

    repo.update_feedback(feedback_id, &updates)
        .map_err(ServiceError::from)
}

/// Removes a feedback record permanently.
pub fn delete_feedback<R>(repo: &R, feedback_id: i32) -> ServiceResult<()>
where
    R: FeedbackWriter + ?Sized,
{
    let feedback_id = FeedbackId::new(feedback_id).map_err(|_| ServiceError::NotFound)?;

    repo.delete_feedback(feedback_id)
        .map_err(ServiceError::from)
}
