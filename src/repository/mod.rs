use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::feedback::{Feedback, NewFeedback, UpdateFeedback};
use crate::domain::specification::FeedbackSpecification;
use crate::domain::types::FeedbackId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod feedback;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters and pagination applied when listing feedback records.
pub struct FeedbackListQuery {
    pub specifications: Vec<FeedbackSpecification>,
    pub pagination: Option<Pagination>,
}

impl FeedbackListQuery {
    /// Construct a query over every stored feedback record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Narrow the results with the given specifications, combined with AND.
    pub fn specifications(mut self, specifications: Vec<FeedbackSpecification>) -> Self {
        self.specifications = specifications;
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations over feedback records.
pub trait FeedbackReader {
    fn get_feedback_by_id(&self, id: FeedbackId) -> RepositoryResult<Option<Feedback>>;
    /// Returns the number of records matching every specification, ignoring
    /// pagination, together with the requested page of them.
    fn list_feedbacks(&self, query: FeedbackListQuery)
    -> RepositoryResult<(usize, Vec<Feedback>)>;
}

/// Write operations over feedback records.
pub trait FeedbackWriter {
    fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback>;
    fn create_feedbacks(&self, new_feedbacks: &[NewFeedback]) -> RepositoryResult<usize>;
    fn update_feedback(
        &self,
        feedback_id: FeedbackId,
        updates: &UpdateFeedback,
    ) -> RepositoryResult<Feedback>;
    fn delete_feedback(&self, feedback_id: FeedbackId) -> RepositoryResult<()>;
}
