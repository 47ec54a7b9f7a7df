//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use super::{FeedbackListQuery, FeedbackReader, FeedbackWriter};
use crate::domain::feedback::{Feedback, NewFeedback, UpdateFeedback};
use crate::domain::types::FeedbackId;
use crate::repository::errors::RepositoryResult;

mock! {
    pub FeedbackReader {}

    impl FeedbackReader for FeedbackReader {
        fn get_feedback_by_id(&self, id: FeedbackId) -> RepositoryResult<Option<Feedback>>;
        fn list_feedbacks(&self, query: FeedbackListQuery) -> RepositoryResult<(usize, Vec<Feedback>)>;
    }
}

mock! {
    pub FeedbackWriter {}

    impl FeedbackWriter for FeedbackWriter {
        fn create_feedback(&self, new_feedback: &NewFeedback) -> RepositoryResult<Feedback>;
        fn create_feedbacks(&self, new_feedbacks: &[NewFeedback]) -> RepositoryResult<usize>;
        fn update_feedback(&self, feedback_id: FeedbackId, updates: &UpdateFeedback) -> RepositoryResult<Feedback>;
        fn delete_feedback(&self, feedback_id: FeedbackId) -> RepositoryResult<()>;
    }
}
